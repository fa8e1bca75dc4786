// basics/src/script.rs

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

use crate::{
    config::Config,
    input::read_optional_line,
    todo::{Todo, TodoRegistry},
};

/// `completed` and `pending` are counted before the input read; `total` after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Text read from input, when a line was available.
    pub added: Option<String>,
}

pub fn seed_registry(config: &Config) -> TodoRegistry {
    let mut reg = TodoRegistry::new();
    for text in &config.seed {
        reg.append(Todo::new(reg.next_id(), text.as_str()));
    }
    reg
}

/// Runs the fixed demo sequence: list, toggle first, counts, texts,
/// first completed, bounds probe, optional read, final stats.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, out: &mut W) -> Result<RunSummary> {
    let mut todos = seed_registry(config);
    info!(seeded = todos.len(), "running todo script");

    writeln!(out, "All Todos:")?;
    for todo in todos.iter() {
        writeln!(out, "{todo}")?;
    }

    if !todos.is_empty() {
        todos.toggle_at(0)?;
    }

    // Counted once here; the final stats repeat these even if a todo is read later.
    let completed = todos.filter_completed().len();
    let pending = todos.count_pending();
    writeln!(out, "\nCompleted: {completed}")?;
    writeln!(out, "Pending: {pending}")?;

    writeln!(out, "\nTodo texts:")?;
    for text in todos.map_texts() {
        writeln!(out, "  - {text}")?;
    }

    if let Some(first) = todos.find_first_completed() {
        writeln!(out, "\nFirst completed: {}", first.text())?;
    }

    if let Err(e) = todos.get_at(config.probe_index) {
        info!(error = %e, "bounds probe rejected");
        writeln!(out, "\nError: Index out of bounds")?;
    }

    writeln!(out, "\n{}", config.prompt)?;
    out.flush().context("flush prompt")?;
    let added = if config.read_input {
        read_optional_line(&mut todos, input)
    } else {
        drop(input);
        None
    };

    let summary = RunSummary {
        total: todos.len(),
        completed,
        pending,
        added,
    };
    writeln!(out, "\nFinal Stats:")?;
    writeln!(out, "Total: {}", summary.total)?;
    writeln!(out, "Completed: {}", summary.completed)?;
    writeln!(out, "Pending: {}", summary.pending)?;
    info!(total = summary.total, completed = summary.completed, pending = summary.pending, "script finished");
    Ok(summary)
}
