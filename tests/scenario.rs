use std::io::{self, BufRead, Cursor, Read};

use todo_basics::{run, Config, RegistryError, Todo, TodoRegistry};

fn run_with(input: &str) -> (String, todo_basics::RunSummary) {
    let mut out = Vec::new();
    let summary = run(&Config::default(), Cursor::new(input.to_owned()), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn registry_walkthrough() {
    let mut reg = TodoRegistry::new();
    reg.append(Todo::new(1, "Learn X"));
    reg.append(Todo::new(2, "Understand Y"));
    reg.append(Todo::new(3, "Master Z"));
    reg.toggle_at(0).unwrap();

    let done: Vec<u32> = reg.filter_completed().iter().map(|t| t.id()).collect();
    assert_eq!(done, vec![1]);
    assert_eq!(reg.count_pending(), 2);
    assert_eq!(reg.map_texts(), vec!["Learn X", "Understand Y", "Master Z"]);
    assert_eq!(reg.find_first_completed().map(Todo::id), Some(1));
    assert!(matches!(reg.get_at(10), Err(RegistryError::IndexOutOfRange { index: 10, len: 3 })));
}

#[test]
fn report_without_input() {
    let (out, summary) = run_with("");
    let expected = "\
All Todos:
[○] Learn Rust
[○] Understand ownership
[○] Master iterators

Completed: 1
Pending: 2

Todo texts:
  - Learn Rust
  - Understand ownership
  - Master iterators

First completed: Learn Rust

Error: Index out of bounds

Enter a todo (or press Ctrl+D to skip):

Final Stats:
Total: 3
Completed: 1
Pending: 2
";
    assert_eq!(out, expected);
    assert_eq!(summary.added, None);
}

#[test]
fn report_with_one_line_of_input() {
    let (out, summary) = run_with("Write docs\nsecond line is never read\n");
    assert!(out.ends_with("\nFinal Stats:\nTotal: 4\nCompleted: 1\nPending: 2\n"));
    assert_eq!(summary.added.as_deref(), Some("Write docs"));
    assert_eq!((summary.total, summary.completed, summary.pending), (4, 1, 2));
}

#[test]
fn empty_seed_skips_toggle_and_first_completed() {
    let cfg = Config { seed: vec![], ..Config::default() };
    let mut out = Vec::new();
    let summary = run(&cfg, Cursor::new("only\n"), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("All Todos:\n\nCompleted: 0\nPending: 0\n"));
    assert!(!out.contains("First completed"));
    assert!(out.contains("Error: Index out of bounds"));
    assert_eq!((summary.total, summary.completed, summary.pending), (1, 0, 0));
}

#[test]
fn negative_probe_is_reported_not_fatal() {
    let cfg = Config { probe_index: -3, ..Config::default() };
    let mut out = Vec::new();
    run(&cfg, Cursor::new(""), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("\nError: Index out of bounds\n"));
    assert!(out.contains("Final Stats:"));
}

struct Unreadable;

impl Read for Unreadable {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
    }
}

impl BufRead for Unreadable {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
    }
    fn consume(&mut self, _: usize) {}
}

#[test]
fn failing_input_still_reaches_final_stats() {
    let mut out = Vec::new();
    let summary = run(&Config::default(), Unreadable, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.ends_with("\nFinal Stats:\nTotal: 3\nCompleted: 1\nPending: 2\n"));
    assert_eq!(summary.added, None);
}

#[test]
fn invalid_utf8_input_is_added_with_replacement() {
    let mut out = Vec::new();
    let summary = run(&Config::default(), Cursor::new(vec![0xff, 0xfe, b'\n']), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("\nFinal Stats:\nTotal: 4\n"));
    assert_eq!(summary.added.as_deref(), Some("\u{fffd}\u{fffd}"));
}
