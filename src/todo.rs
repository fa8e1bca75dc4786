// basics/src/todo.rs

use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    id: u32,
    text: String,
    completed: bool,
}

impl Todo {
    /// New todos start pending. The id is taken as given.
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self { id, text: text.into(), completed: false }
    }

    pub fn id(&self) -> u32 { self.id }
    pub fn text(&self) -> &str { &self.text }
    pub fn is_completed(&self) -> bool { self.completed }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "✓" } else { "○" };
        write!(f, "[{}] {}", status, self.text)
    }
}

/// Ordered, append-only list of todos for a single run.
#[derive(Default, Clone, Debug)]
pub struct TodoRegistry {
    items: Vec<Todo>,
}

impl TodoRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &Todo> { self.items.iter() }

    pub fn append(&mut self, todo: Todo) {
        debug!(id = todo.id, text = %todo.text, "append todo");
        self.items.push(todo);
    }

    /// Bounds-checked access. Negative indices are rejected rather than wrapped.
    pub fn get_at(&self, index: isize) -> Result<&Todo, RegistryError> {
        let len = self.items.len();
        usize::try_from(index)
            .ok()
            .and_then(|i| self.items.get(i))
            .ok_or(RegistryError::IndexOutOfRange { index, len })
    }

    pub fn get_at_mut(&mut self, index: isize) -> Result<&mut Todo, RegistryError> {
        let len = self.items.len();
        usize::try_from(index)
            .ok()
            .and_then(|i| self.items.get_mut(i))
            .ok_or(RegistryError::IndexOutOfRange { index, len })
    }

    /// Flips the stored todo at `index` in place.
    pub fn toggle_at(&mut self, index: isize) -> Result<(), RegistryError> {
        let it = self.get_at_mut(index)?;
        it.toggle();
        debug!(id = it.id, completed = it.completed, "toggle todo");
        Ok(())
    }

    pub fn filter_completed(&self) -> Vec<&Todo> {
        self.items.iter().filter(|t| t.is_completed()).collect()
    }

    pub fn count_pending(&self) -> usize {
        self.items.iter().filter(|t| !t.is_completed()).count()
    }

    pub fn map_texts(&self) -> Vec<&str> {
        self.items.iter().map(Todo::text).collect()
    }

    pub fn find_first_completed(&self) -> Option<&Todo> {
        self.items.iter().find(|t| t.is_completed())
    }

    /// Id for the next appended todo: one past the current length.
    pub fn next_id(&self) -> u32 {
        u32::try_from(self.items.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }
}
