// basics/src/input.rs

use std::io::BufRead;
use tracing::{debug, warn};

use crate::todo::{Todo, TodoRegistry};

/// Owns an input source for the length of one read. The source is dropped
/// together with the guard, whichever way the read ends.
pub struct ScopedInput<R: BufRead> {
    reader: R,
    label: &'static str,
}

impl<R: BufRead> ScopedInput<R> {
    pub fn acquire(reader: R, label: &'static str) -> Self {
        debug!(source = label, "input acquired");
        Self { reader, label }
    }

    /// `None` on immediate end of input or when the source fails. Invalid
    /// UTF-8 is replaced rather than rejected. Line terminators are stripped.
    pub fn read_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => {
                warn!(source = self.label, error = %e, "input read failed, treating as no input");
                return None;
            }
        }
        if buf.ends_with(b"\n") { buf.pop(); }
        if buf.ends_with(b"\r") { buf.pop(); }
        Some(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<R: BufRead> Drop for ScopedInput<R> {
    fn drop(&mut self) {
        debug!(source = self.label, "input released");
    }
}

/// Reads at most one line from `reader` and appends it as a new todo with
/// id `len + 1`. Returns the text that was added, if any.
pub fn read_optional_line<R: BufRead>(registry: &mut TodoRegistry, reader: R) -> Option<String> {
    let mut input = ScopedInput::acquire(reader, "console");
    let line = input.read_line()?;
    registry.append(Todo::new(registry.next_id(), line.clone()));
    Some(line)
}
