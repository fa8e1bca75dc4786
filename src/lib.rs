pub mod config;
pub mod input;
pub mod script;
pub mod todo;

pub use config::{Config, ConfigLoader, Scope};
pub use input::{read_optional_line, ScopedInput};
pub use script::{run, seed_registry, RunSummary};
pub use todo::{RegistryError, Todo, TodoRegistry};
