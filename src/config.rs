// basics/src/config.rs

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use tracing::warn;

pub const DEFAULT_PROMPT: &str = "Enter a todo (or press Ctrl+D to skip):";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Texts appended, in order, before the script runs.
    pub seed: Vec<String>,
    /// Position used for the out-of-bounds lookup.
    pub probe_index: isize,
    pub prompt: String,
    pub read_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: vec!["Learn Rust".into(), "Understand ownership".into(), "Master iterators".into()],
            probe_index: 10,
            prompt: DEFAULT_PROMPT.into(),
            read_input: true,
        }
    }
}

/// A config file as written on disk: every key optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub seed: Option<Vec<String>>,
    pub probe_index: Option<isize>,
    pub prompt: Option<String>,
    pub read_input: Option<bool>,
}

fn merge(a: &mut Config, b: &PartialConfig) {
    if let Some(v) = &b.seed { a.seed = v.clone(); }
    if let Some(v) = b.probe_index { a.probe_index = v; }
    if let Some(v) = &b.prompt { a.prompt = v.clone(); }
    if let Some(v) = b.read_input { a.read_input = v; }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scope { User, Workspace, Explicit }

fn parse(path: &Path) -> Result<PartialConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse {}", path.display()))
}

/// Optional layers: absent files are skipped, broken ones are logged and skipped.
fn read_layer(scope: Scope, path: &Path) -> Option<PartialConfig> {
    if !path.exists() { return None; }
    match parse(path) {
        Ok(p) => Some(p),
        Err(e) => {
            warn!(?scope, path = %path.display(), error = %format!("{e:#}"), "skipping config layer");
            None
        }
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "todo-basics", "todo-basics").map(|p| p.config_dir().join("config.toml"))
}

pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(".todo").join("config.toml")
}

/// Resolves the effective config: defaults < user < workspace < explicit.
#[derive(Clone, Debug, Default)]
pub struct ConfigLoader {
    user_path: Option<PathBuf>,
    workspace_path: Option<PathBuf>,
    explicit_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(workspace_root: impl AsRef<Path>) -> Self {
        Self {
            user_path: user_config_path(),
            workspace_path: Some(workspace_config_path(workspace_root.as_ref())),
            explicit_path: None,
        }
    }

    pub fn with_user_path(mut self, path: Option<PathBuf>) -> Self { self.user_path = path; self }
    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self { self.explicit_path = path; self }

    pub fn load(&self) -> Result<Config> {
        let mut merged = Config::default();
        if let Some(usr) = self.user_path.as_deref().and_then(|p| read_layer(Scope::User, p)) {
            merge(&mut merged, &usr);
        }
        if let Some(ws) = self.workspace_path.as_deref().and_then(|p| read_layer(Scope::Workspace, p)) {
            merge(&mut merged, &ws);
        }
        // The explicit file was asked for by name, so failing to use it is fatal.
        if let Some(path) = &self.explicit_path {
            let p = parse(path).with_context(|| format!("load {:?} config layer", Scope::Explicit))?;
            merge(&mut merged, &p);
        }
        Ok(merged)
    }
}
