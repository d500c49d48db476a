//! The command catalog: every intent the assistant can recognize.
//!
//! The catalog is the configuration surface of the whole engine. Teaching
//! the assistant a new intent means adding a [`Command`] to the builtin set
//! (or overlaying one from a TOML file); nothing else is tuned at runtime.
//! Patterns may overlap across commands on purpose: ambiguity is settled by
//! match confidence, not by catalog exclusivity. The catalog is built once
//! at startup and never mutated afterwards, so it is safe to share freely.

mod builtin;


use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::normalize;

/// Name of the freeform item-title parameter ("add task wipe the counter").
pub const PARAM_TITLE: &str = "title";
/// Name of the reorder direction parameter ("move task up").
pub const PARAM_DIRECTION: &str = "direction";

/// Broad grouping used by the host UI to route recognized commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandCategory {
    Task,
    Navigation,
    Query,
    Companion,
    Settings,
}

impl std::fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandCategory::Task => write!(f, "task"),
            CommandCategory::Navigation => write!(f, "navigation"),
            CommandCategory::Query => write!(f, "query"),
            CommandCategory::Companion => write!(f, "companion"),
            CommandCategory::Settings => write!(f, "settings"),
        }
    }
}

/// Primitive type of a declared command parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Text,
    Number,
    Flag,
}

/// An immutable intent definition.
///
/// Loaded once at startup; never mutated at runtime. The `action` tag is
/// what the host application switches on; this crate never interprets it
/// beyond parameter extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    /// Stable identifier, unique across the catalog.
    pub id: String,
    /// Spoken surface forms, matched fuzzily. Never empty.
    pub patterns: Vec<String>,
    /// Semantic action tag the host maps to application behavior.
    pub action: String,
    pub category: CommandCategory,
    /// Parameters this command can extract (name to primitive type).
    #[serde(default)]
    pub params: BTreeMap<String, ParamKind>,
    /// Human-readable description for help listings.
    pub description: String,
    /// Example utterances for documentation and tests.
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        action: impl Into<String>,
        category: CommandCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            patterns: Vec::new(),
            action: action.into(),
            category,
            params: BTreeMap::new(),
            description: description.into(),
            examples: Vec::new(),
        }
    }

    /// Add a spoken surface form.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Declare an extractable parameter.
    pub fn with_param(mut self, name: impl Into<String>, kind: ParamKind) -> Self {
        self.params.insert(name.into(), kind);
        self
    }

    /// Add an example utterance.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }
}

/// A malformed command definition. These are programming (or overlay
/// authoring) errors caught when the catalog is constructed, not runtime
/// conditions the resolver defends against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate command id '{0}'")]
    DuplicateId(String),
    #[error("command '{0}' declares no patterns")]
    NoPatterns(String),
    #[error("command '{0}' pattern '{1}' normalizes to nothing")]
    BlankPattern(String, String),
}

/// The full set of recognizable commands. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    commands: Vec<Command>,
}

/// On-disk overlay format: a TOML file with `[[commands]]` entries.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    commands: Vec<Command>,
}

impl Catalog {
    /// The builtin catalog. Validity of the builtin set is pinned by tests
    /// rather than re-checked on every construction.
    pub fn builtin() -> Self {
        Self {
            commands: builtin::commands(),
        }
    }

    /// Build a catalog from an explicit command list, validating it.
    pub fn new(commands: Vec<Command>) -> std::result::Result<Self, CatalogError> {
        let catalog = Self { commands };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a TOML overlay and merge it over the builtin set: an entry
    /// whose id matches a builtin command replaces it, anything else is
    /// appended. The merged result is validated before use.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog overlay: {}", path.display()))?;
        let overlay: CatalogFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse catalog overlay: {}", path.display()))?;

        let mut commands = builtin::commands();
        for entry in overlay.commands {
            match commands.iter_mut().find(|c| c.id == entry.id) {
                Some(existing) => *existing = entry,
                None => commands.push(entry),
            }
        }

        let catalog = Self { commands };
        catalog
            .validate()
            .with_context(|| format!("Invalid catalog overlay: {}", path.display()))?;
        Ok(catalog)
    }

    /// Check the catalog invariants: unique ids, at least one pattern per
    /// command, and no pattern that normalizes to an empty string.
    pub fn validate(&self) -> std::result::Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for command in &self.commands {
            if !seen.insert(command.id.as_str()) {
                return Err(CatalogError::DuplicateId(command.id.clone()));
            }
            if command.patterns.is_empty() {
                return Err(CatalogError::NoPatterns(command.id.clone()));
            }
            for pattern in &command.patterns {
                if normalize(pattern).is_empty() {
                    return Err(CatalogError::BlankPattern(
                        command.id.clone(),
                        pattern.clone(),
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn get(&self, id: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
