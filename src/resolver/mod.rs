//! Resolves transcripts to the best-matching catalog command.

mod params;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, Command};
use crate::matcher::score;

/// Hard floor: no match below this confidence is ever returned.
pub const ACCEPT_THRESHOLD: f32 = 0.5;
/// Exploratory floor for "did you mean" suggestion lists. Deliberately
/// below the acceptance floor so near misses still surface.
pub const SUGGEST_THRESHOLD: f32 = 0.3;

/// The winning interpretation of one utterance.
///
/// Created fresh per utterance and handed straight to the caller; matches
/// are never merged or persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CommandMatch {
    pub command: Command,
    /// Confidence in `[0, 1]`, at least [`ACCEPT_THRESHOLD`].
    pub confidence: f32,
    /// The pattern that produced the winning score.
    pub pattern: String,
    /// The utterance exactly as heard, before any normalization.
    pub input: String,
    /// Extracted parameters. A key is absent when extraction yielded
    /// nothing, never present with an empty value.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

/// Matches utterances against the whole catalog and keeps the best.
pub struct CommandResolver {
    catalog: Catalog,
}

impl CommandResolver {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The best command for `utterance`, or `None` when nothing clears the
    /// acceptance floor. `None` is the expected outcome for ordinary
    /// conversation, not an error.
    pub fn resolve(&self, utterance: &str) -> Option<CommandMatch> {
        let mut best: Option<(&Command, &str, f32)> = None;
        for command in self.catalog.commands() {
            for pattern in &command.patterns {
                let candidate = score(utterance, pattern);
                if candidate >= ACCEPT_THRESHOLD
                    && best.is_none_or(|(_, _, current)| candidate > current)
                {
                    best = Some((command, pattern, candidate));
                }
            }
        }

        let (command, pattern, confidence) = best?;
        let params = params::extract(command, utterance);
        debug!(command = %command.id, confidence, "resolved voice command");
        Some(CommandMatch {
            command: command.clone(),
            confidence,
            pattern: pattern.to_string(),
            input: utterance.to_string(),
            params,
        })
    }

    /// Commands worth offering for a partial utterance, best first.
    ///
    /// Read-only and side-effect free; each command is ranked by the
    /// maximum score across its patterns.
    pub fn suggestions(&self, partial: &str, limit: usize) -> Vec<&Command> {
        let mut ranked: Vec<(&Command, f32)> = self
            .catalog
            .commands()
            .iter()
            .filter_map(|command| {
                let best = command
                    .patterns
                    .iter()
                    .map(|pattern| score(partial, pattern))
                    .fold(0.0f32, f32::max);
                (best > SUGGEST_THRESHOLD).then_some((command, best))
            })
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(limit);
        ranked.into_iter().map(|(command, _)| command).collect()
    }
}
