//! TidyVox - voice commands for a hands-busy tidy-up assistant
//!
//! TidyVox turns free-form speech into structured task-list commands. A
//! streaming speech recognizer (outside this crate) hands over transcripts;
//! TidyVox normalizes them, fuzzy-matches them against a command catalog,
//! extracts parameters like task titles and move directions, and emits
//! recognized commands with a confidence score.
//!
//! ## Layers
//!
//! 1. **Catalog**: the built-in command set plus optional TOML overlays.
//!
//! 2. **Resolver**: normalization, scoring and parameter extraction for a
//!    single utterance.
//!
//! 3. **Driver**: a poll-based session loop that keeps a transcript source
//!    alive indefinitely and publishes events to subscribers.

pub mod catalog;
pub mod driver;
pub mod matcher;
pub mod resolver;
pub mod text;

pub use catalog::{Catalog, CatalogError, Command, CommandCategory, ParamKind};
pub use driver::{
    CaptureError, ChannelSource, DriverConfig, DriverState, EngineEvent, RecognitionDriver,
    SourceEvent, TranscriptFeed, TranscriptSource,
};
pub use resolver::{CommandMatch, CommandResolver};
