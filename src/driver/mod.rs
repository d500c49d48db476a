//! Continuous recognition driver.
//!
//! Wraps a streaming transcript source, feeds final transcripts through
//! the resolver and keeps the source alive indefinitely. Streaming
//! recognizers end themselves periodically and fail on quiet rooms, so
//! the driver schedules restarts instead of treating either as fatal;
//! only a microphone permission denial stops the session.
//!
//! The driver is synchronous and poll-based: hosts call [`RecognitionDriver::pump`]
//! from their event loop (each frame, or on a short timer) and observe
//! results through the event bus. Transcripts are processed strictly in
//! arrival order and each resolves to at most one emitted command.

mod config;
mod events;
mod source;


pub use config::DriverConfig;
pub use events::{EngineEvent, EventBus};
pub use source::{CaptureError, ChannelSource, SourceEvent, TranscriptFeed, TranscriptSource};

use std::sync::mpsc::Receiver;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, trace, warn};

use crate::resolver::{CommandMatch, CommandResolver};

/// Confidence required before a match is surfaced. Stricter than the
/// resolver's acceptance floor so casual conversation does not flood the
/// user with low-confidence activations.
pub const DISPLAY_THRESHOLD: f32 = 0.7;

/// Driver lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// Not listening; nothing scheduled.
    #[default]
    Idle,
    /// Capture is live and transcripts are being resolved.
    Listening,
    /// A transient capture error occurred; a restart is pending.
    Recovering,
}

impl DriverState {
    /// True while the driver intends to keep listening, even if it is
    /// momentarily between capture sessions.
    pub fn is_active(&self) -> bool {
        matches!(self, DriverState::Listening | DriverState::Recovering)
    }

    pub fn is_listening(&self) -> bool {
        matches!(self, DriverState::Listening)
    }
}

impl std::fmt::Display for DriverState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverState::Idle => write!(f, "Idle"),
            DriverState::Listening => write!(f, "Listening"),
            DriverState::Recovering => write!(f, "Recovering"),
        }
    }
}

/// Owns the session state: the source, the listening flag, the transient
/// last-match feedback and the error/backoff counter. No other component
/// touches these; consumers only observe emitted events.
pub struct RecognitionDriver {
    resolver: CommandResolver,
    source: Box<dyn TranscriptSource>,
    config: DriverConfig,
    state: DriverState,
    bus: EventBus,
    last_match: Option<(CommandMatch, Instant)>,
    consecutive_errors: u32,
    restart_due: Option<Instant>,
    last_error: Option<String>,
}

impl RecognitionDriver {
    pub fn new(
        resolver: CommandResolver,
        source: Box<dyn TranscriptSource>,
        config: DriverConfig,
    ) -> Self {
        Self {
            resolver,
            source,
            config,
            state: DriverState::Idle,
            bus: EventBus::default(),
            last_match: None,
            consecutive_errors: 0,
            restart_due: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn resolver(&self) -> &CommandResolver {
        &self.resolver
    }

    /// The message of the last fatal capture error, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The most recent recognized command, held briefly for UI feedback.
    /// Cleared automatically a short while after recognition.
    pub fn current_feedback(&self) -> Option<&CommandMatch> {
        self.last_match.as_ref().map(|(matched, _)| matched)
    }

    /// True when a capture restart is scheduled.
    pub fn restart_pending(&self) -> bool {
        self.restart_due.is_some()
    }

    /// Observe driver events. Any number of subscribers may attach.
    pub fn subscribe(&mut self) -> Receiver<EngineEvent> {
        self.bus.subscribe()
    }

    /// Begin continuous listening. A no-op when already active.
    pub fn start(&mut self) {
        if self.state.is_active() {
            return;
        }
        self.consecutive_errors = 0;
        self.last_error = None;
        self.restart_due = None;
        match self.source.start() {
            Ok(()) => {
                info!("voice recognition listening");
                self.set_state(DriverState::Listening);
            }
            Err(error) => self.handle_capture_error(error, Instant::now()),
        }
    }

    /// Stop listening, cancel any pending restart and release the capture
    /// handle. Idempotent: stopping an idle driver does nothing.
    pub fn stop(&mut self) {
        if self.state == DriverState::Idle && self.restart_due.is_none() {
            return;
        }
        self.source.stop();
        self.restart_due = None;
        self.last_match = None;
        self.consecutive_errors = 0;
        info!("voice recognition stopped");
        self.set_state(DriverState::Idle);
    }

    /// Drain pending source events and fire due timers. Call from the
    /// host's event loop.
    pub fn pump(&mut self) {
        self.pump_at(Instant::now());
    }

    fn pump_at(&mut self, now: Instant) {
        while let Some(event) = self.source.try_next() {
            self.handle_source_event(event, now);
            if self.state == DriverState::Idle {
                break;
            }
        }
        self.poll_timers(now);
    }

    fn handle_source_event(&mut self, event: SourceEvent, now: Instant) {
        match event {
            SourceEvent::Transcript { text, is_final } => {
                self.handle_transcript(&text, is_final, now);
            }
            SourceEvent::Ended => {
                // Steady-state for streaming recognizers: resume almost
                // immediately as long as we still intend to listen.
                if self.state.is_active() {
                    debug!("recognizer ended; scheduling restart");
                    self.source.stop();
                    self.restart_due = Some(now + self.config.end_restart());
                }
            }
            SourceEvent::Failed(error) => self.handle_capture_error(error, now),
        }
    }

    fn handle_transcript(&mut self, text: &str, is_final: bool, now: Instant) {
        if !is_final {
            trace!(%text, "interim transcript");
            return;
        }
        self.consecutive_errors = 0;
        match self.resolver.resolve(text) {
            Some(matched) if matched.confidence >= DISPLAY_THRESHOLD => {
                info!(
                    command = %matched.command.id,
                    confidence = matched.confidence,
                    "voice command recognized"
                );
                self.last_match = Some((matched.clone(), now));
                self.bus.publish(EngineEvent::CommandRecognized {
                    matched,
                    at: Utc::now(),
                });
            }
            Some(matched) => {
                debug!(
                    command = %matched.command.id,
                    confidence = matched.confidence,
                    "below display threshold, treating as conversation"
                );
            }
            None => trace!(%text, "no command recognized"),
        }
    }

    fn handle_capture_error(&mut self, error: CaptureError, now: Instant) {
        if error.is_transient() {
            self.consecutive_errors += 1;
            debug!(
                %error,
                attempt = self.consecutive_errors,
                "transient capture error; scheduling restart"
            );
            self.source.stop();
            self.restart_due = Some(now + self.config.error_restart(self.consecutive_errors));
            self.set_state(DriverState::Recovering);
        } else {
            warn!(%error, "capture permission denied; stopping session");
            self.last_error = Some(error.to_string());
            self.source.stop();
            self.restart_due = None;
            self.bus.publish(EngineEvent::CaptureFailed {
                message: error.to_string(),
            });
            self.set_state(DriverState::Idle);
        }
    }

    fn poll_timers(&mut self, now: Instant) {
        if let Some((_, shown_at)) = &self.last_match {
            if now.duration_since(*shown_at) >= self.config.feedback_hold() {
                self.last_match = None;
            }
        }

        if let Some(due) = self.restart_due {
            if now >= due {
                self.restart_due = None;
                match self.source.start() {
                    Ok(()) => {
                        debug!("capture restarted");
                        self.set_state(DriverState::Listening);
                    }
                    Err(error) => self.handle_capture_error(error, now),
                }
            }
        }
    }

    fn set_state(&mut self, state: DriverState) {
        if self.state != state {
            self.state = state;
            self.bus.publish(EngineEvent::StatusChanged(state));
        }
    }
}

impl Drop for RecognitionDriver {
    fn drop(&mut self) {
        self.source.stop();
    }
}
