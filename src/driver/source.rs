//! The streaming transcript source the driver listens to.
//!
//! The speech engine itself lives outside this crate. Anything that can
//! start, stop and hand over text events fits behind [`TranscriptSource`];
//! hosts with callback-style recognizers usually want [`ChannelSource`].

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use thiserror::Error;

/// Failures reported by a capture backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// The engine heard nothing. Routine; recovered silently.
    #[error("no speech detected")]
    NoSpeech,
    /// Capture was aborted mid-stream. Routine; recovered silently.
    #[error("audio capture aborted")]
    Aborted,
    /// Microphone access was refused. Fatal to the session; the user has
    /// to re-initiate listening.
    #[error("microphone permission denied")]
    PermissionDenied,
    /// Anything else the backend reports.
    #[error("capture backend error: {0}")]
    Backend(String),
}

impl CaptureError {
    /// Transient errors are recovered by restarting capture; only a
    /// permission denial needs the user to act.
    pub fn is_transient(&self) -> bool {
        !matches!(self, CaptureError::PermissionDenied)
    }
}

/// One event from a streaming recognizer.
#[derive(Debug, Clone)]
pub enum SourceEvent {
    /// A transcript fragment. Only final fragments reach the resolver.
    Transcript { text: String, is_final: bool },
    /// The recognizer ended on its own. Streaming engines do this
    /// periodically even in continuous mode; it is not a failure.
    Ended,
    /// Capture failed.
    Failed(CaptureError),
}

/// A live speech-to-text stream.
///
/// The driver only needs start, stop and a non-blocking drain; everything
/// about devices, models and formats stays inside the implementation.
pub trait TranscriptSource {
    /// Begin (or resume) capture.
    fn start(&mut self) -> Result<(), CaptureError>;
    /// Release the capture handle. Idempotent.
    fn stop(&mut self);
    /// Next pending event, if any. Never blocks.
    fn try_next(&mut self) -> Option<SourceEvent>;
}

/// Channel-backed source: any thread can push events through the cloneable
/// [`TranscriptFeed`] half. This is the natural fit for platform
/// recognizers that deliver results via callbacks, and for tests.
pub struct ChannelSource {
    rx: Receiver<SourceEvent>,
    active: bool,
    feed_gone: bool,
}

/// Sending half of a [`ChannelSource`].
#[derive(Clone)]
pub struct TranscriptFeed {
    tx: Sender<SourceEvent>,
}

impl ChannelSource {
    pub fn new() -> (Self, TranscriptFeed) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                rx,
                active: false,
                feed_gone: false,
            },
            TranscriptFeed { tx },
        )
    }
}

impl TranscriptSource for ChannelSource {
    fn start(&mut self) -> Result<(), CaptureError> {
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn try_next(&mut self) -> Option<SourceEvent> {
        if !self.active {
            return None;
        }
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // All feed handles dropped: surface a single natural end.
                if self.feed_gone {
                    None
                } else {
                    self.feed_gone = true;
                    Some(SourceEvent::Ended)
                }
            }
        }
    }
}

impl TranscriptFeed {
    /// Push a final transcript.
    pub fn final_transcript(&self, text: impl Into<String>) {
        let _ = self.tx.send(SourceEvent::Transcript {
            text: text.into(),
            is_final: true,
        });
    }

    /// Push an interim transcript.
    pub fn interim_transcript(&self, text: impl Into<String>) {
        let _ = self.tx.send(SourceEvent::Transcript {
            text: text.into(),
            is_final: false,
        });
    }

    /// Report a capture failure.
    pub fn fail(&self, error: CaptureError) {
        let _ = self.tx.send(SourceEvent::Failed(error));
    }

    /// Report a natural end of the recognition stream.
    pub fn ended(&self) {
        let _ = self.tx.send(SourceEvent::Ended);
    }
}
