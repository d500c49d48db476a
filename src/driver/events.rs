//! Typed events published by the recognition driver.

use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{DateTime, Utc};

use super::DriverState;
use crate::resolver::CommandMatch;

/// What subscribers can observe. The mapping from a recognized command's
/// action tag to application behavior lives entirely in the host.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A final transcript resolved to a command above the display
    /// threshold.
    CommandRecognized {
        matched: CommandMatch,
        at: DateTime<Utc>,
    },
    /// The driver moved between idle, listening and recovering.
    StatusChanged(DriverState),
    /// Capture failed in a way the user must act on (permission denial).
    CaptureFailed { message: String },
}

/// Fan-out channel from the driver to any number of subscribers.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Sender<EngineEvent>>,
}

impl EventBus {
    pub fn subscribe(&mut self) -> Receiver<EngineEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver to every live subscriber, pruning closed ones.
    pub fn publish(&mut self, event: EngineEvent) {
        self.subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
