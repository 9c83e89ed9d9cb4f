//! One-shot screen signals backed by a `tokio::sync::broadcast` channel.
//!
//! Unlike an [`Observable`](crate::Observable), which only keeps the latest
//! value, every [`ScreenEvent`] published here is delivered to every
//! subscriber that existed at the time.

use chrono::Utc;
use notemaker_core::types::Timestamp;
use serde::Serialize;
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// ScreenEvent
// ---------------------------------------------------------------------------

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenEventKind {
    /// The screen's work is done (note saved or deleted) and it should close.
    CloseScreen,

    /// A background operation failed. The observable it would have updated
    /// keeps its previous value.
    OperationFailed {
        operation: &'static str,
        message: String,
    },
}

/// A signal emitted by a screen assembler.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenEvent {
    pub kind: ScreenEventKind,

    /// When the event was created (UTC).
    pub timestamp: Timestamp,
}

impl ScreenEvent {
    pub fn new(kind: ScreenEventKind) -> Self {
        Self {
            kind,
            timestamp: Utc::now(),
        }
    }

    pub fn close_screen() -> Self {
        Self::new(ScreenEventKind::CloseScreen)
    }

    pub fn operation_failed(operation: &'static str, message: impl Into<String>) -> Self {
        Self::new(ScreenEventKind::OperationFailed {
            operation,
            message: message.into(),
        })
    }
}

// ---------------------------------------------------------------------------
// ScreenEventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 16;

/// Fan-out channel for [`ScreenEvent`]s, one per screen.
///
/// ```rust
/// use notemaker_events::bus::{ScreenEvent, ScreenEventBus};
///
/// let bus = ScreenEventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(ScreenEvent::close_screen());
/// ```
pub struct ScreenEventBus {
    sender: broadcast::Sender<ScreenEvent>,
}

impl ScreenEventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed events are dropped and
    /// slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// With no subscribers the event is dropped.
    pub fn publish(&self, event: ScreenEvent) {
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ScreenEvent> {
        self.sender.subscribe()
    }
}

impl Default for ScreenEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
