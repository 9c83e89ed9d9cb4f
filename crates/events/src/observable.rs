//! Latest-value observable slot.

use tokio::sync::watch;

/// A value the UI renders, replaced wholesale on every publish.
///
/// Starts empty (`None`). Subscribers see only the most recent value; a
/// slow subscriber that misses intermediate publishes is not an error.
#[derive(Debug)]
pub struct Observable<T> {
    sender: watch::Sender<Option<T>>,
}

impl<T> Observable<T> {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Replace the current value and wake every subscriber.
    pub fn publish(&self, value: T) {
        self.sender.send_replace(Some(value));
    }

    /// Subscribe to future publishes. The current value counts as already
    /// seen.
    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.sender.subscribe()
    }

    /// `true` once anything has been published.
    pub fn has_value(&self) -> bool {
        self.sender.borrow().is_some()
    }
}

impl<T: Clone> Observable<T> {
    /// A copy of the current value, if anything has been published.
    pub fn get(&self) -> Option<T> {
        self.sender.borrow().clone()
    }
}

impl<T> Default for Observable<T> {
    fn default() -> Self {
        Self::new()
    }
}
