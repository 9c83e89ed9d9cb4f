//! Screen-facing plumbing between the data layer and whatever renders it.
//!
//! - [`Observable`]: a latest-value slot backed by `tokio::sync::watch`.
//! - [`ScreenEventBus`] / [`ScreenEvent`]: one-shot signals such as
//!   "close the screen", fanned out over `tokio::sync::broadcast`.
//! - [`ScreenScope`]: owns every task a screen spawned and cancels them all
//!   at once when the screen goes away.

pub mod bus;
pub mod observable;
pub mod scope;

pub use bus::{ScreenEvent, ScreenEventBus, ScreenEventKind};
pub use observable::Observable;
pub use scope::ScreenScope;
