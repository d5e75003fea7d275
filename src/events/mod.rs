//! Notifications from the engine to render adapters.
//!
//! The engine has no callbacks into UI code. Instead, each operation on the
//! round controller queues events that the adapter drains and renders.

pub mod event;

pub use event::{EventQueue, GameEvent};
