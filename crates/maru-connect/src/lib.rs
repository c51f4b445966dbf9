//! WebSocket connection registry with queue-on-miss delivery.

pub mod registry;

pub use registry::{ConnectionRegistry, OutboundSender, PendingMessage};
