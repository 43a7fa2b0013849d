//! Presenter synchronisation.
//!
//! A connection is registered once its WebSocket handshake completes and is
//! removed when the socket closes or a delivery to it fails. The server keeps
//! no per-connection slide position; it only fans messages out.

pub mod protocol;
pub mod registry;

pub use protocol::{ClientMessage, Dispatch, ServerMessage, dispatch, publish_reload};
pub use registry::{ConnectionId, ConnectionRegistry, ConnectionSender, outbound_queue};
