use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::registry::{ConnectionId, ConnectionRegistry};
use crate::deck::Deck;

/// Messages the server originates.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage<'a> {
    /// Full deck replacement; clients drop their local copy.
    Reload { data: &'a Deck },
}

/// Messages a client may send. Unknown `type` values decode to `Other`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Slide position change; the payload is whatever the client sent
    /// alongside the tag.
    Navigate(Map<String, Value>),
    #[serde(other)]
    Other,
}

impl ClientMessage {
    /// Decode inbound text. Anything that is not a JSON object with a `type`
    /// yields `None`.
    pub fn decode(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }
}

/// What happened to one inbound text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Relayed to this many other connections.
    Relayed(usize),
    /// Well-formed but not something the server acts on.
    Ignored,
    /// Not decodable.
    Malformed,
}

/// Serialize a reload message for `deck`.
pub fn reload_message(deck: &Deck) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ServerMessage::Reload { data: deck })
}

/// Push a reload to every registered connection. Returns the delivery count.
pub fn publish_reload(registry: &ConnectionRegistry, deck: &Deck) -> usize {
    match reload_message(deck) {
        Ok(msg) => registry.broadcast(&msg, None),
        Err(e) => {
            log::error!("Failed to encode reload message: {e}");
            0
        }
    }
}

/// Handle a text frame received from `origin`.
///
/// Navigate messages are relayed as the exact text received to every other
/// connection; the sender never gets its own message back.
pub fn dispatch(registry: &ConnectionRegistry, origin: ConnectionId, text: &str) -> Dispatch {
    match ClientMessage::decode(text) {
        Some(ClientMessage::Navigate(_)) => Dispatch::Relayed(registry.broadcast(text, Some(origin))),
        Some(ClientMessage::Other) => {
            log::debug!("Ignoring message from connection {origin}");
            Dispatch::Ignored
        }
        None => {
            log::debug!("Ignoring malformed message from connection {origin}");
            Dispatch::Malformed
        }
    }
}
