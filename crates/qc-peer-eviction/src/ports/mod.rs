//! Ports Layer - Trait definitions for external collaborators
//!
//! The live connection object is owned elsewhere (wire protocol, handshake
//! state machine). Eviction only reads it through [`PeerConnection`].

pub mod outbound;

pub use outbound::*;
