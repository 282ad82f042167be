//! State tokens for decoding the wire protocol.
//!
//! This module is intended for applications that need fine control over
//! reading and buffering. See [`crate::view`] for implementations covering
//! common consumption patterns.
//!
//! # Architecture
//!
//! Each position within a frame is represented by a non-copy state token.
//! Once enough bytes are ready, transition to the next position by calling
//! the token's `advance` method. This returns any extracted data, along with
//! a successor state token. A frame is complete when the successor is the
//! next frame's [`frame::Preamble`].
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], needs
//! to be named to start decoding.
//!
//! The tokens never perform I/O. Reading bytes from the correct place in the
//! stream, and the policy for streams that end mid-frame, are left to the
//! caller.

pub mod frame;
pub mod record;

/// Entrypoint to the decoding state machine.
pub type Decoder = frame::Preamble;
