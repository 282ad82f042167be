//! States processing frame preambles and record counts.

use either::Either::{self, Left, Right};
use thiserror::Error;

use super::record::Records;

/// Marker value opening every frame, as a little-endian `u32` on the wire.
pub const PREAMBLE: u32 = 0xFE00;

/// An error advancing over a frame preamble.
#[derive(Debug, Error)]
#[error("Incorrect preamble marker ({found:#010x}).")]
pub struct PreambleError {
    /// The value found in place of the preamble.
    pub found: u32,
}

/// State token to decode a frame preamble.
#[derive(Debug)]
pub struct Preamble;

impl Preamble {
    /// Transition to another state by decoding a frame preamble.
    ///
    /// Returns the successor state token.
    pub fn advance(r: [u8; 4]) -> Result<Count, PreambleError> {
        let found = u32::from_le_bytes(r);

        if found != PREAMBLE {
            Err(PreambleError { found })?;
        }

        Ok(Count(()))
    }
}

/// State token to decode a record count.
#[derive(Debug)]
pub struct Count(pub(super) ());

impl Count {
    /// Transition to another state by decoding a record count.
    ///
    /// Returns the number of records declared by the frame, and a successor
    /// state token. A frame declaring no records is complete immediately.
    pub fn advance(self, r: [u8; 4]) -> (u32, Either<Records, Preamble>) {
        let count = u32::from_le_bytes(r);

        let successor = if count != 0 {
            Left(Records { remaining: count })
        } else {
            Right(Preamble)
        };

        (count, successor)
    }
}
