//! States processing marker records.

use either::Either::{self, Left, Right};
use zerocopy::FromBytes;

use crate::color::{self, Color};

use super::frame::Preamble;

/// Size of one encoded marker record.
pub const RECORD_LEN: usize = 24;

/// Marker shape selected by a record's kind byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Plain point marker, for every kind outside the triangle set.
    Point,
    /// Triangle marker, selected by kinds 1 and 2.
    Triangle,
    /// Diamond marker, drawn only at the anchor position.
    Diamond,
}

impl Shape {
    /// Classify a record's kind byte.
    ///
    /// Kinds 1 and 2 render as triangles; every other value renders as a
    /// point. The wire carries no third classification.
    pub fn classify(kind: u8) -> Self {
        match kind {
            1 | 2 => Self::Triangle,
            _ => Self::Point,
        }
    }
}

/// One decoded, renderable object position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Record identifier, unique within a frame by convention only.
    pub id: i64,
    /// Horizontal plot coordinate, unvalidated.
    pub x: i32,
    /// Vertical plot coordinate, unvalidated.
    pub y: i32,
    /// Raw kind byte the shape was classified from.
    pub kind: u8,
    /// Raw color channels carried through from the wire.
    pub rgb: [u8; 3],
    /// Shape classified from the kind byte.
    pub shape: Shape,
    /// Display color resolved from the raw channels.
    pub color: Color,
}

/// State token to decode the marker records of a frame.
#[derive(Debug)]
pub struct Records {
    pub(super) remaining: u32,
}

impl Records {
    /// Transition to another state by decoding one marker record.
    ///
    /// Every block of [`RECORD_LEN`] bytes decodes successfully; field
    /// values are not validated here. Returns the decoded marker, and a
    /// successor state token.
    pub fn advance(self, r: [u8; RECORD_LEN]) -> (Marker, Either<Records, Preamble>) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct RawRecord {
            id: [u8; 8],
            x: [u8; 4],
            y: [u8; 4],
            kind: u8,
            r: u8,
            g: u8,
            b: u8,
            _reserved: [u8; 4],
        }

        let RawRecord {
            id,
            x,
            y,
            kind,
            r,
            g,
            b,
            ..
        } = zerocopy::transmute!(r);

        let marker = Marker {
            id: i64::from_le_bytes(id),
            x: i32::from_le_bytes(x),
            y: i32::from_le_bytes(y),
            kind,
            rgb: [r, g, b],
            shape: Shape::classify(kind),
            color: color::resolve(r, g, b),
        };

        let remaining = self.remaining - 1;

        let successor = if remaining != 0 {
            Left(Records { remaining })
        } else {
            Right(Preamble)
        };

        (marker, successor)
    }
}
