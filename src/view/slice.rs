//! Slice-based decoder implementation.

use either::Either::{Left, Right};
use thiserror::Error;

use crate::codec::{Decoder, frame::PreambleError};

use super::FromFrame;

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
    /// Incorrect frame preamble.
    #[error("Incorrect frame preamble: {0}")]
    Preamble(#[from] PreambleError),
}

/// Decode one frame from a slice, publishing to a receiver.
///
/// Returns the number of bytes consumed, leaving `r[consumed..]` at the
/// next frame boundary. Unlike the live reader, this decoder is strict: a
/// slice ending mid-frame or an incorrect preamble is an error rather than
/// a partial result.
///
/// This method is also re-exported as `scatterscope::view::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl FromFrame) -> Result<usize, Error> {
    let i = &mut 0; // Cursor into the slice, advanced by `take`.

    let count = Decoder::advance(take(r, i)?)?;
    let (declared, successor) = count.advance(take(r, i)?);

    o.declared(declared);

    let Left(mut records) = successor else {
        return Ok(*i);
    };

    loop {
        let (marker, successor) = records.advance(take(r, i)?);
        o.marker(marker);

        records = match successor {
            Left(state) => state,
            Right(_) => break,
        };
    }

    Ok(*i)
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    *i += N;

    Ok(r.get(s..*i).ok_or(Error::EndOfSlice)?.try_into().unwrap())
}
