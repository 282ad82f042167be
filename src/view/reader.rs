//! Reader-based decoder and the live view loop.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, vec::Vec};

use either::Either::{Left, Right};
use thiserror::Error;

use crate::codec::{
    Decoder,
    frame::PreambleError,
    record::{Marker, Shape},
};
use crate::scene::{ANCHOR, ANCHOR_COLOR, Scene, WINDOW};

extern crate std;

/// Errors occurring while driving a live view.
///
/// Stream end, preamble mismatches, and truncated batches never surface
/// here; they are absorbed into [`Update`]. Only reader failures and scene
/// failures are errors, and both are fatal to the loop.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An error from the rendering scene.
    #[error("Scene update failed: {0}")]
    Scene(E),
}

/// One decoded frame: the declared record count, and the markers actually
/// decoded.
///
/// The two disagree when the stream ends mid-batch; the declared count is
/// never corrected down to the markers that arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Record count declared on the wire.
    pub declared: u32,
    /// Markers decoded before the frame ended, in wire order.
    pub markers: Vec<Marker>,
}

impl Frame {
    /// Whether the stream ended before all declared records arrived.
    pub fn is_truncated(&self) -> bool {
        self.markers.len() < self.declared as usize
    }
}

/// The outcome of one read attempt against a live stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// A frame was decoded, possibly empty or truncated.
    Frame(Frame),
    /// The bytes at the cursor were not a preamble. The cursor has advanced
    /// past them; no resynchronization is attempted.
    Desync {
        /// The value found in place of the preamble.
        found: u32,
    },
    /// The stream ended before a full preamble and count arrived.
    Closed,
}

/// Read one frame from a live stream.
///
/// Consumes exactly one preamble+count+records unit on success. A stream
/// ending mid-batch yields the markers decoded so far under the original
/// declared count (see [`Frame`]); a stream ending on the preamble or the
/// count yields [`Update::Closed`]. Only I/O failures other than end of
/// stream are errors.
pub fn read_frame(r: &mut impl Read) -> std::io::Result<Update> {
    let Some(preamble) = take(r)? else {
        return Ok(Update::Closed);
    };

    let count = match Decoder::advance(preamble) {
        Ok(state) => state,
        Err(PreambleError { found }) => {
            log::warn!("Invalid preamble marker {found:#010x}, dropping frame.");
            return Ok(Update::Desync { found });
        }
    };

    let Some(bytes) = take(r)? else {
        return Ok(Update::Closed);
    };

    let (declared, successor) = count.advance(bytes);

    let mut markers = Vec::new();

    let Left(mut records) = successor else {
        return Ok(Update::Frame(Frame { declared, markers }));
    };

    loop {
        let Some(bytes) = take(r)? else {
            log::warn!("Incomplete record, dropping the remainder of the frame.");
            break;
        };

        let (marker, successor) = records.advance(bytes);
        markers.push(marker);

        records = match successor {
            Left(state) => state,
            Right(_) => break,
        };
    }

    Ok(Update::Frame(Frame { declared, markers }))
}

/// Drive read and render cycles against one stream and one scene until the
/// stream closes or a cycle fails.
///
/// Stream closure is the sole normal termination. Desynchronized and empty
/// frames render nothing, and the next read is attempted immediately. Frame
/// N is fully presented (or discarded) before frame N+1 is read.
pub fn run<S: Scene>(r: &mut impl Read, scene: &mut S) -> Result<(), Error<S::Error>> {
    loop {
        match read_frame(r)? {
            Update::Frame(frame) if frame.declared > 0 => {
                render(scene, &frame).map_err(Error::Scene)?;
            }
            Update::Frame(_) | Update::Desync { .. } => {}
            Update::Closed => {
                log::info!("Stream closed.");
                return Ok(());
            }
        }
    }
}

/// Present one frame: the anchor reference marker, then every decoded
/// marker, under the fixed display window and a title carrying the declared
/// count.
fn render<S: Scene>(scene: &mut S, frame: &Frame) -> Result<(), S::Error> {
    scene.clear()?;
    scene.marker(ANCHOR.0, ANCHOR.1, Shape::Diamond, ANCHOR_COLOR)?;

    for marker in &frame.markers {
        scene.marker(marker.x, marker.y, marker.shape, marker.color)?;
    }

    scene.title(frame.declared)?;
    scene.window(WINDOW, WINDOW)?;
    scene.present()
}

/// Take an exact number of bytes from a reader, or signal that the stream
/// ended first.
fn take<const N: usize>(r: &mut impl Read) -> std::io::Result<Option<[u8; N]>> {
    let mut buf = [0; N];
    let mut filled = 0;

    while filled < N {
        match r.read(&mut buf[filled..]) {
            Ok(0) => return Ok(None),
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(Some(buf))
}
