//! Producing side of the wire protocol.
//!
//! _Requires Cargo feature `std`._
//!
//! Mirrors the middleware that feeds the view: object reports accumulate
//! latest-wins in a [`Batch`], the g channel is graded by each report's
//! distance to the anchor position, and a drained batch serializes into one
//! wire frame. Tests use [`frame_bytes`] as their fixture builder.

use std::{
    collections::BTreeMap,
    io::{self, Write},
    vec::Vec,
};

use crate::codec::frame::PREAMBLE;
use crate::codec::record::RECORD_LEN;
use crate::scene::ANCHOR;

extern crate std;

/// Fixed red channel written by graded reports.
pub const BASE_R: u8 = 0x5B;

/// Fixed blue channel written by graded reports.
pub const BASE_B: u8 = 0x6D;

/// One object report, the unserialized form of a wire record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    pub x: i32,
    pub y: i32,
    pub kind: u8,
    pub rgb: [u8; 3],
}

impl Report {
    /// Build a report with its g channel graded by distance to the anchor.
    ///
    /// Kinds without a defined grading carry `g = 0`, which resolves to the
    /// fallback color downstream.
    pub fn graded(id: i64, x: i32, y: i32, kind: u8) -> Self {
        let dx = f64::from(ANCHOR.0) - f64::from(x);
        let dy = f64::from(ANCHOR.1) - f64::from(y);
        let distance = (dx * dx + dy * dy).sqrt();

        let g = grade(kind, distance).unwrap_or(0);

        Self {
            id,
            x,
            y,
            kind,
            rgb: [BASE_R, g, BASE_B],
        }
    }
}

/// Grade a report's distance to the anchor into a g-channel byte.
///
/// Returns `None` for kinds without a defined grading.
pub fn grade(kind: u8, distance: f64) -> Option<u8> {
    match kind {
        1 if distance < 50.0 => Some(b'1'),
        1 if distance < 75.0 => Some(b'3'),
        1 => Some(b'4'),
        2 if distance < 50.0 => Some(b'3'),
        2 => Some(b'4'),
        3 if distance < 100.0 => Some(b'1'),
        3 => Some(b'3'),
        _ => None,
    }
}

/// Latest-wins accumulator of reports keyed by id.
///
/// Producers insert reports continuously and drain one consistent batch per
/// frame interval; a newer report for an id replaces the older one.
#[derive(Debug, Default)]
pub struct Batch {
    reports: BTreeMap<i64, Report>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a report, replacing any earlier report with the same id.
    pub fn insert(&mut self, report: Report) {
        self.reports.insert(report.id, report);
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Drain every accumulated report, in id order.
    pub fn drain(&mut self) -> Vec<Report> {
        let reports = core::mem::take(&mut self.reports);
        reports.into_values().collect()
    }
}

/// Serialize one frame of reports to wire bytes.
pub fn frame_bytes(reports: &[Report]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + reports.len() * RECORD_LEN);

    out.extend_from_slice(&PREAMBLE.to_le_bytes());
    out.extend_from_slice(&(reports.len() as u32).to_le_bytes());

    for report in reports {
        out.extend_from_slice(&record_bytes(report));
    }

    out
}

/// Write one frame of reports to a writer, flushing afterward.
pub fn write_frame(w: &mut impl Write, reports: &[Report]) -> io::Result<()> {
    w.write_all(&frame_bytes(reports))?;
    w.flush()
}

/// Encode one report as a wire record. Reserved bytes are written as zero.
fn record_bytes(report: &Report) -> [u8; RECORD_LEN] {
    let mut r = [0; RECORD_LEN];

    r[0..8].copy_from_slice(&report.id.to_le_bytes());
    r[8..12].copy_from_slice(&report.x.to_le_bytes());
    r[12..16].copy_from_slice(&report.y.to_le_bytes());
    r[16] = report.kind;
    r[17..20].copy_from_slice(&report.rgb);

    r
}
