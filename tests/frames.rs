#![cfg(feature = "std")]

use std::io::Cursor;

use scatterscope::feed::{Report, frame_bytes};
use scatterscope::view::reader::{Update, read_frame};

fn reports(n: usize) -> Vec<Report> {
    (0..n)
        .map(|i| Report {
            id: i as i64 + 1,
            x: 10 * i as i32,
            y: 20 * i as i32,
            kind: 1,
            rgb: [0x5B, b'1', 0x6D],
        })
        .collect()
}

#[test]
fn reads_full_frame_in_wire_order() {
    let reports = reports(3);
    let mut stream = Cursor::new(frame_bytes(&reports));

    let update = read_frame(&mut stream).unwrap();
    let Update::Frame(frame) = update else {
        panic!("expected a frame, got {update:?}");
    };

    assert_eq!(frame.declared, 3);
    assert_eq!(frame.markers.len(), 3);
    assert!(!frame.is_truncated());

    for (marker, report) in frame.markers.iter().zip(&reports) {
        assert_eq!(marker.id, report.id);
        assert_eq!(marker.x, report.x);
        assert_eq!(marker.y, report.y);
        assert_eq!(marker.kind, report.kind);
        assert_eq!(marker.rgb, report.rgb);
    }
}

#[test]
fn keeps_declared_count_over_partial_record() {
    // Declare five records, end the stream seven bytes into the third.
    let mut bytes = frame_bytes(&reports(5));
    bytes.truncate(8 + 2 * 24 + 7);

    let update = read_frame(&mut Cursor::new(bytes)).unwrap();
    let Update::Frame(frame) = update else {
        panic!("expected a frame, got {update:?}");
    };

    assert_eq!(frame.declared, 5);
    assert_eq!(frame.markers.len(), 2);
    assert!(frame.is_truncated());
}

#[test]
fn keeps_declared_count_over_missing_records() {
    // Declare five records, end the stream exactly after the second.
    let mut bytes = frame_bytes(&reports(5));
    bytes.truncate(8 + 2 * 24);

    let update = read_frame(&mut Cursor::new(bytes)).unwrap();
    let Update::Frame(frame) = update else {
        panic!("expected a frame, got {update:?}");
    };

    assert_eq!(frame.declared, 5);
    assert_eq!(frame.markers.len(), 2);
    assert!(frame.is_truncated());
}

#[test]
fn desync_consumes_only_the_bad_preamble() {
    // Four junk bytes, then a valid frame at the next cursor position.
    let mut bytes = vec![0xDE, 0xAD, 0xBE, 0xEF];
    bytes.extend_from_slice(&frame_bytes(&reports(1)));
    let mut stream = Cursor::new(bytes);

    let update = read_frame(&mut stream).unwrap();
    assert_eq!(update, Update::Desync { found: 0xEFBEADDE });

    // No rewind and no scan: the next read starts right past the junk.
    let update = read_frame(&mut stream).unwrap();
    let Update::Frame(frame) = update else {
        panic!("expected a frame, got {update:?}");
    };

    assert_eq!(frame.declared, 1);
    assert_eq!(frame.markers.len(), 1);
}

#[test]
fn empty_stream_closes() {
    let update = read_frame(&mut Cursor::new(Vec::new())).unwrap();
    assert_eq!(update, Update::Closed);
}

#[test]
fn partial_preamble_closes() {
    let update = read_frame(&mut Cursor::new(vec![0x00, 0xFE, 0x00])).unwrap();
    assert_eq!(update, Update::Closed);
}

#[test]
fn missing_count_closes() {
    let bytes = 0xFE00u32.to_le_bytes().to_vec();
    let update = read_frame(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(update, Update::Closed);
}

#[test]
fn zero_count_frame_is_empty() {
    let update = read_frame(&mut Cursor::new(frame_bytes(&[]))).unwrap();
    let Update::Frame(frame) = update else {
        panic!("expected a frame, got {update:?}");
    };

    assert_eq!(frame.declared, 0);
    assert!(frame.markers.is_empty());
    assert!(!frame.is_truncated());
}

#[test]
fn reads_consecutive_frames() {
    let mut bytes = frame_bytes(&reports(2));
    bytes.extend_from_slice(&frame_bytes(&reports(4)));
    bytes.extend_from_slice(&frame_bytes(&[]));
    let mut stream = Cursor::new(bytes);

    for expected in [2, 4, 0] {
        let update = read_frame(&mut stream).unwrap();
        let Update::Frame(frame) = update else {
            panic!("expected a frame, got {update:?}");
        };

        assert_eq!(frame.declared, expected);
        assert_eq!(frame.markers.len() as u32, expected);
    }

    assert_eq!(read_frame(&mut stream).unwrap(), Update::Closed);
}
