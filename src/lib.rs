#![no_std]

//! A streaming decoder and live scatter view for framed object-position
//! reports.
//!
//! Scatterscope consumes the middleware wire protocol (one preamble, one
//! record count, and a batch of fixed-layout position records per frame)
//! and presents each frame to a pluggable 2D scene as it arrives.
//!
//! Most users should begin with the [`view`] module. [`view::run`] drives
//! read and render cycles from any `std::io::Read` against a [`scene::Scene`],
//! and [`view::decode_slice`] decodes buffered frames. The underlying state
//! tokens in [`codec`] are exposed for applications needing finer control
//! over reading and buffering.
//!
//! Producers (and tests) build wire frames with the [`feed`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable the reader-based view loop and the producer side
//!   (default).

pub mod codec;
pub mod color;
#[cfg(feature = "std")]
pub mod feed;
pub mod scene;
pub mod view;

pub use codec::record::{Marker, Shape};
pub use color::Color;
