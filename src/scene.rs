//! The rendering surface driven by the view loop.

use crate::codec::record::Shape;
use crate::color::Color;

/// Reference position drawn with every update, and the origin of the
/// producer's proximity grading.
pub const ANCHOR: (i32, i32) = (150, 150);

/// Color of the anchor marker.
pub const ANCHOR_COLOR: Color = Color::GREEN;

/// Display window applied to both axes.
pub const WINDOW: (i32, i32) = (0, 450);

/// Receive render calls for one display update.
///
/// Any interactive 2D plotting surface satisfies this. An error returned
/// from any method is fatal to the view loop. The default implementation of
/// each method does nothing.
#[allow(unused_variables)]
pub trait Scene {
    /// Error raised by the surface.
    type Error;

    /// Discard the previously presented markers.
    fn clear(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Draw one marker.
    fn marker(&mut self, x: i32, y: i32, shape: Shape, color: Color) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Set the title to reflect the declared record count.
    fn title(&mut self, declared: u32) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Set the display window on both axes.
    fn window(&mut self, x: (i32, i32), y: (i32, i32)) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Flush the completed update to the surface.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
