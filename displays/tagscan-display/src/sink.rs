//! Display sink trait
//!
//! Defines the interface a panel driver exposes to the renderer.

use crate::color::Rgb565;

/// Display sink errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Pixel slice does not match the region
    BufferOverflow,
}

/// Target rectangle of a blit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Display sink trait
///
/// Accepts finished pixel buffers and puts them on the panel. Implementations
/// may block until the transfer completes or queue it for DMA; either way
/// the slice is only borrowed for the duration of the call.
pub trait DisplaySink {
    /// Blit pixels, row-major, into `region`
    ///
    /// `pixels` holds at least `region.area()` entries.
    fn draw_bitmap(&mut self, region: Region, pixels: &[Rgb565]) -> Result<(), DisplayError>;

    /// Panel dimensions in pixels (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Check if the display is ready
    fn is_ready(&self) -> bool {
        true
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn draw_bitmap(&mut self, region: Region, pixels: &[Rgb565]) -> Result<(), DisplayError> {
        (**self).draw_bitmap(region, pixels)
    }

    fn dimensions(&self) -> (u16, u16) {
        (**self).dimensions()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}
