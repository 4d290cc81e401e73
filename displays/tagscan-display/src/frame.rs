//! Owned pixel frames
//!
//! A frame is allocated per update, filled with its background colour, drawn
//! into, and then consumed by `present`, which releases the buffer once the
//! sink has it on screen. Frames are never kept across updates.

use alloc::vec::Vec;

use crate::color::Rgb565;
use crate::sink::{DisplayError, DisplaySink, Region};

/// Frame allocation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Pixel buffer could not be allocated
    OutOfMemory,
}

/// Drawing surface used by the text renderer
///
/// Coordinates are in canvas space; writes outside the canvas are dropped.
pub trait Canvas {
    /// Canvas size in pixels (width, height)
    fn size(&self) -> (u16, u16);

    /// Set a single pixel
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565);

    /// Fill a rectangle, clipped to the canvas
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb565) {
        let (canvas_width, canvas_height) = self.size();
        let x_end = x.saturating_add(width).min(canvas_width as u32);
        let y_end = y.saturating_add(height).min(canvas_height as u32);

        for row in y..y_end {
            for col in x..x_end {
                self.set_pixel(col, row, color);
            }
        }
    }
}

/// Rectangular pixel buffer destined for a display region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    background: Rgb565,
    pixels: Vec<Rgb565>,
}

impl Frame {
    /// Allocate a frame and fill it with `background`
    pub fn new(
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        background: Rgb565,
    ) -> Result<Self, FrameError> {
        let len = width as usize * height as usize;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| FrameError::OutOfMemory)?;
        pixels.resize(len, background);

        Ok(Self {
            x,
            y,
            width,
            height,
            background,
            pixels,
        })
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Colour the frame was created with
    pub fn background(&self) -> Rgb565 {
        self.background
    }

    /// Row-major pixel buffer
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    /// Read a pixel
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb565> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Fill the whole frame
    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Reset every pixel to the background colour
    pub fn clear(&mut self) {
        self.fill(self.background);
    }

    /// Region handed to the sink on present
    ///
    /// The extent is `width - x` by `height - y`: `width` and `height` act as
    /// absolute right and bottom edges when the origin is not zero. Clamped at
    /// zero.
    pub fn sink_region(&self) -> Region {
        Region::new(
            self.x,
            self.y,
            self.width.saturating_sub(self.x),
            self.height.saturating_sub(self.y),
        )
    }

    /// Blit the frame through `sink` and release the buffer
    pub fn present<S: DisplaySink + ?Sized>(self, sink: &mut S) -> Result<(), DisplayError> {
        sink.draw_bitmap(self.sink_region(), &self.pixels)
    }
}

impl Canvas for Frame {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565) {
        if x >= self.width as u32 || y >= self.height as u32 {
            return;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.pixels[index] = color;
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb565) {
        let x_start = x.min(self.width as u32) as usize;
        let x_end = x.saturating_add(width).min(self.width as u32) as usize;
        let y_end = y.saturating_add(height).min(self.height as u32);

        for row in y.min(y_end)..y_end {
            let base = row as usize * self.width as usize;
            self.pixels[base + x_start..base + x_end].fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that remembers the last blit
    struct RecordingSink {
        region: Option<Region>,
        pixels: Vec<Rgb565>,
        fail: bool,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                region: None,
                pixels: Vec::new(),
                fail: false,
            }
        }
    }

    impl DisplaySink for RecordingSink {
        fn draw_bitmap(&mut self, region: Region, pixels: &[Rgb565]) -> Result<(), DisplayError> {
            if self.fail {
                return Err(DisplayError::Communication);
            }
            self.region = Some(region);
            self.pixels = pixels[..region.area()].to_vec();
            Ok(())
        }

        fn dimensions(&self) -> (u16, u16) {
            (480, 320)
        }
    }

    #[test]
    fn test_new_fills_background() {
        let frame = Frame::new(0, 0, 4, 3, Rgb565::BLUE).unwrap();
        assert_eq!(frame.pixels().len(), 12);
        assert!(frame.pixels().iter().all(|&p| p == Rgb565::BLUE));
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut frame = Frame::new(0, 0, 4, 3, Rgb565::BLACK).unwrap();
        frame.fill_rect(2, 1, 10, 10, Rgb565::WHITE);

        assert_eq!(frame.pixel(1, 1), Some(Rgb565::BLACK));
        assert_eq!(frame.pixel(2, 1), Some(Rgb565::WHITE));
        assert_eq!(frame.pixel(3, 2), Some(Rgb565::WHITE));
        assert_eq!(frame.pixel(2, 0), Some(Rgb565::BLACK));
        assert_eq!(frame.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_rect_outside_is_noop() {
        let mut frame = Frame::new(0, 0, 4, 3, Rgb565::BLACK).unwrap();
        frame.fill_rect(9, 9, 2, 2, Rgb565::WHITE);
        frame.fill_rect(1, 5, 2, 2, Rgb565::WHITE);
        assert!(frame.pixels().iter().all(|&p| p == Rgb565::BLACK));
    }

    #[test]
    fn test_set_pixel_clips() {
        let mut frame = Frame::new(0, 0, 2, 2, Rgb565::BLACK).unwrap();
        frame.set_pixel(5, 0, Rgb565::WHITE);
        frame.set_pixel(1, 1, Rgb565::WHITE);
        assert_eq!(frame.pixels()[3], Rgb565::WHITE);
        assert_eq!(frame.pixels()[..3], [Rgb565::BLACK; 3]);
    }

    #[test]
    fn test_clear_restores_background() {
        let mut frame = Frame::new(0, 0, 2, 2, Rgb565::RED).unwrap();
        frame.fill(Rgb565::GREEN);
        frame.clear();
        assert!(frame.pixels().iter().all(|&p| p == Rgb565::RED));
    }

    #[test]
    fn test_present_at_origin() {
        let mut sink = RecordingSink::new();
        let mut frame = Frame::new(0, 0, 3, 2, Rgb565::BLACK).unwrap();
        frame.set_pixel(2, 1, Rgb565::WHITE);

        frame.present(&mut sink).unwrap();

        assert_eq!(sink.region, Some(Region::new(0, 0, 3, 2)));
        assert_eq!(sink.pixels.len(), 6);
        assert_eq!(sink.pixels[5], Rgb565::WHITE);
    }

    #[test]
    fn test_present_offset_region_subtracts_origin() {
        let mut sink = RecordingSink::new();
        let frame = Frame::new(10, 5, 40, 20, Rgb565::BLACK).unwrap();

        assert_eq!(frame.sink_region(), Region::new(10, 5, 30, 15));
        frame.present(&mut sink).unwrap();
        assert_eq!(sink.region, Some(Region::new(10, 5, 30, 15)));
    }

    #[test]
    fn test_region_saturates() {
        let frame = Frame::new(50, 50, 10, 10, Rgb565::BLACK).unwrap();
        assert_eq!(frame.sink_region(), Region::new(50, 50, 0, 0));
    }

    #[test]
    fn test_present_error_propagates() {
        let mut sink = RecordingSink::new();
        sink.fail = true;
        let frame = Frame::new(0, 0, 1, 1, Rgb565::BLACK).unwrap();
        assert_eq!(frame.present(&mut sink), Err(DisplayError::Communication));
    }
}
