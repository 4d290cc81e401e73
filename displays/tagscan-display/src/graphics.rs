//! embedded-graphics sink adapter
//!
//! Lets any `DrawTarget<Color = Rgb565>` (panel drivers, simulators, the
//! mock display) receive frames.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics::primitives::Rectangle;

use crate::color::Rgb565;
use crate::sink::{DisplayError, DisplaySink, Region};

impl From<Rgb565> for EgRgb565 {
    fn from(color: Rgb565) -> Self {
        EgRgb565::from(RawU16::new(color.raw()))
    }
}

/// Display sink backed by an embedded-graphics draw target
pub struct DrawTargetSink<D> {
    target: D,
}

impl<D> DrawTargetSink<D> {
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> DisplaySink for DrawTargetSink<D>
where
    D: DrawTarget<Color = EgRgb565>,
{
    fn draw_bitmap(&mut self, region: Region, pixels: &[Rgb565]) -> Result<(), DisplayError> {
        if pixels.len() < region.area() {
            return Err(DisplayError::BufferOverflow);
        }

        let area = Rectangle::new(
            Point::new(region.x as i32, region.y as i32),
            Size::new(region.width as u32, region.height as u32),
        );

        self.target
            .fill_contiguous(&area, pixels.iter().map(|&p| EgRgb565::from(p)))
            .map_err(|_| DisplayError::Communication)
    }

    fn dimensions(&self) -> (u16, u16) {
        let size = self.target.bounding_box().size;
        (
            size.width.min(u16::MAX as u32) as u16,
            size.height.min(u16::MAX as u32) as u16,
        )
    }
}
