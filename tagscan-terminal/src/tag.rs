//! Tag presentation
//!
//! A scan is shown as a band across the top of the panel: one frame the full
//! panel width and one font line (plus padding) tall, text inset by the left
//! margin.

use tagscan_display::{render, DisplayError, DisplaySink, Font, Frame, FrameError, TextStyle};

use crate::config::TerminalConfig;

/// Errors while presenting a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PresentError {
    /// Frame buffer could not be allocated
    Frame(FrameError),
    /// The sink rejected the blit
    Display(DisplayError),
}

impl From<FrameError> for PresentError {
    fn from(e: FrameError) -> Self {
        PresentError::Frame(e)
    }
}

impl From<DisplayError> for PresentError {
    fn from(e: DisplayError) -> Self {
        PresentError::Display(e)
    }
}

/// Render `tag` and blit it to the top of the panel
///
/// Returns the height the text consumed. Text that wraps past the first line
/// is laid out but falls outside the band and is not drawn. A band wider or
/// taller than the panel is rejected with `InvalidCoordinates`.
pub fn present_tag<S: DisplaySink + ?Sized>(
    sink: &mut S,
    font: &Font<'_>,
    tag: &str,
    config: &TerminalConfig,
) -> Result<u32, PresentError> {
    if !sink.is_ready() {
        return Err(DisplayError::NotInitialized.into());
    }

    let (panel_width, panel_height) = sink.dimensions();
    let band_height = config.tag_height(font.height());
    if config.display_width > panel_width || band_height > panel_height {
        return Err(DisplayError::InvalidCoordinates.into());
    }

    let mut frame = Frame::new(
        0,
        0,
        config.display_width,
        band_height,
        config.background,
    )?;

    let style = TextStyle::new(config.foreground, config.background);
    let height = render(
        font,
        tag,
        &mut frame,
        config.margin_left,
        0,
        config.wrap_width(),
        style,
    );

    frame.present(sink)?;
    Ok(height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use tagscan_display::{Region, Rgb565, MONO_40};

    struct RecordingSink {
        ready: bool,
        size: (u16, u16),
        blits: Vec<(Region, Vec<Rgb565>)>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                ready: true,
                size: (480, 320),
                blits: Vec::new(),
            }
        }
    }

    impl DisplaySink for RecordingSink {
        fn draw_bitmap(&mut self, region: Region, pixels: &[Rgb565]) -> Result<(), DisplayError> {
            self.blits.push((region, pixels[..region.area()].to_vec()));
            Ok(())
        }

        fn dimensions(&self) -> (u16, u16) {
            self.size
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    #[test]
    fn test_tag_band_region() {
        let mut sink = RecordingSink::new();
        let height = present_tag(&mut sink, &MONO_40, "42", &TerminalConfig::default()).unwrap();

        assert_eq!(height, 40);
        assert_eq!(sink.blits.len(), 1);
        let (region, pixels) = &sink.blits[0];
        assert_eq!(*region, Region::new(0, 0, 480, 50));
        assert_eq!(pixels.len(), 480 * 50);
    }

    #[test]
    fn test_text_inset_by_margin() {
        let mut sink = RecordingSink::new();
        present_tag(&mut sink, &MONO_40, "8", &TerminalConfig::default()).unwrap();

        let (_, pixels) = &sink.blits[0];
        let lit: Vec<usize> = pixels
            .iter()
            .enumerate()
            .filter(|(_, &p)| p == Rgb565::WHITE)
            .map(|(i, _)| i % 480)
            .collect();

        assert!(!lit.is_empty());
        // '8' is one 24 px cell starting at x = 10
        assert!(lit.iter().all(|&x| (10..34).contains(&x)));
        // Padding rows stay background
        assert!(pixels[480 * 40..].iter().all(|&p| p == Rgb565::BLACK));
    }

    #[test]
    fn test_long_tag_reports_wrapped_height() {
        let mut sink = RecordingSink::new();
        // 20 cells of 24 px = 480 px, more than the 470 px wrap width
        let tag = "abcdefghijklmnopqrst";
        let height = present_tag(&mut sink, &MONO_40, tag, &TerminalConfig::default()).unwrap();
        assert_eq!(height, 80);
        assert_eq!(sink.blits[0].0, Region::new(0, 0, 480, 50));
    }

    #[test]
    fn test_custom_colours() {
        let mut sink = RecordingSink::new();
        let config = TerminalConfig {
            foreground: Rgb565::GREEN,
            background: Rgb565::BLUE,
            ..TerminalConfig::default()
        };
        present_tag(&mut sink, &MONO_40, "", &config).unwrap();
        assert!(sink.blits[0].1.iter().all(|&p| p == Rgb565::BLUE));
    }

    #[test]
    fn test_sink_not_ready() {
        let mut sink = RecordingSink::new();
        sink.ready = false;
        assert_eq!(
            present_tag(&mut sink, &MONO_40, "1", &TerminalConfig::default()),
            Err(PresentError::Display(DisplayError::NotInitialized))
        );
        assert!(sink.blits.is_empty());
    }

    #[test]
    fn test_band_wider_than_panel_rejected() {
        let mut sink = RecordingSink::new();
        sink.size = (320, 240);
        assert_eq!(
            present_tag(&mut sink, &MONO_40, "42", &TerminalConfig::default()),
            Err(PresentError::Display(DisplayError::InvalidCoordinates))
        );
        assert!(sink.blits.is_empty());
    }

    #[test]
    fn test_band_taller_than_panel_rejected() {
        let mut sink = RecordingSink::new();
        sink.size = (480, 45);
        assert_eq!(
            present_tag(&mut sink, &MONO_40, "42", &TerminalConfig::default()),
            Err(PresentError::Display(DisplayError::InvalidCoordinates))
        );
        assert!(sink.blits.is_empty());
    }

    #[test]
    fn test_band_smaller_than_panel_accepted() {
        let mut sink = RecordingSink::new();
        sink.size = (800, 480);
        assert_eq!(
            present_tag(&mut sink, &MONO_40, "42", &TerminalConfig::default()),
            Ok(40)
        );
        assert_eq!(sink.blits[0].0, Region::new(0, 0, 480, 50));
    }
}
