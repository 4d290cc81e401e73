//! Text layout and glyph rendering
//!
//! Layout is greedy per character: a character that would cross `max_width`
//! starts a new line. There is no word-boundary awareness. Characters with no
//! glyph are drawn as a solid `height × height` block in the foreground
//! colour.

use crate::color::Rgb565;
use crate::font::{Font, Glyph};
use crate::frame::Canvas;

/// Colours used when drawing text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub foreground: Rgb565,
    pub background: Rgb565,
}

impl TextStyle {
    pub const fn new(foreground: Rgb565, background: Rgb565) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

/// A character placed by the layout pass
#[derive(Debug, Clone, Copy)]
struct Placement<'a> {
    glyph: Option<&'a Glyph<'a>>,
    /// Offset from the text origin
    x: u32,
    line: u32,
}

/// Greedy line breaker over a string
struct Layout<'f, 's> {
    font: &'f Font<'f>,
    chars: core::str::Chars<'s>,
    max_width: u32,
    advance: u32,
    line: u32,
}

impl<'f, 's> Layout<'f, 's> {
    fn new(font: &'f Font<'f>, text: &'s str, max_width: u16) -> Self {
        Self {
            font,
            chars: text.chars(),
            max_width: max_width as u32,
            advance: 0,
            line: 0,
        }
    }

    /// Total height of the lines laid out so far
    fn height(&self) -> u32 {
        (self.line + 1) * self.font.height() as u32
    }
}

impl<'f> Iterator for Layout<'f, '_> {
    type Item = Placement<'f>;

    fn next(&mut self) -> Option<Self::Item> {
        let character = self.chars.next()?;
        let glyph = self.font.lookup(character);
        let width = match glyph {
            Some(glyph) => glyph.width() as u32,
            None => self.font.height() as u32,
        };

        if self.advance + width > self.max_width {
            self.advance = 0;
            self.line += 1;
        }

        let placement = Placement {
            glyph,
            x: self.advance,
            line: self.line,
        };
        self.advance += width;

        Some(placement)
    }
}

/// Height `render` would return, without drawing
pub fn measure(font: &Font<'_>, text: &str, max_width: u16) -> u32 {
    let mut layout = Layout::new(font, text, max_width);
    for _ in layout.by_ref() {}
    layout.height()
}

/// Draw `text` into `canvas` starting at (`origin_x`, `origin_y`)
///
/// Lines wrap when the horizontal advance would exceed `max_width`. Returns
/// the total height consumed, `(lines) × font height`; an empty string still
/// counts as one line.
pub fn render<C: Canvas + ?Sized>(
    font: &Font<'_>,
    text: &str,
    canvas: &mut C,
    origin_x: u16,
    origin_y: u16,
    max_width: u16,
    style: TextStyle,
) -> u32 {
    let height = font.height() as u32;
    let mut layout = Layout::new(font, text, max_width);

    for placement in layout.by_ref() {
        let x = origin_x as u32 + placement.x;
        let y = origin_y as u32 + placement.line * height;

        match placement.glyph {
            Some(glyph) => draw_glyph(glyph, canvas, x, y, style),
            None => canvas.fill_rect(x, y, height, height, style.foreground),
        }
    }

    layout.height()
}

/// Expand a glyph's runs into the canvas
fn draw_glyph<C: Canvas + ?Sized>(
    glyph: &Glyph<'_>,
    canvas: &mut C,
    x: u32,
    y: u32,
    style: TextStyle,
) {
    let width = glyph.width() as u32;
    let mut row = 0;
    let mut column = 0;

    for ink in glyph.pixels() {
        let color = if ink.is_foreground() {
            style.foreground
        } else {
            style.background
        };
        canvas.set_pixel(x + column, y + row, color);

        column += 1;
        if column == width {
            column = 0;
            row += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{rle, Ink, MONO_40};
    use crate::frame::Frame;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    const STYLE: TextStyle = TextStyle::new(Rgb565::WHITE, Rgb565::BLACK);

    /// 20 px wide, 40 px high: left half foreground, right half background
    const HALF: &[u16] = &[
        0, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
        10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
        10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
        10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    ];
    static NARROW: Font<'static> = Font::new(40, &[Glyph::new('a', 20, HALF), Glyph::new('b', 20, HALF)]);

    #[test]
    fn test_wrap_before_overflowing_char() {
        let mut frame = Frame::new(0, 0, 40, 80, Rgb565::BLUE).unwrap();
        let height = render(&NARROW, "ab", &mut frame, 0, 0, 30, STYLE);

        assert_eq!(height, 80);
        // 'a' on line 0 at x = 0
        assert_eq!(frame.pixel(0, 0), Some(Rgb565::WHITE));
        assert_eq!(frame.pixel(15, 39), Some(Rgb565::BLACK));
        // 'b' wrapped to line 1 at x = 0, nothing drawn right of 'a'
        assert_eq!(frame.pixel(0, 40), Some(Rgb565::WHITE));
        assert_eq!(frame.pixel(25, 0), Some(Rgb565::BLUE));
    }

    #[test]
    fn test_same_line_when_fits() {
        let mut frame = Frame::new(0, 0, 40, 40, Rgb565::BLUE).unwrap();
        let height = render(&NARROW, "ab", &mut frame, 0, 0, 40, STYLE);

        assert_eq!(height, 40);
        assert_eq!(frame.pixel(20, 0), Some(Rgb565::WHITE));
        assert_eq!(frame.pixel(30, 0), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_missing_glyph_draws_block() {
        let mut frame = Frame::new(0, 0, 100, 40, Rgb565::BLACK).unwrap();
        let height = render(&NARROW, "?a", &mut frame, 0, 0, 100, STYLE);

        assert_eq!(height, 40);
        for y in 0..40 {
            for x in 0..40 {
                assert_eq!(frame.pixel(x, y), Some(Rgb565::WHITE));
            }
        }
        // 'a' follows at x = 40
        assert_eq!(frame.pixel(40, 0), Some(Rgb565::WHITE));
        assert_eq!(frame.pixel(50, 0), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_origin_offset() {
        let mut frame = Frame::new(0, 0, 60, 60, Rgb565::BLUE).unwrap();
        render(&NARROW, "a", &mut frame, 10, 5, 60, STYLE);

        assert_eq!(frame.pixel(9, 5), Some(Rgb565::BLUE));
        assert_eq!(frame.pixel(10, 5), Some(Rgb565::WHITE));
        assert_eq!(frame.pixel(20, 44), Some(Rgb565::BLACK));
        assert_eq!(frame.pixel(10, 45), Some(Rgb565::BLUE));
    }

    #[test]
    fn test_empty_text_is_one_line() {
        let mut frame = Frame::new(0, 0, 10, 10, Rgb565::BLACK).unwrap();
        assert_eq!(render(&NARROW, "", &mut frame, 0, 0, 10, STYLE), 40);
        assert!(frame.pixels().iter().all(|&p| p == Rgb565::BLACK));
    }

    #[test]
    fn test_clipped_outside_canvas() {
        let mut frame = Frame::new(0, 0, 30, 40, Rgb565::BLACK).unwrap();
        // Second line falls below the canvas and is dropped
        assert_eq!(render(&NARROW, "aab", &mut frame, 0, 0, 30, STYLE), 120);
        assert_eq!(frame.pixel(0, 0), Some(Rgb565::WHITE));
    }

    #[test]
    fn test_measure_matches_render() {
        for (text, max_width) in [("", 10), ("ab", 30), ("abab", 45), ("a?b", 1000)] {
            let mut frame = Frame::new(0, 0, 200, 200, Rgb565::BLACK).unwrap();
            let drawn = render(&NARROW, text, &mut frame, 0, 0, max_width, STYLE);
            assert_eq!(measure(&NARROW, text, max_width), drawn);
        }
    }

    #[test]
    fn test_builtin_font_decodes_to_cell() {
        let glyph = MONO_40.lookup('1').unwrap();
        let mut frame = Frame::new(0, 0, 24, 40, Rgb565::BLACK).unwrap();
        render(&MONO_40, "1", &mut frame, 0, 0, 24, STYLE);

        let expected = rle::decode(Ink::Background, glyph.runs());
        let drawn: Vec<bool> = frame.pixels().iter().map(|&p| p == Rgb565::WHITE).collect();
        assert_eq!(drawn, expected);
    }

    proptest! {
        #[test]
        fn prop_render_is_deterministic(text in "[a-z0-9?]{0,16}", max_width in 24u16..480) {
            let mut first = Frame::new(0, 0, 480, 160, Rgb565::BLACK).unwrap();
            let mut second = Frame::new(0, 0, 480, 160, Rgb565::BLACK).unwrap();

            let h1 = render(&MONO_40, &text, &mut first, 0, 0, max_width, STYLE);
            let h2 = render(&MONO_40, &text, &mut second, 0, 0, max_width, STYLE);

            prop_assert_eq!(h1, h2);
            prop_assert_eq!(first.pixels(), second.pixels());
        }
    }
}
