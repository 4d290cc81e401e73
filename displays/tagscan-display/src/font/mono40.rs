//! 40 px monospace face
//!
//! Lowercase letters, digits and `-` on a 24 × 40 cell. Strokes are 4 px wide,
//! drawn on a 5 × 8 grid with a 2 px side bearing and 4 px above and below.

use super::{Font, Glyph};

/// Built-in 40 px font covering every character the scan decoder emits
pub static MONO_40: Font<'static> = Font::new(40, GLYPHS);

const GLYPHS: &[Glyph<'static>] = &[
    Glyph::new('0', 24, RUNS_DIGIT_0),
    Glyph::new('1', 24, RUNS_DIGIT_1),
    Glyph::new('2', 24, RUNS_DIGIT_2),
    Glyph::new('3', 24, RUNS_DIGIT_3),
    Glyph::new('4', 24, RUNS_DIGIT_4),
    Glyph::new('5', 24, RUNS_DIGIT_5),
    Glyph::new('6', 24, RUNS_DIGIT_6),
    Glyph::new('7', 24, RUNS_DIGIT_7),
    Glyph::new('8', 24, RUNS_DIGIT_8),
    Glyph::new('9', 24, RUNS_DIGIT_9),
    Glyph::new('a', 24, RUNS_A),
    Glyph::new('b', 24, RUNS_B),
    Glyph::new('c', 24, RUNS_C),
    Glyph::new('d', 24, RUNS_D),
    Glyph::new('e', 24, RUNS_E),
    Glyph::new('f', 24, RUNS_F),
    Glyph::new('g', 24, RUNS_G),
    Glyph::new('h', 24, RUNS_H),
    Glyph::new('i', 24, RUNS_I),
    Glyph::new('j', 24, RUNS_J),
    Glyph::new('k', 24, RUNS_K),
    Glyph::new('l', 24, RUNS_L),
    Glyph::new('m', 24, RUNS_M),
    Glyph::new('n', 24, RUNS_N),
    Glyph::new('o', 24, RUNS_O),
    Glyph::new('p', 24, RUNS_P),
    Glyph::new('q', 24, RUNS_Q),
    Glyph::new('r', 24, RUNS_R),
    Glyph::new('s', 24, RUNS_S),
    Glyph::new('t', 24, RUNS_T),
    Glyph::new('u', 24, RUNS_U),
    Glyph::new('v', 24, RUNS_V),
    Glyph::new('w', 24, RUNS_W),
    Glyph::new('x', 24, RUNS_X),
    Glyph::new('y', 24, RUNS_Y),
    Glyph::new('z', 24, RUNS_Z),
    Glyph::new('-', 24, RUNS_MINUS),
];

const RUNS_DIGIT_0: &[u16] = &[
    102, 12, 12, 12, 12, 12, 12, 12, 8, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 8,
    8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4,
    12, 4, 4, 4, 12, 4, 8, 12, 12, 12, 12, 12, 12, 12, 198,
];

const RUNS_DIGIT_1: &[u16] = &[
    106, 4, 20, 4, 20, 4, 20, 4, 16, 8, 16, 8, 16, 8, 16, 8, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20,
    4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 16, 12, 12, 12, 12,
    12, 12, 12, 198,
];

const RUNS_DIGIT_2: &[u16] = &[
    102, 12, 12, 12, 12, 12, 12, 12, 8, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 20, 4, 20,
    4, 20, 4, 20, 4, 16, 4, 20, 4, 20, 4, 20, 4, 16, 4, 20, 4, 20, 4, 20, 4, 16, 4, 20, 4, 20, 4,
    20, 4, 16, 20, 4, 20, 4, 20, 4, 20, 194,
];

const RUNS_DIGIT_3: &[u16] = &[
    98, 20, 4, 20, 4, 20, 4, 20, 16, 4, 20, 4, 20, 4, 20, 4, 16, 4, 20, 4, 20, 4, 20, 4, 24, 4, 20,
    4, 20, 4, 20, 4, 24, 4, 20, 4, 20, 4, 20, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12,
    4, 8, 12, 12, 12, 12, 12, 12, 12, 198,
];

const RUNS_DIGIT_4: &[u16] = &[
    110, 4, 20, 4, 20, 4, 20, 4, 16, 8, 16, 8, 16, 8, 16, 8, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4,
    12, 4, 4, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 20, 4, 20, 4, 20, 4, 20, 16, 4,
    20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 198,
];

const RUNS_DIGIT_5: &[u16] = &[
    98, 20, 4, 20, 4, 20, 4, 20, 4, 4, 20, 4, 20, 4, 20, 4, 20, 16, 8, 16, 8, 16, 8, 16, 24, 4, 20,
    4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12,
    4, 8, 12, 12, 12, 12, 12, 12, 12, 198,
];

const RUNS_DIGIT_6: &[u16] = &[
    106, 8, 16, 8, 16, 8, 16, 8, 12, 4, 20, 4, 20, 4, 20, 4, 16, 4, 20, 4, 20, 4, 20, 4, 20, 16, 8,
    16, 8, 16, 8, 16, 8, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4,
    4, 4, 12, 4, 4, 4, 12, 4, 8, 12, 12, 12, 12, 12, 12, 12, 198,
];

const RUNS_DIGIT_7: &[u16] = &[
    98, 20, 4, 20, 4, 20, 4, 20, 20, 4, 20, 4, 20, 4, 20, 4, 16, 4, 20, 4, 20, 4, 20, 4, 16, 4, 20,
    4, 20, 4, 20, 4, 16, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4,
    20, 4, 206,
];

const RUNS_DIGIT_8: &[u16] = &[
    102, 12, 12, 12, 12, 12, 12, 12, 8, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12,
    4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 12, 12, 12, 12, 12, 12, 12, 8, 4, 12, 4, 4, 4, 12,
    4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 12, 12, 12,
    12, 12, 12, 12, 198,
];

const RUNS_DIGIT_9: &[u16] = &[
    102, 12, 12, 12, 12, 12, 12, 12, 8, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12,
    4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 16, 8, 16, 8, 16, 8, 16, 20, 4, 20, 4, 20, 4, 20,
    4, 16, 4, 20, 4, 20, 4, 20, 4, 12, 8, 16, 8, 16, 8, 16, 8, 202,
];

const RUNS_A: &[u16] = &[
    294, 12, 12, 12, 12, 12, 12, 12, 24, 4, 20, 4, 20, 4, 20, 4, 8, 16, 8, 16, 8, 16, 8, 16, 4, 4,
    12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 16, 8, 16, 8, 16, 8, 16, 194,
];

const RUNS_B: &[u16] = &[
    98, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8,
    4, 4, 8, 8, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4,
    4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 16, 8, 16, 8, 16, 8, 16,
    198,
];

const RUNS_C: &[u16] = &[
    294, 12, 12, 12, 12, 12, 12, 12, 8, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4,
    12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 12, 12, 12, 12, 12, 12, 12, 198,
];

const RUNS_D: &[u16] = &[
    114, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8,
    8, 4, 4, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4,
    4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 16, 8, 16, 8, 16, 8, 16,
    194,
];

const RUNS_E: &[u16] = &[
    294, 12, 12, 12, 12, 12, 12, 12, 8, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 20, 4,
    20, 4, 20, 4, 20, 4, 4, 20, 4, 20, 4, 20, 4, 24, 12, 12, 12, 12, 12, 12, 12, 198,
];

const RUNS_F: &[u16] = &[
    106, 8, 16, 8, 16, 8, 16, 8, 12, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 20, 4, 20,
    4, 20, 4, 16, 12, 12, 12, 12, 12, 12, 12, 16, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20,
    4, 20, 4, 20, 4, 20, 4, 20, 4, 206,
];

const RUNS_G: &[u16] = &[
    294, 16, 8, 16, 8, 16, 8, 16, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4,
    4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 16, 8, 16, 8, 16, 8, 16, 20, 4, 20, 4, 20, 4, 20, 4,
    8, 12, 12, 12, 12, 12, 12, 12, 102,
];

const RUNS_H: &[u16] = &[
    98, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8,
    4, 4, 8, 8, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4,
    4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4,
    4, 12, 4, 4, 4, 12, 4, 194,
];

const RUNS_I: &[u16] = &[
    106, 4, 20, 4, 20, 4, 20, 4, 112, 8, 16, 8, 16, 8, 16, 8, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4,
    20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 16, 12, 12, 12, 12, 12, 12, 12, 198,
];

const RUNS_J: &[u16] = &[
    110, 4, 20, 4, 20, 4, 20, 4, 112, 8, 16, 8, 16, 8, 16, 8, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4,
    20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8,
    4, 12, 8, 16, 8, 16, 8, 16, 8, 106,
];

const RUNS_K: &[u16] = &[
    98, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8,
    4, 8, 4, 8, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 8, 16, 8, 16, 8, 16, 8, 16, 4,
    4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4,
    198,
];

const RUNS_L: &[u16] = &[
    102, 8, 16, 8, 16, 8, 16, 8, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20,
    4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 16, 12, 12, 12, 12,
    12, 12, 12, 198,
];

const RUNS_M: &[u16] = &[
    290, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4,
    4, 4, 12, 4, 194,
];

const RUNS_N: &[u16] = &[
    290, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8,
    4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4,
    4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 194,
];

const RUNS_O: &[u16] = &[
    294, 12, 12, 12, 12, 12, 12, 12, 8, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12,
    4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4,
    8, 12, 12, 12, 12, 12, 12, 12, 198,
];

const RUNS_P: &[u16] = &[
    290, 16, 8, 16, 8, 16, 8, 16, 8, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4,
    4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 16, 8, 16, 8, 16, 8, 16, 8, 4, 20, 4, 20, 4, 20, 4,
    20, 4, 20, 4, 20, 4, 20, 4, 114,
];

const RUNS_Q: &[u16] = &[
    294, 16, 8, 16, 8, 16, 8, 16, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4,
    4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 16, 8, 16, 8, 16, 8, 16, 20, 4, 20, 4, 20, 4, 20, 4,
    20, 4, 20, 4, 20, 4, 20, 4, 98,
];

const RUNS_R: &[u16] = &[
    290, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8,
    4, 4, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 210,
];

const RUNS_S: &[u16] = &[
    294, 12, 12, 12, 12, 12, 12, 12, 8, 4, 20, 4, 20, 4, 20, 4, 24, 12, 12, 12, 12, 12, 12, 12, 24,
    4, 20, 4, 20, 4, 20, 4, 4, 16, 8, 16, 8, 16, 8, 16, 198,
];

const RUNS_T: &[u16] = &[
    102, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 16, 12, 12, 12, 12, 12, 12, 12, 16, 4,
    20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 20, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8, 4, 8,
    4, 12, 8, 16, 8, 16, 8, 16, 8, 198,
];

const RUNS_U: &[u16] = &[
    290, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4,
    4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8,
    8, 4, 4, 8, 8, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 8, 8, 4, 4, 194,
];

const RUNS_V: &[u16] = &[
    290, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4,
    4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 4, 4, 4, 12, 4, 4, 4, 12, 4,
    4, 4, 12, 4, 4, 4, 16, 4, 20, 4, 20, 4, 20, 4, 202,
];

const RUNS_W: &[u16] = &[
    290, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4,
    4, 12, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4,
    4, 12, 4, 4, 4, 198,
];

const RUNS_X: &[u16] = &[
    290, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12,
    4, 4, 4, 16, 4, 20, 4, 20, 4, 20, 4, 16, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 8, 4,
    12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 194,
];

const RUNS_Y: &[u16] = &[
    290, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4,
    4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 4, 4, 12, 4, 8, 16, 8, 16, 8, 16, 8, 16, 20,
    4, 20, 4, 20, 4, 20, 4, 8, 12, 12, 12, 12, 12, 12, 12, 102,
];

const RUNS_Z: &[u16] = &[
    290, 20, 4, 20, 4, 20, 4, 20, 16, 4, 20, 4, 20, 4, 20, 4, 16, 4, 20, 4, 20, 4, 20, 4, 16, 4,
    20, 4, 20, 4, 20, 4, 16, 20, 4, 20, 4, 20, 4, 20, 194,
];

const RUNS_MINUS: &[u16] = &[
    386, 20, 4, 20, 4, 20, 4, 20, 482,
];
