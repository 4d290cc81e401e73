//! Terminal presentation settings
//!
//! Fixed protocol constants live next to the code that uses them; this is
//! only what a board may want to change: panel geometry, where the tag text
//! sits, and its colours.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tagscan_display::Rgb565;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Panel width or height is zero
    ZeroDisplay,
    /// Left and right margins leave no room for text
    MarginsTooWide,
    /// Tag band (font height plus padding) is taller than the panel
    TagTooTall,
}

/// Display and tag layout
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerminalConfig {
    /// Panel width in pixels
    pub display_width: u16,
    /// Panel height in pixels
    pub display_height: u16,
    /// Gap between the left panel edge and the first character
    pub margin_left: u16,
    /// Subtracted from the panel width to get the wrap width
    pub margin_right: u16,
    /// Extra rows below the text in the tag band
    pub padding: u16,
    /// Text colour
    pub foreground: Rgb565,
    /// Tag band colour
    pub background: Rgb565,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            display_width: 480,
            display_height: 320,
            margin_left: 10,
            margin_right: 10,
            padding: 10,
            foreground: Rgb565::WHITE,
            background: Rgb565::BLACK,
        }
    }
}

impl TerminalConfig {
    /// Height of the tag band for a font of `font_height` pixels
    pub fn tag_height(&self, font_height: u8) -> u16 {
        (font_height as u16).saturating_add(self.padding)
    }

    /// Width available to the text renderer
    pub fn wrap_width(&self) -> u16 {
        self.display_width.saturating_sub(self.margin_right)
    }

    /// Check the layout against the panel for a given font height
    pub fn validate(&self, font_height: u8) -> Result<(), ConfigError> {
        if self.display_width == 0 || self.display_height == 0 {
            return Err(ConfigError::ZeroDisplay);
        }

        let margins = self.margin_left as u32 + self.margin_right as u32;
        if margins >= self.display_width as u32 {
            return Err(ConfigError::MarginsTooWide);
        }

        if font_height as u32 + self.padding as u32 > self.display_height as u32 {
            return Err(ConfigError::TagTooTall);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TerminalConfig::default();
        assert_eq!(config.display_width, 480);
        assert_eq!(config.display_height, 320);
        assert_eq!(config.wrap_width(), 470);
        assert_eq!(config.tag_height(40), 50);
        assert_eq!(config.validate(40), Ok(()));
    }

    #[test]
    fn test_zero_display() {
        let config = TerminalConfig {
            display_height: 0,
            ..TerminalConfig::default()
        };
        assert_eq!(config.validate(40), Err(ConfigError::ZeroDisplay));
    }

    #[test]
    fn test_margins_too_wide() {
        let config = TerminalConfig {
            display_width: 20,
            ..TerminalConfig::default()
        };
        assert_eq!(config.validate(8), Err(ConfigError::MarginsTooWide));
    }

    #[test]
    fn test_tag_too_tall() {
        let config = TerminalConfig {
            display_height: 45,
            ..TerminalConfig::default()
        };
        assert_eq!(config.validate(40), Err(ConfigError::TagTooTall));
        assert_eq!(config.validate(35), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TerminalConfig = toml::from_str(
            r#"
            display_width = 320
            display_height = 240
            foreground = 63488
            "#,
        )
        .unwrap();

        assert_eq!(config.display_width, 320);
        assert_eq!(config.display_height, 240);
        assert_eq!(config.foreground, Rgb565::RED);
        assert_eq!(config.margin_left, 10);
        assert_eq!(config.background, Rgb565::BLACK);
    }
}
