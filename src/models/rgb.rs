//! RGB colour handling for socket colours in shape markup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGB colour value with hex string representation.
///
/// Registry files carry colours as `#rrggbb` strings in either case; the
/// markup always receives the normalised uppercase `#RRGGBB` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Black, used to reset stroke and font colour after coloured elements.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use devshape::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#ff1493").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 20, 147));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use devshape::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(85, 107, 47).to_hex(), "#556B2F");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(RgbColor::from_hex("#0000FF").unwrap(), RgbColor::new(0, 0, 255));
        assert_eq!(RgbColor::from_hex("ffd700").unwrap(), RgbColor::new(255, 215, 0));
        assert_eq!(RgbColor::from_hex("  #003300 ").unwrap(), RgbColor::new(0, 51, 0));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#GG0000").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#ÄÄÄ").is_err());
    }

    #[test]
    fn test_to_hex_is_uppercase() {
        let color = RgbColor::from_hex("#ff4500").unwrap();
        assert_eq!(color.to_hex(), "#FF4500");
        assert_eq!(color.to_string(), "#FF4500");
        assert_eq!(RgbColor::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_serde_as_string() {
        let color: RgbColor = serde_json::from_str("\"#00bfff\"").unwrap();
        assert_eq!(color, RgbColor::new(0, 191, 255));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#00BFFF\"");
        assert!(serde_json::from_str::<RgbColor>("\"blue\"").is_err());
    }
}
