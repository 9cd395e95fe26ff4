//! RGB colors and the deck palette.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Upper-case six digit hex, the form `a:srgbClr/@val` takes.
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Parse a six digit hex string such as `00629B`.
    pub fn from_hex(s: &str) -> Option<Self> {
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Brand palette used throughout the deck.
pub mod palette {
    use super::Rgb;

    pub const BLUE: Rgb = Rgb(0, 98, 155);
    pub const DARK_BLUE: Rgb = Rgb(0, 45, 75);
    pub const GRAY: Rgb = Rgb(50, 50, 50);
    pub const LIGHT_GRAY: Rgb = Rgb(244, 244, 244);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const ACCENT_BLUE: Rgb = Rgb(0, 129, 198);
}
