use std::fmt;

use serde::{Deserialize, Serialize};

/// Rendering color attached to a claim, from a small fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl ClaimColor {
    pub const PALETTE: [ClaimColor; 6] = [
        ClaimColor::Red,
        ClaimColor::Blue,
        ClaimColor::Green,
        ClaimColor::Yellow,
        ClaimColor::Purple,
        ClaimColor::Orange,
    ];

    /// Parse a palette label, ignoring ASCII case.
    pub fn parse(label: &str) -> Option<Self> {
        Self::PALETTE
            .iter()
            .copied()
            .find(|color| color.label().eq_ignore_ascii_case(label.trim()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimColor::Red => "Red",
            ClaimColor::Blue => "Blue",
            ClaimColor::Green => "Green",
            ClaimColor::Yellow => "Yellow",
            ClaimColor::Purple => "Purple",
            ClaimColor::Orange => "Orange",
        }
    }
}

impl fmt::Display for ClaimColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
