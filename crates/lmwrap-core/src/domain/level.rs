//! Numeric identifiers passed to the tool.
//!
//! Lunar Magic numbers levels in hexadecimal everywhere: in its UI, in the
//! file names it writes and on its command line. These types keep that
//! convention in one place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionParseError;

/// Strip an optional `0x`/`0X`/`$` prefix from a hexadecimal literal.
pub(super) fn hex_digits(s: &str) -> &str {
    let trimmed = s.trim();
    trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('$'))
        .unwrap_or(trimmed)
}

/// A level index.
///
/// `Display` pads to three digits (`005`, `105`), which is how levels are
/// named in messages. The command-line form from [`LevelNumber::token`] is
/// unpadded.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LevelNumber(u16);

impl LevelNumber {
    pub const fn new(number: u16) -> Self {
        Self(number)
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Uppercase, unpadded hexadecimal.
    pub fn token(self) -> String {
        format!("{:X}", self.0)
    }
}

impl From<u16> for LevelNumber {
    fn from(number: u16) -> Self {
        Self(number)
    }
}

impl fmt::Display for LevelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03X}", self.0)
    }
}

impl fmt::UpperHex for LevelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Parses hexadecimal: `105`, `0x105` and `$105` are all level 0x105.
impl FromStr for LevelNumber {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u16::from_str_radix(hex_digits(s), 16)
            .map(Self)
            .map_err(|_| OptionParseError::LevelNumber(s.to_string()))
    }
}

/// Target tile position for a partial map16 import.
///
/// The tool does not document this argument. The `X,Y` hexadecimal form is
/// the one known to be accepted, so it is kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Map16Location {
    pub x: u32,
    pub y: u32,
}

impl Map16Location {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Single `X,Y` token in uppercase hexadecimal.
    pub fn token(self) -> String {
        format!("{:X},{:X}", self.x, self.y)
    }
}

impl From<(u32, u32)> for Map16Location {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Map16Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={:X}, Y={:X}", self.x, self.y)
    }
}

impl FromStr for Map16Location {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OptionParseError::Map16Location(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = u32::from_str_radix(hex_digits(x), 16).map_err(|_| invalid())?;
        let y = u32::from_str_radix(hex_digits(y), 16).map_err(|_| invalid())?;
        Ok(Self { x, y })
    }
}
