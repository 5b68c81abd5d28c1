//! Enumerated options accepted by Lunar Magic's command line.
//!
//! Every variant maps to exactly one wire token through an exhaustive `match`,
//! so a variant without a token does not compile.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::level::hex_digits;
use crate::error::OptionParseError;

/// Target sizes for expanding a ROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RomSize {
    #[serde(rename = "2MB")]
    Mb2,
    #[serde(rename = "3MB")]
    Mb3,
    #[serde(rename = "4MB")]
    Mb4,
    #[serde(rename = "6MB_SA1")]
    Mb6Sa1,
    #[serde(rename = "8MB_SA1")]
    Mb8Sa1,
}

impl RomSize {
    /// Every size the tool accepts, smallest first.
    pub const ALL: [Self; 5] = [Self::Mb2, Self::Mb3, Self::Mb4, Self::Mb6Sa1, Self::Mb8Sa1];

    /// The literal passed to `-ExpandROM`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Mb2 => "2MB",
            Self::Mb3 => "3MB",
            Self::Mb4 => "4MB",
            Self::Mb6Sa1 => "6MB_SA1",
            Self::Mb8Sa1 => "8MB_SA1",
        }
    }
}

impl fmt::Display for RomSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for RomSize {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|size| size.token().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OptionParseError::RomSize(s.to_string()))
    }
}

impl TryFrom<&str> for RomSize {
    type Error = OptionParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Graphics compression formats for `-ChangeCompression`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompressionFormat {
    #[serde(rename = "LC_LZ2_Orig")]
    LcLz2Orig,
    #[serde(rename = "LC_LZ2_Speed")]
    LcLz2Speed,
    #[serde(rename = "LC_LZ3")]
    LcLz3,
}

impl CompressionFormat {
    pub const ALL: [Self; 3] = [Self::LcLz2Orig, Self::LcLz2Speed, Self::LcLz3];

    /// The literal passed to `-ChangeCompression`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::LcLz2Orig => "LC_LZ2_Orig",
            Self::LcLz2Speed => "LC_LZ2_Speed",
            Self::LcLz3 => "LC_LZ3",
        }
    }
}

impl fmt::Display for CompressionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for CompressionFormat {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.token().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OptionParseError::Compression(s.to_string()))
    }
}

impl TryFrom<&str> for CompressionFormat {
    type Error = OptionParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

bitflags! {
    /// Options for `-ExportMultLevels`.
    ///
    /// Passing `Some(LevelExportFlags::empty())` still emits the options
    /// argument (`0`); passing `None` leaves the tool's defaults in place.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct LevelExportFlags: u32 {
        /// Only export levels that were modified.
        const ONLY_MODIFIED = 0b0000_0001;
    }

    /// Options for `-ImportMultLevels`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct LevelImportFlags: u32 {
        /// Clear secondary exits of the imported levels.
        const CLEAR_SECONDARY_EXITS = 0b0000_0001;
    }
}

/// Parse option bits written in hexadecimal, rejecting bits the tool does not define.
fn parse_flag_bits(s: &str, kind: &'static str) -> Result<u32, OptionParseError> {
    u32::from_str_radix(hex_digits(s), 16).map_err(|_| OptionParseError::Flags {
        kind,
        value: s.to_string(),
    })
}

impl LevelExportFlags {
    /// Parse hexadecimal option bits, e.g. `1`, `0x1` or `$1`.
    pub fn from_hex(s: &str) -> Result<Self, OptionParseError> {
        let bits = parse_flag_bits(s, "level export")?;
        Self::from_bits(bits).ok_or_else(|| OptionParseError::Flags {
            kind: "level export",
            value: s.to_string(),
        })
    }

    /// The options argument as the tool expects it.
    pub fn token(self) -> String {
        format!("{:X}", self.bits())
    }
}

impl LevelImportFlags {
    /// Parse hexadecimal option bits, e.g. `1`, `0x1` or `$1`.
    pub fn from_hex(s: &str) -> Result<Self, OptionParseError> {
        let bits = parse_flag_bits(s, "level import")?;
        Self::from_bits(bits).ok_or_else(|| OptionParseError::Flags {
            kind: "level import",
            value: s.to_string(),
        })
    }

    /// The options argument as the tool expects it.
    pub fn token(self) -> String {
        format!("{:X}", self.bits())
    }
}

impl Default for LevelExportFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for LevelImportFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for LevelExportFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LevelExportFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Self::from_bits(bits)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown level export bits {bits:X}")))
    }
}

impl Serialize for LevelImportFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LevelImportFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Self::from_bits(bits)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown level import bits {bits:X}")))
    }
}
