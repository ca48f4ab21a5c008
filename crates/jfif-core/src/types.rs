//! Value types shared by the JFIF header codec

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts;

/// JFIF version, stored as two raw bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self::new(bytes[0], bytes[1])
    }

    pub const fn to_bytes(self) -> [u8; 2] {
        [self.major, self.minor]
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new(consts::DEFAULT_VERSION_MAJOR, consts::DEFAULT_VERSION_MINOR)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

/// Interpretation of the `units` byte
///
/// The header keeps the raw byte; this is only a view of it, so values outside
/// the conventional range are carried as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DensityUnits {
    /// No units, densities give the pixel aspect ratio
    Unspecified,
    /// Dots per inch
    DotsPerInch,
    /// Dots per centimetre
    DotsPerCm,
    /// Any other value
    Unknown(u8),
}

impl DensityUnits {
    pub fn from_byte(units: u8) -> Self {
        match units {
            0 => DensityUnits::Unspecified,
            1 => DensityUnits::DotsPerInch,
            2 => DensityUnits::DotsPerCm,
            other => DensityUnits::Unknown(other),
        }
    }

    pub fn to_byte(&self) -> u8 {
        match self {
            DensityUnits::Unspecified => 0,
            DensityUnits::DotsPerInch => 1,
            DensityUnits::DotsPerCm => 2,
            DensityUnits::Unknown(units) => *units,
        }
    }
}

impl fmt::Display for DensityUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DensityUnits::Unspecified => f.write_str("unspecified"),
            DensityUnits::DotsPerInch => f.write_str("dpi"),
            DensityUnits::DotsPerCm => f.write_str("dpcm"),
            DensityUnits::Unknown(units) => write!(f, "unknown({})", units),
        }
    }
}
