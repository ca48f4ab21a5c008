//! JFIF APP0 header (JPEG File Interchange Format 1.02, section "JFIF APP0 marker")
//!
//! The header is a fixed 20-byte record: SOI marker, APP0 marker, segment
//! length, identifier, version, density and thumbnail dimensions. Thumbnail
//! pixels and everything after byte 20 are not part of the model.

use jfif_core::consts::{
    APP0_MARKER, HEADER_SIZE, JFIF_IDENTIFIER, JFIF_SEGMENT_LENGTH, SOI_MARKER,
    THUMBNAIL_BYTES_PER_PIXEL,
};
use jfif_core::*;
use std::fmt;
use std::io::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::*;

/// JFIF APP0 header
///
/// A header returned by [`JfifHeader::parse`] always carries valid markers and
/// identifier. Fields are public, so a caller can build any header by hand;
/// [`JfifHeader::write`] serializes it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JfifHeader {
    pub soi_marker: [u8; 2],
    pub app0_marker: [u8; 2],
    /// Segment length as stored, never recomputed
    pub length: u16,
    pub identifier: [u8; 5],
    pub version: Version,
    /// Raw units byte, see [`JfifHeader::density_units`]
    pub units: u8,
    pub x_density: u16,
    pub y_density: u16,
    pub x_thumbnail: u8,
    pub y_thumbnail: u8,
}

impl JfifHeader {
    /// Create a header with canonical markers and identifier and no thumbnail
    pub fn new_jfif(version: Version, units: DensityUnits, x_density: u16, y_density: u16) -> Self {
        Self {
            soi_marker: SOI_MARKER,
            app0_marker: APP0_MARKER,
            length: JFIF_SEGMENT_LENGTH,
            identifier: JFIF_IDENTIFIER,
            version,
            units: units.to_byte(),
            x_density,
            y_density,
            x_thumbnail: 0,
            y_thumbnail: 0,
        }
    }

    /// Parse the header from the first 20 bytes of `data`
    ///
    /// Bytes past the header are ignored. Checks run in order: size, SOI,
    /// APP0, identifier; the first failure is returned.
    pub fn parse(data: &[u8]) -> JfifResult<Self> {
        if data.len() < HEADER_SIZE {
            return Err(JfifError::TooShort {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let soi_marker: [u8; 2] = read_array(data, SOI_OFFSET);
        if soi_marker != SOI_MARKER {
            return Err(JfifError::InvalidSOI(soi_marker));
        }

        let app0_marker: [u8; 2] = read_array(data, APP0_OFFSET);
        if app0_marker != APP0_MARKER {
            return Err(JfifError::InvalidAPP0(app0_marker));
        }

        let identifier: [u8; 5] = read_array(data, IDENTIFIER_OFFSET);
        if identifier != JFIF_IDENTIFIER {
            return Err(JfifError::InvalidIdentifier(identifier));
        }

        Ok(Self {
            soi_marker,
            app0_marker,
            length: read_u16_be(data, LENGTH_OFFSET),
            identifier,
            version: Version::from_bytes(read_array(data, VERSION_OFFSET)),
            units: data[UNITS_OFFSET],
            x_density: read_u16_be(data, X_DENSITY_OFFSET),
            y_density: read_u16_be(data, Y_DENSITY_OFFSET),
            x_thumbnail: data[X_THUMBNAIL_OFFSET],
            y_thumbnail: data[Y_THUMBNAIL_OFFSET],
        })
    }

    /// Write the header fields followed by `trailing` verbatim
    ///
    /// No validation is performed; the header is written exactly as held.
    pub fn write<W: Write>(&self, trailing: &[u8], writer: &mut W) -> JfifResult<()> {
        writer.write_all(&self.to_bytes())?;
        writer.write_all(trailing)?;
        Ok(())
    }

    /// Serialize the 20 header bytes
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[SOI_OFFSET..SOI_OFFSET + 2].copy_from_slice(&self.soi_marker);
        out[APP0_OFFSET..APP0_OFFSET + 2].copy_from_slice(&self.app0_marker);
        write_u16_be(&mut out, LENGTH_OFFSET, self.length);
        out[IDENTIFIER_OFFSET..IDENTIFIER_OFFSET + 5].copy_from_slice(&self.identifier);
        out[VERSION_OFFSET..VERSION_OFFSET + 2].copy_from_slice(&self.version.to_bytes());
        out[UNITS_OFFSET] = self.units;
        write_u16_be(&mut out, X_DENSITY_OFFSET, self.x_density);
        write_u16_be(&mut out, Y_DENSITY_OFFSET, self.y_density);
        out[X_THUMBNAIL_OFFSET] = self.x_thumbnail;
        out[Y_THUMBNAIL_OFFSET] = self.y_thumbnail;
        out
    }

    pub fn density_units(&self) -> DensityUnits {
        DensityUnits::from_byte(self.units)
    }

    /// Identifier text without the NUL terminator
    pub fn identifier_str(&self) -> Option<&str> {
        let text = self.identifier.strip_suffix(&[0]).unwrap_or(&self.identifier[..]);
        std::str::from_utf8(text).ok()
    }

    /// Size in bytes of the RGB thumbnail the header announces
    pub fn thumbnail_len(&self) -> usize {
        THUMBNAIL_BYTES_PER_PIXEL * self.x_thumbnail as usize * self.y_thumbnail as usize
    }

    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail_len() > 0
    }

    /// Whether the markers and identifier are the ones [`JfifHeader::parse`] accepts
    pub fn is_valid_jfif(&self) -> bool {
        self.soi_marker == SOI_MARKER
            && self.app0_marker == APP0_MARKER
            && self.identifier == JFIF_IDENTIFIER
    }
}

impl Default for JfifHeader {
    fn default() -> Self {
        Self::new_jfif(Version::default(), DensityUnits::Unspecified, 1, 1)
    }
}

impl fmt::Display for JfifHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JFIF {} length={} density={}x{} {} thumbnail={}x{}",
            self.version,
            self.length,
            self.x_density,
            self.y_density,
            self.density_units(),
            self.x_thumbnail,
            self.y_thumbnail
        )
    }
}
