//! Constants describing the JFIF APP0 header layout

/// Size in bytes of the fixed JFIF header (SOI through thumbnail dimensions)
pub const HEADER_SIZE: usize = 20;

/// Start of Image marker
pub const SOI_MARKER: [u8; 2] = [0xFF, 0xD8];

/// Application segment 0 marker
pub const APP0_MARKER: [u8; 2] = [0xFF, 0xE0];

/// "JFIF" followed by its NUL terminator
pub const JFIF_IDENTIFIER: [u8; 5] = [0x4A, 0x46, 0x49, 0x46, 0x00];

/// APP0 segment length for a JFIF block without thumbnail data
pub const JFIF_SEGMENT_LENGTH: u16 = 16;

/// JFIF 1.01
pub const DEFAULT_VERSION_MAJOR: u8 = 1;
pub const DEFAULT_VERSION_MINOR: u8 = 1;

/// Bytes per thumbnail pixel (packed RGB)
pub const THUMBNAIL_BYTES_PER_PIXEL: usize = 3;
