//! Fixed byte offsets of the JFIF APP0 header
//!
//! ```text
//! [SOI 2][APP0 2][len 2][JFIF\0 5][ver 2][units 1][Xd 2][Yd 2][Xt 1][Yt 1][trailing ...]
//! ```

use byteorder::{BigEndian, ByteOrder};

pub const SOI_OFFSET: usize = 0;
pub const APP0_OFFSET: usize = 2;
pub const LENGTH_OFFSET: usize = 4;
pub const IDENTIFIER_OFFSET: usize = 6;
pub const VERSION_OFFSET: usize = 11;
pub const UNITS_OFFSET: usize = 13;
pub const X_DENSITY_OFFSET: usize = 14;
pub const Y_DENSITY_OFFSET: usize = 16;
pub const X_THUMBNAIL_OFFSET: usize = 18;
pub const Y_THUMBNAIL_OFFSET: usize = 19;

/// Offset of the first byte after the header
pub const TRAILING_OFFSET: usize = 20;

/// Read a big-endian u16 at `offset`
///
/// Callers check bounds once up front; this panics on a short slice.
#[inline]
pub fn read_u16_be(data: &[u8], offset: usize) -> u16 {
    BigEndian::read_u16(&data[offset..offset + 2])
}

/// Store `value` as a big-endian u16 at `offset`
#[inline]
pub fn write_u16_be(data: &mut [u8], offset: usize, value: u16) {
    BigEndian::write_u16(&mut data[offset..offset + 2], value);
}

/// Copy `N` bytes starting at `offset`
#[inline]
pub fn read_array<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&data[offset..offset + N]);
    out
}
