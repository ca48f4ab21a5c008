//! # JFIF - APP0 header codec
//!
//! This crate reads and writes the fixed 20-byte JFIF header found at the start
//! of a JPEG file: SOI marker, APP0 marker, segment length, `JFIF\0`
//! identifier, version, pixel density and thumbnail dimensions.
//!
//! ## Quick Start
//!
//! ### Decoding
//!
//! ```no_run
//! use jfif::JfifDecoder;
//!
//! let mut decoder = JfifDecoder::new();
//! let header = decoder.decode_file("input.jpg").unwrap();
//! println!("{}x{} {}", header.x_density, header.y_density, header.density_units());
//! ```
//!
//! ### Encoding
//!
//! ```no_run
//! use jfif::{DensityUnits, EncoderOptions, JfifEncoder, JfifHeader, Version};
//!
//! let header = JfifHeader::new_jfif(Version::new(1, 2), DensityUnits::DotsPerInch, 300, 300);
//! let encoder = JfifEncoder::new(EncoderOptions::default().atomic(true));
//! encoder.encode_file(&header, &[0xFF, 0xD9], "output.jpg").unwrap();
//! ```
//!
//! ## Scope
//!
//! Only the header record is modeled. Image data after byte 20 is carried as
//! opaque trailing bytes; the segment length is kept as read and never
//! checked against the data.

// Re-export core types
pub use jfif_core::{consts, DensityUnits, JfifError, JfifResult, Version};

// Re-export header model
pub use jfif_headers::{JfifHeader, TRAILING_OFFSET};

// Re-export decoder
pub use jfif_decoder::JfifDecoder;

// Re-export encoder
pub use jfif_encoder::{EncoderOptions, JfifEncoder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decode the header at the start of `data`
pub fn decode(data: &[u8]) -> JfifResult<JfifHeader> {
    JfifHeader::parse(data)
}

/// Write `header` followed by `trailing` to `path`, creating or truncating it
pub fn encode_file<P: AsRef<std::path::Path>>(
    header: &JfifHeader,
    trailing: &[u8],
    path: P,
) -> JfifResult<()> {
    JfifEncoder::default().encode_file(header, trailing, path)
}
