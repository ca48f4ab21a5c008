//! # Writing a JFIF header
//!
//! Decodes a fixed 20-byte JFIF 1.01 header and writes it back out as
//! `output.jpg` (or the path given as the first argument).
//!
//! ```bash
//! cargo run --example write_header -- /tmp/output.jpg
//! ```

use jfif::{JfifDecoder, JfifEncoder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let jpeg_header: [u8; 20] = [
        0xFF, 0xD8, // SOI marker
        0xFF, 0xE0, // APP0 marker
        0x00, 0x10, // Length
        0x4A, 0x46, 0x49, 0x46, 0x00, // "JFIF\0"
        0x01, 0x01, // Version
        0x00, // Units
        0x00, 0x48, // XDensity
        0x00, 0x48, // YDensity
        0x00, // XThumbnail
        0x00, // YThumbnail
    ];

    let mut decoder = JfifDecoder::new();
    let header = decoder.decode(&jpeg_header)?;
    println!("Decoded: {}", header);

    // Additional image data would follow the header here
    let raw_data: &[u8] = &[];
    let filename = std::env::args().nth(1).unwrap_or_else(|| "output.jpg".to_string());

    JfifEncoder::default().encode_file(&header, raw_data, &filename)?;
    println!("JPEG file written successfully: {}", filename);

    Ok(())
}
