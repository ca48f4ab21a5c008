//! # Error Handling Examples
//!
//! Shows how each `JfifError` variant surfaces when decoding malformed input,
//! and how an I/O failure surfaces when encoding.
//!
//! ```bash
//! cargo run --example error_handling
//! ```

use jfif::{decode, JfifEncoder, JfifError, JfifHeader};

fn describe(label: &str, data: &[u8]) {
    match decode(data) {
        Ok(header) => println!("   {:<22} ok: {}", label, header),
        Err(JfifError::TooShort { expected, actual }) => {
            println!("   {:<22} too short ({} of {} bytes)", label, actual, expected)
        }
        Err(e @ (JfifError::InvalidSOI(_) | JfifError::InvalidAPP0(_))) => {
            println!("   {:<22} bad marker: {}", label, e)
        }
        Err(JfifError::InvalidIdentifier(found)) => {
            println!("   {:<22} not JFIF: {:?}", label, String::from_utf8_lossy(&found))
        }
        Err(e) => println!("   {:<22} unexpected: {}", label, e),
    }
}

fn main() {
    println!("JFIF Error Handling Examples");
    println!("============================\n");

    let valid = JfifHeader::default().to_bytes();

    println!("1. Decoding:");
    describe("valid header", &valid);
    describe("truncated", &valid[..12]);

    let mut bad_soi = valid;
    bad_soi[1] = 0xD9;
    describe("EOI instead of SOI", &bad_soi);

    let mut exif = valid;
    exif[3] = 0xE1;
    describe("APP1 segment", &exif);

    let mut jfxx = valid;
    jfxx[6..11].copy_from_slice(b"JFXX\0");
    describe("JFXX extension", &jfxx);

    println!("\n2. Encoding to a directory that does not exist:");
    let path = std::env::temp_dir().join("jfif-missing-dir").join("out.jpg");
    match JfifEncoder::default().encode_file(&JfifHeader::default(), &[], &path) {
        Ok(()) => println!("   written to {}", path.display()),
        Err(JfifError::IoError(e)) => println!("   I/O error: {}", e),
        Err(e) => println!("   unexpected: {}", e),
    }
}
