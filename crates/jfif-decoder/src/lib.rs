//! JFIF header decoder

use jfif_core::consts::HEADER_SIZE;
use jfif_core::*;
use jfif_headers::{JfifHeader, TRAILING_OFFSET};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// JFIF header decoder
#[derive(Debug)]
pub struct JfifDecoder {
    header: Option<JfifHeader>,
}

impl JfifDecoder {
    pub fn new() -> Self {
        Self { header: None }
    }

    /// Decode the header at the start of `data`
    pub fn decode(&mut self, data: &[u8]) -> JfifResult<JfifHeader> {
        let header = JfifHeader::parse(data)?;
        self.header = Some(header.clone());
        Ok(header)
    }

    /// Decode the header and return the bytes that follow it
    pub fn decode_with_trailing<'a>(
        &mut self,
        data: &'a [u8],
    ) -> JfifResult<(JfifHeader, &'a [u8])> {
        let header = self.decode(data)?;
        Ok((header, &data[TRAILING_OFFSET..]))
    }

    /// Decode from a reader, consuming exactly the header bytes
    pub fn decode_reader<R: Read>(&mut self, reader: R) -> JfifResult<JfifHeader> {
        let mut buffer = Vec::with_capacity(HEADER_SIZE);
        reader.take(HEADER_SIZE as u64).read_to_end(&mut buffer)?;
        self.decode(&buffer)
    }

    /// Decode the header of a file
    pub fn decode_file<P: AsRef<Path>>(&mut self, path: P) -> JfifResult<JfifHeader> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        self.decode_reader(reader)
    }

    /// Last successfully decoded header
    pub fn header(&self) -> Option<&JfifHeader> {
        self.header.as_ref()
    }
}

impl Default for JfifDecoder {
    fn default() -> Self {
        Self::new()
    }
}
