//! JFIF header encoder

use jfif_core::consts::HEADER_SIZE;
use jfif_core::*;
use jfif_headers::JfifHeader;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::Builder;

/// Default capacity of the file output buffer
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Encoder options
#[derive(Debug, Clone)]
pub struct EncoderOptions {
    /// Write files through a temporary sibling and rename into place
    pub atomic: bool,
    /// Capacity of the buffered file writer
    pub buffer_capacity: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            atomic: false,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }
}

/// JFIF header encoder
///
/// Writes the header exactly as given. Headers are not re-validated, so a
/// hand-built header with bad markers is written with those markers.
#[derive(Debug, Clone, Default)]
pub struct JfifEncoder {
    options: EncoderOptions,
}

impl JfifEncoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encode the header and trailing data to a writer
    pub fn encode<W: Write>(
        &self,
        header: &JfifHeader,
        trailing: &[u8],
        mut writer: W,
    ) -> JfifResult<()> {
        header.write(trailing, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode into a new buffer
    pub fn encode_to_vec(&self, header: &JfifHeader, trailing: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + trailing.len());
        out.extend_from_slice(&header.to_bytes());
        out.extend_from_slice(trailing);
        out
    }

    /// Encode to a file, creating or truncating it
    ///
    /// Without [`EncoderOptions::atomic`], a failure partway through leaves
    /// whatever was written so far on disk.
    pub fn encode_file<P: AsRef<Path>>(
        &self,
        header: &JfifHeader,
        trailing: &[u8],
        path: P,
    ) -> JfifResult<()> {
        if self.options.atomic {
            return self.encode_file_atomic(header, trailing, path.as_ref());
        }

        let file = File::create(path)?;
        let writer = BufWriter::with_capacity(self.options.buffer_capacity, file);
        self.encode(header, trailing, writer)
    }

    fn encode_file_atomic(
        &self,
        header: &JfifHeader,
        trailing: &[u8],
        path: &Path,
    ) -> JfifResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Dropped (and removed) on any early return
        let mut temp = temp_file_builder().tempfile_in(dir)?;
        {
            let writer =
                BufWriter::with_capacity(self.options.buffer_capacity, temp.as_file_mut());
            self.encode(header, trailing, writer)?;
        }

        // Replacing a file keeps its mode
        if let Ok(existing) = std::fs::metadata(path) {
            if existing.is_file() {
                temp.as_file().set_permissions(existing.permissions())?;
            }
        }

        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

/// Temporary files get the same creation mode as `File::create` (0666 less umask)
fn temp_file_builder() -> Builder<'static, 'static> {
    #[allow(unused_mut)]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Accepts `limit` bytes, then fails every write
    struct FailingWriter {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.written.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
            }
            let n = room.min(buf.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_options_builder() {
        let options = EncoderOptions::new().atomic(true).buffer_capacity(0);
        assert!(options.atomic);
        assert_eq!(options.buffer_capacity, 1);
        assert!(!EncoderOptions::default().atomic);
    }

    #[test]
    fn test_encode_matches_to_vec() {
        let encoder = JfifEncoder::default();
        let header = JfifHeader::default();

        let mut out = Vec::new();
        encoder.encode(&header, b"tail", &mut out).unwrap();
        assert_eq!(out, encoder.encode_to_vec(&header, b"tail"));
        assert_eq!(out.len(), HEADER_SIZE + 4);
    }

    #[test]
    fn test_encode_failing_sink() {
        let encoder = JfifEncoder::default();
        let mut sink = FailingWriter {
            written: Vec::new(),
            limit: 7,
        };

        let result = encoder.encode(&JfifHeader::default(), &[0u8; 32], &mut sink);
        assert!(matches!(result, Err(JfifError::IoError(_))));
        // Nothing is rolled back
        assert_eq!(sink.written.len(), 7);
    }

    #[test]
    fn test_encode_file_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        std::fs::write(&path, vec![0xAA; 100]).unwrap();

        let encoder = JfifEncoder::default();
        encoder.encode_file(&JfifHeader::default(), &[], &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, JfifHeader::default().to_bytes());
    }

    #[test]
    fn test_encode_file_atomic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atomic.jpg");

        let encoder = JfifEncoder::new(EncoderOptions::new().atomic(true));
        encoder.encode_file(&JfifHeader::default(), &[0xFF, 0xD9], &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[..HEADER_SIZE], &JfifHeader::default().to_bytes());
        assert_eq!(&written[HEADER_SIZE..], &[0xFF, 0xD9]);

        // Only the destination remains in the directory
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_output_mode_matches_plain() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.jpg");
        let atomic = dir.path().join("atomic.jpg");
        let header = JfifHeader::default();

        JfifEncoder::default().encode_file(&header, &[], &plain).unwrap();
        JfifEncoder::new(EncoderOptions::new().atomic(true))
            .encode_file(&header, &[], &atomic)
            .unwrap();

        assert_eq!(mode(&plain), mode(&atomic));
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_rewrite_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("existing.jpg");
        std::fs::write(&path, [0u8; 4]).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        JfifEncoder::new(EncoderOptions::new().atomic(true))
            .encode_file(&JfifHeader::default(), &[], &path)
            .unwrap();

        assert_eq!(mode(&path), 0o640);
        assert_eq!(std::fs::read(&path).unwrap(), JfifHeader::default().to_bytes());
    }

    #[test]
    fn test_atomic_failure_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be replaced by a file
        let path = dir.path().join("taken.jpg");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), b"keep").unwrap();

        let encoder = JfifEncoder::new(EncoderOptions::new().atomic(true));
        let result = encoder.encode_file(&JfifHeader::default(), &[0xFF, 0xD9], &path);
        assert!(matches!(result, Err(JfifError::IoError(_))));

        assert!(path.is_dir());
        assert_eq!(std::fs::read(path.join("keep")).unwrap(), b"keep");
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("taken.jpg")]);
    }

    #[test]
    fn test_encode_file_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.jpg");

        for atomic in [false, true] {
            let encoder = JfifEncoder::new(EncoderOptions::new().atomic(atomic));
            let result = encoder.encode_file(&JfifHeader::default(), &[], &path);
            assert!(matches!(result, Err(JfifError::IoError(_))));
        }
        assert!(!path.exists());
    }
}
