#[cfg(feature = "checksum")]
use std::{fs, io, path};

#[cfg(feature = "checksum")]
use sha1::{Digest, Sha1};

/// How much work a list should do when materializing a spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DetailLevel {
    /// Only what is already in memory, typically the identity
    InstantMetadata,
    /// Metadata that can be read without decoding anything expensive
    FastMetadata,
    /// All metadata, but no binary data
    #[default]
    FullMetadata,
    /// Everything, including binary data arrays
    FullData,
}

impl DetailLevel {
    /// Whether a spectrum fetched at this level must carry its binary data
    pub const fn needs_binary_data(&self) -> bool {
        matches!(self, Self::FullData)
    }
}

#[cfg(feature = "checksum")]
fn hex_digest(context: Sha1) -> String {
    base16ct::lower::encode_string(&context.finalize())
}

/// Computes SHA-1 digests as lowercase hexadecimal strings, either in one shot or by
/// accumulating updates
#[cfg(feature = "checksum")]
#[derive(Debug, Clone, Default)]
pub struct SHA1Calculator {
    context: Sha1,
}

#[cfg(feature = "checksum")]
impl SHA1Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, bytes: &[u8]) {
        self.context.update(bytes);
    }

    /// The digest of everything seen so far, without ending the computation
    pub fn hash_projected(&self) -> String {
        hex_digest(self.context.clone())
    }

    pub fn finish(self) -> String {
        hex_digest(self.context)
    }

    pub fn hash<B: AsRef<[u8]>>(bytes: B) -> String {
        let mut this = Self::new();
        this.update(bytes.as_ref());
        this.finish()
    }

    pub fn hash_stream<R: io::Read>(mut stream: R) -> io::Result<String> {
        let mut this = Self::new();
        let mut buffer = [0u8; 8192];
        loop {
            let n = stream.read(&mut buffer)?;
            if n == 0 {
                break;
            }
            this.update(&buffer[..n]);
        }
        Ok(this.finish())
    }

    pub fn hash_file<P: AsRef<path::Path>>(path: P) -> io::Result<String> {
        let handle = io::BufReader::new(fs::File::open(path)?);
        Self::hash_stream(handle)
    }
}

/// A stream wrapper that keeps a running SHA-1 checksum of every byte that passes through
/// it, read or written
#[cfg(feature = "checksum")]
#[derive(Debug, Clone)]
pub struct SHA1HashingStream<T> {
    pub stream: T,
    context: Sha1,
}

#[cfg(feature = "checksum")]
impl<T> SHA1HashingStream<T> {
    pub fn new(stream: T) -> SHA1HashingStream<T> {
        Self {
            stream,
            context: Sha1::new(),
        }
    }

    pub fn hash_so_far(&self) -> String {
        hex_digest(self.context.clone())
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.stream
    }

    pub fn into_inner(self) -> T {
        self.stream
    }
}

#[cfg(feature = "checksum")]
impl<T: io::Write> io::Write for SHA1HashingStream<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.stream.write(buf)?;
        self.context.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

#[cfg(feature = "checksum")]
impl<T: io::Read> io::Read for SHA1HashingStream<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.stream.read(buf)?;
        self.context.update(&buf[..n]);
        Ok(n)
    }
}

#[cfg(all(test, feature = "checksum"))]
mod test {
    use super::*;
    use std::io::prelude::*;

    const TEXT: &str = "The quick brown fox jumps over the lazy dog";
    const TEXT_HASH: &str = "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12";
    const TEXT_TWICE_HASH: &str = "86c842aa0249527aad022bab2f8a9b4d77b82b12";

    #[test]
    fn test_hash_buffer() {
        assert_eq!(SHA1Calculator::hash(TEXT), TEXT_HASH);
        assert_eq!(SHA1Calculator::hash(TEXT.repeat(2)), TEXT_TWICE_HASH);
        assert_eq!(
            SHA1Calculator::hash(b""),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn test_projected() {
        let mut calc = SHA1Calculator::new();
        calc.update(TEXT.as_bytes());
        assert_eq!(calc.hash_projected(), TEXT_HASH);
        calc.update(TEXT.as_bytes());
        assert_eq!(calc.hash_projected(), TEXT_TWICE_HASH);
        assert_eq!(calc.finish(), TEXT_TWICE_HASH);
    }

    #[test]
    fn test_write_stream_matches_buffer() -> io::Result<()> {
        let mut stream = SHA1HashingStream::new(Vec::new());
        stream.write_all(TEXT.as_bytes())?;
        assert_eq!(stream.hash_so_far(), TEXT_HASH);
        for chunk in TEXT.as_bytes().chunks(5) {
            stream.write_all(chunk)?;
        }
        assert_eq!(stream.hash_so_far(), TEXT_TWICE_HASH);
        assert_eq!(stream.into_inner(), TEXT.repeat(2).into_bytes());
        Ok(())
    }

    #[test]
    fn test_read_stream_matches_buffer() -> io::Result<()> {
        let data = TEXT.repeat(2);
        let mut stream = SHA1HashingStream::new(io::Cursor::new(data.as_bytes()));
        let mut sink = Vec::new();
        stream.read_to_end(&mut sink)?;
        assert_eq!(stream.hash_so_far(), SHA1Calculator::hash(&data));
        assert_eq!(SHA1Calculator::hash_stream(data.as_bytes())?, TEXT_TWICE_HASH);
        Ok(())
    }

    #[test]
    fn test_hash_file() -> io::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(TEXT.repeat(2).as_bytes())?;
        file.flush()?;
        assert_eq!(SHA1Calculator::hash_file(file.path())?, TEXT_TWICE_HASH);
        Ok(())
    }
}
