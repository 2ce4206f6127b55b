//! Gzip encoding of built output
//!
//! Gzip support is the optional `gzip` cargo feature. Builds without it
//! still accept `--gzip`; the run reports that compression is unavailable
//! and writes plain output.

/// Compression statistics for one output file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Size before encoding in bytes
    pub original_size: u64,
    /// Size after encoding in bytes
    pub compressed_size: u64,
}

impl CompressionStats {
    /// Calculate compression ratio as a percentage
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            (1.0 - (self.compressed_size as f64 / self.original_size as f64)) * 100.0
        }
    }

    /// Calculate bytes saved
    pub fn bytes_saved(&self) -> u64 {
        self.original_size.saturating_sub(self.compressed_size)
    }
}

/// Check if gzip support was compiled in
pub const fn is_gzip_available() -> bool {
    cfg!(feature = "gzip")
}

/// Gzip-encode `data` at best compression
#[cfg(feature = "gzip")]
pub fn gzip(data: &[u8]) -> std::io::Result<(Vec<u8>, CompressionStats)> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    let encoded = encoder.finish()?;

    let stats = CompressionStats {
        original_size: data.len() as u64,
        compressed_size: encoded.len() as u64,
    };
    Ok((encoded, stats))
}

/// Gzip-encode `data` at best compression
#[cfg(not(feature = "gzip"))]
pub fn gzip(_data: &[u8]) -> std::io::Result<(Vec<u8>, CompressionStats)> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "gzip support was not compiled in",
    ))
}
