use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::{debug, error, info};
use thiserror::Error;

use super::chunk;
use super::SIGNATURE;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("invalid image dimensions {width}x{height}: both sides must be nonzero")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("scanline stream is {actual} bytes but {width}x{height} requires {expected}")]
    ScanlineLengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("Failed to compress image data")]
    CompressionFailed(#[from] io::Error),
}

/// Serializes a raw scanline stream into a complete PNG byte stream:
/// signature, IHDR, one IDAT, IEND. 8-bit truecolor RGB only, filter
/// type "none" on every row, no ancillary chunks.
///
/// `scanlines` must be exactly `height * (1 + width * 3)` bytes or the
/// declared geometry would not match the pixel data and decoders
/// reject the file. Output is deterministic for identical inputs.
pub fn encode(width: u32, height: u32, scanlines: &[u8]) -> Result<Vec<u8>, EncodingError> {
    info!("Starting encoding");

    if width == 0 || height == 0 {
        error!("Rejecting canvas with zero dimension: {}x{}", width, height);
        return Err(EncodingError::InvalidDimensions { width, height });
    }

    let expected = height as usize * (1 + width as usize * 3);
    if scanlines.len() != expected {
        error!(
            "Scanline stream of {} bytes does not fit {}x{} (expected {})",
            scanlines.len(),
            width,
            height,
            expected
        );
        return Err(EncodingError::ScanlineLengthMismatch {
            width,
            height,
            expected,
            actual: scanlines.len(),
        });
    }

    let mut encoded_data: Vec<u8> = Vec::new();

    // Step 1: Write signature
    encoded_data.extend_from_slice(&SIGNATURE);

    // Step 2: Write header chunk
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.push(8); // Bit depth
    ihdr.push(2); // Color type: truecolor RGB
    ihdr.push(0); // Compression method
    ihdr.push(0); // Filter method
    ihdr.push(0); // Interlace method
    encoded_data.extend_from_slice(&chunk::frame(chunk::IHDR, &ihdr));
    debug!("Header written:\nWidth: {}\nHeight: {}", width, height);

    // Step 3: Compress the scanlines into a single data chunk
    let mut compressor = ZlibEncoder::new(Vec::new(), Compression::best());
    compressor.write_all(scanlines)?;
    let compressed_data = compressor.finish()?;
    debug!(
        "Image data compressed successfully: {} -> {} bytes",
        scanlines.len(),
        compressed_data.len()
    );
    encoded_data.extend_from_slice(&chunk::frame(chunk::IDAT, &compressed_data));

    // Step 4: Write terminator chunk
    encoded_data.extend_from_slice(&chunk::frame(chunk::IEND, &[]));

    info!("Encoding process completed successfully");
    Ok(encoded_data)
}
