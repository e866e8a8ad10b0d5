use crc32fast::Hasher;

pub const IHDR: [u8; 4] = *b"IHDR";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";

/// Frames one PNG chunk: big-endian payload length, four-byte type tag,
/// payload, then a big-endian CRC32 over the tag and payload (the length
/// is not covered by the checksum).
pub fn frame(tag: [u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::with_capacity(12 + payload.len());

    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(&tag);
    chunk.extend_from_slice(payload);

    let mut crc = Hasher::new();
    crc.update(&tag);
    crc.update(payload);
    chunk.extend_from_slice(&crc.finalize().to_be_bytes());

    chunk
}
