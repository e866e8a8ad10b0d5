use std::io::Read;

use flate2::read::ZlibDecoder;
use lib_png::constants::{ACCENT, BACKGROUND};
use lib_png::png::{chunk, SIGNATURE};
use lib_png::{Fill, Rgb};

/// The fill the production icons use.
pub fn glyph() -> Fill {
    Fill::Glyph {
        background: BACKGROUND,
        accent: ACCENT,
    }
}

/// (tag, payload) pairs for every chunk after the signature.
pub fn chunks(png: &[u8]) -> Vec<([u8; 4], Vec<u8>)> {
    assert!(png.starts_with(&SIGNATURE), "missing PNG signature");

    let mut parsed = Vec::new();
    let mut cursor = SIGNATURE.len();
    while cursor < png.len() {
        let length = u32::from_be_bytes(png[cursor..cursor + 4].try_into().unwrap()) as usize;
        let tag: [u8; 4] = png[cursor + 4..cursor + 8].try_into().unwrap();
        let payload = png[cursor + 8..cursor + 8 + length].to_vec();
        parsed.push((tag, payload));
        cursor += 12 + length;
    }
    parsed
}

/// Inflates the image-data payload back into the raw scanline stream.
pub fn inflate_idat(png: &[u8]) -> Vec<u8> {
    let (_, payload) = chunks(png)
        .into_iter()
        .find(|&(tag, _)| tag == chunk::IDAT)
        .expect("no IDAT chunk");

    let mut raw = Vec::new();
    ZlibDecoder::new(payload.as_slice())
        .read_to_end(&mut raw)
        .expect("IDAT payload should inflate");
    raw
}

/// Splits a raw scanline stream into rows of one filter byte plus
/// `width` RGB triples.
pub fn split_rows(raw: &[u8], width: u32) -> Vec<&[u8]> {
    let stride = 1 + width as usize * 3;
    assert_eq!(raw.len() % stride, 0, "stream is not a whole number of rows");
    raw.chunks(stride).collect()
}

/// Indices of rows containing at least one pixel of the given color.
pub fn rows_containing(raw: &[u8], width: u32, color: Rgb) -> Vec<usize> {
    split_rows(raw, width)
        .into_iter()
        .enumerate()
        .filter(|&(_, row)| row[1..].chunks(3).any(|pixel| pixel == color))
        .map(|(y, _)| y)
        .collect()
}

/// Collapses sorted row indices into contiguous (first, last) runs.
pub fn contiguous_runs(rows: &[usize]) -> Vec<(usize, usize)> {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    for &y in rows {
        match runs.last_mut() {
            Some((_, last)) if *last + 1 == y => *last = y,
            _ => runs.push((y, y)),
        }
    }
    runs
}
