use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lib_png::constants::{icon_file_name, ACCENT, BACKGROUND, ICON_SIZES, OUTPUT_DIR};
use lib_png::painter::PaintError;
use lib_png::png::encoder::EncodingError;
use lib_png::{encode, paint, Fill};
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to create output directory {}: {}", path.display(), source)]
    CreateDirFailed { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {}", path.display(), source)]
    WriteFailed { path: PathBuf, source: io::Error },

    #[error("Painting failed")]
    PaintFailed(#[from] PaintError),

    #[error("Encoding failed")]
    EncodingFailed(#[from] EncodingError),
}

/// Generates the full icon set into [`OUTPUT_DIR`], one square glyph
/// icon per manifest size. The first failure aborts the remaining work.
pub fn run() -> Result<(), GenerateError> {
    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir).map_err(|source| GenerateError::CreateDirFailed {
        path: out_dir.to_path_buf(),
        source,
    })?;

    println!("Creating extension icons...");

    for &size in &ICON_SIZES {
        let path = out_dir.join(icon_file_name(size));

        let scanlines = paint(
            size,
            size,
            Fill::Glyph {
                background: BACKGROUND,
                accent: ACCENT,
            },
        )?;
        let encoded_data = encode(size, size, &scanlines)?;
        save_icon(&path, &encoded_data).map_err(|source| GenerateError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        println!("Created {} ({}x{})", path.display(), size, size);
    }

    println!("Icons created successfully");
    Ok(())
}

/// Whole-file truncate-and-write; the handle closes on every exit path
/// when it drops at the end of this scope.
fn save_icon(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;

    info!("File saved successfully to {}", path.display());
    Ok(())
}
