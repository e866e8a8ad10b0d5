pub mod constants;
pub mod painter;
pub mod png;

use log::*;
use std::io::Write;

pub use crate::painter::{paint, Fill, Rgb};
pub use crate::png::encode;

pub fn init_logging() {
    env_logger::Builder::new()
        .filter(Some("lib_png"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
