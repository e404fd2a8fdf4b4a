//! Декодер сообщения SETI
//!
//! Сообщение - 1 902 341 ASCII-цифр `0`/`1`, которые раскладываются в семь
//! картинок 757x359. Первые две строки картинок 3..=6 содержат восемь чисел,
//! из которых получаются физические величины.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use seti_core::{DecodePipeline, DecoderConfig, PngSink, MontageSink};
//!
//! let pipeline = DecodePipeline::new(DecoderConfig::default());
//! let mut sinks: Vec<Box<dyn MontageSink>> = vec![Box::new(PngSink::new("montage.png"))];
//! let report = pipeline.run(&mut sinks)?;
//! println!("{report}");
//! # Ok::<(), seti_types::SetiError>(())
//! ```

pub mod bitstream;
pub mod calculator;
pub mod config;
pub mod decoder;
pub mod grid;
pub mod pipeline;
pub mod render;
pub mod synth;

pub use bitstream::*;
pub use calculator::*;
pub use config::*;
pub use decoder::*;
pub use grid::*;
pub use pipeline::*;
pub use render::*;
pub use synth::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(seti_types::MESSAGE_BITS, 1_902_341);
        assert_eq!(DEFAULT_MESSAGE_FILE, "SETI_message.txt");
        assert_eq!(SIGNIFICANT_DIGITS, 5);
    }
}
