//! Построитель синтетических сообщений для тестов, бенчмарков и примеров.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use num_bigint::BigUint;
use seti_types::{GridCoord, SetiError, SetiResult, COLS, MESSAGE_BITS, MESSAGE_SHAPE, ROWS};

use crate::decoder::ScalarSlot;

/// Сообщение в памяти: все нули, пока что-нибудь не нарисовано.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    bits: Vec<u8>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            bits: vec![0; MESSAGE_BITS],
        }
    }

    /// Записывает число в строку картинки младшим разрядом слева
    /// (обратное к [`crate::decoder::parse_reversed`]).
    pub fn set_row_value(
        &mut self,
        picture: usize,
        row: usize,
        value: &BigUint,
    ) -> SetiResult<&mut Self> {
        if value.bits() > COLS as u64 {
            return Err(SetiError::ValueTooWide {
                bits: value.bits(),
                width: COLS,
            });
        }

        let start = MESSAGE_SHAPE
            .flat_index(GridCoord {
                picture,
                row_group: 0,
                row,
                col: 0,
            })
            .ok_or(SetiError::RowOutOfRange { picture, row })?;

        let row_bits = &mut self.bits[start..start + COLS];
        row_bits.fill(0);

        // to_radix_le(2): цифра i - разряд 2^i
        for (col, digit) in value.to_radix_le(2).into_iter().enumerate() {
            row_bits[col] = digit;
        }

        Ok(self)
    }

    /// Записывает одно из восьми именованных чисел.
    pub fn set_scalar(
        &mut self,
        slot: ScalarSlot,
        value: &BigUint,
    ) -> SetiResult<&mut Self> {
        self.set_row_value(slot.picture(), slot.row(), value)
    }

    /// Устанавливает пиксель картинки.
    pub fn set_pixel(
        &mut self,
        picture: usize,
        row: usize,
        col: usize,
        bit: bool,
    ) -> SetiResult<&mut Self> {
        let i = MESSAGE_SHAPE
            .flat_index(GridCoord {
                picture,
                row_group: 0,
                row,
                col,
            })
            .ok_or(SetiError::RowOutOfRange { picture, row })?;

        self.bits[i] = bit as u8;

        Ok(self)
    }

    /// Рамка по краю картинки (ориентир при просмотре).
    pub fn frame_picture(
        &mut self,
        picture: usize,
    ) -> SetiResult<&mut Self> {
        for col in 0..COLS {
            self.set_pixel(picture, 0, col, true)?;
            self.set_pixel(picture, ROWS - 1, col, true)?;
        }

        for row in 0..ROWS {
            self.set_pixel(picture, row, 0, true)?;
            self.set_pixel(picture, row, COLS - 1, true)?;
        }

        Ok(self)
    }

    pub fn as_bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }

    /// Пишет сообщение ASCII-цифрами. `line_width` разбивает на строки.
    pub fn write_ascii<W: Write>(
        &self,
        mut w: W,
        line_width: Option<usize>,
    ) -> std::io::Result<()> {
        let ascii: Vec<u8> = self.bits.iter().map(|&b| b'0' + b).collect();

        match line_width {
            Some(width) if width > 0 => {
                for line in ascii.chunks(width) {
                    w.write_all(line)?;
                    w.write_all(b"\n")?;
                }
            }
            _ => {
                w.write_all(&ascii)?;
                w.write_all(b"\n")?;
            }
        }

        w.flush()
    }

    /// Пишет сообщение в файл.
    pub fn write_file(
        &self,
        path: &Path,
        line_width: Option<usize>,
    ) -> SetiResult<()> {
        let file = File::create(path)?;
        self.write_ascii(BufWriter::new(file), line_width)?;

        Ok(())
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
