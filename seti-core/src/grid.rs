use seti_types::{GridCoord, GridShape, SetiResult, MESSAGE_SHAPE};

use crate::{bitstream::BitStream, config::LengthPolicy};

/// Сообщение, разложенное в сетку `7 x 1 x 757 x 359`.
///
/// Хранит ровно [`seti_types::MESSAGE_BITS`] бит в исходном порядке;
/// индексация идёт через [`GridShape`] (row-major, см. `seti_types::geometry`).
/// Строка картинки - непрерывный срез потока.
#[derive(Debug, Clone)]
pub struct ImageGrid {
    shape: GridShape,
    bits: Vec<u8>,
    /// Сколько бит отброшено после конца сообщения
    trailing_bits: usize,
}

impl ImageGrid {
    /// Проверяет длину потока и раскладывает его в сетку.
    pub fn from_bitstream(
        stream: BitStream,
        policy: LengthPolicy,
    ) -> SetiResult<Self> {
        let trailing_bits = stream.validate(policy)?;

        Ok(Self {
            shape: MESSAGE_SHAPE,
            bits: stream.into_message_bits(),
            trailing_bits,
        })
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn trailing_bits(&self) -> usize {
        self.trailing_bits
    }

    /// Бит по координате.
    pub fn get(
        &self,
        coord: GridCoord,
    ) -> Option<u8> {
        self.shape.flat_index(coord).map(|i| self.bits[i])
    }

    /// Одна картинка: `rows * cols` бит, строки подряд.
    pub fn picture(
        &self,
        picture: usize,
        row_group: usize,
    ) -> Option<&[u8]> {
        let start = self.shape.flat_index(GridCoord {
            picture,
            row_group,
            row: 0,
            col: 0,
        })?;

        Some(&self.bits[start..start + self.shape.picture_len()])
    }

    /// Одна строка картинки длиной `cols`.
    pub fn row(
        &self,
        picture: usize,
        row_group: usize,
        row: usize,
    ) -> Option<&[u8]> {
        let start = self.shape.flat_index(GridCoord {
            picture,
            row_group,
            row,
            col: 0,
        })?;

        Some(&self.bits[start..start + self.shape.cols])
    }

    /// Обход в порядке row-major: `(координата, бит)`.
    pub fn cells(&self) -> impl Iterator<Item = (GridCoord, u8)> + '_ {
        (0..self.shape.len())
            .filter_map(|i| self.shape.coords(i))
            .filter_map(|c| self.get(c).map(|b| (c, b)))
    }

    /// Разворачивает сетку обратно в плоскую последовательность.
    pub fn flatten(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.shape.len()];

        for (coord, bit) in self.cells() {
            if let Some(i) = self.shape.flat_index(coord) {
                out[i] = bit;
            }
        }

        out
    }

    /// Количество единиц в картинке (для логов).
    pub fn lit_pixels(
        &self,
        picture: usize,
        row_group: usize,
    ) -> usize {
        self.picture(picture, row_group)
            .map(|p| p.iter().filter(|&&b| b == 1).count())
            .unwrap_or(0)
    }
}
