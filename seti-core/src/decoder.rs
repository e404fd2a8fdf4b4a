//! Извлечение чисел из первых двух строк картинок 3..=6.
//!
//! Числа записаны младшим разрядом слева, поэтому строка разворачивается
//! перед разбором как двоичное число (старший разряд первым).

use log::debug;
use num_bigint::BigUint;
use serde::ser::{Serialize, SerializeMap, Serializer};
use seti_types::{SetiError, SetiResult};

use crate::grid::ImageGrid;

/// Именованные числа сообщения и их координаты.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarSlot {
    /// Опорный масштаб (картинка 3, строка 0)
    S1,
    /// Время в пути сигнала (картинка 3, строка 1)
    S2,
    /// Рост (картинка 4, строка 0)
    A1,
    /// Продолжительность жизни (картинка 4, строка 1)
    A2,
    /// Размер телескопа (картинка 5, строка 0)
    T1,
    /// Длительность передачи (картинка 5, строка 1)
    T2,
    /// Расстояние планета-звезда (картинка 6, строка 0)
    P1,
    /// Возраст системы (картинка 6, строка 1)
    P2,
}

impl ScalarSlot {
    pub const ALL: [ScalarSlot; 8] = [
        ScalarSlot::S1,
        ScalarSlot::S2,
        ScalarSlot::A1,
        ScalarSlot::A2,
        ScalarSlot::T1,
        ScalarSlot::T2,
        ScalarSlot::P1,
        ScalarSlot::P2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScalarSlot::S1 => "s1",
            ScalarSlot::S2 => "s2",
            ScalarSlot::A1 => "a1",
            ScalarSlot::A2 => "a2",
            ScalarSlot::T1 => "t1",
            ScalarSlot::T2 => "t2",
            ScalarSlot::P1 => "p1",
            ScalarSlot::P2 => "p2",
        }
    }

    pub fn picture(&self) -> usize {
        3 + self.index() / 2
    }

    pub fn row(&self) -> usize {
        self.index() % 2
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Восемь декодированных чисел, индексируются [`ScalarSlot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedScalars {
    values: [BigUint; 8],
}

impl DecodedScalars {
    pub fn get(
        &self,
        slot: ScalarSlot,
    ) -> &BigUint {
        &self.values[slot as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScalarSlot, &BigUint)> {
        ScalarSlot::ALL.into_iter().zip(self.values.iter())
    }
}

impl Serialize for DecodedScalars {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        // До 2^359 - в JSON только строкой
        let mut map = serializer.serialize_map(Some(self.values.len()))?;

        for (slot, value) in self.iter() {
            map.serialize_entry(slot.name(), &value.to_str_radix(10))?;
        }

        map.end()
    }
}

/// Разворачивает строку бит и разбирает её как двоичное число.
///
/// Элемент 0 строки становится младшим разрядом.
pub fn parse_reversed(row: &[u8]) -> SetiResult<BigUint> {
    let digits: Vec<u8> = row.iter().rev().copied().collect();

    if digits.is_empty() {
        return Ok(BigUint::default());
    }

    BigUint::from_radix_be(&digits, 2).ok_or_else(|| {
        let (col, &bad) = row
            .iter()
            .enumerate()
            .find(|(_, &b)| b > 1)
            .unwrap_or((0, &0));

        SetiError::InvalidDigit {
            line: 1,
            column: col + 1,
            found: char::from(b'0'.saturating_add(bad)),
        }
    })
}

/// Декодирует одну строку картинки (группа строк 0).
pub fn decode_row(
    grid: &ImageGrid,
    picture: usize,
    row: usize,
) -> SetiResult<BigUint> {
    let bits = grid
        .row(picture, 0, row)
        .ok_or(SetiError::RowOutOfRange { picture, row })?;

    parse_reversed(bits)
}

/// Декодирует все восемь чисел.
pub fn decode_scalars(grid: &ImageGrid) -> SetiResult<DecodedScalars> {
    let mut values: [BigUint; 8] = Default::default();

    for slot in ScalarSlot::ALL {
        let value = decode_row(grid, slot.picture(), slot.row())?;

        debug!(
            "{} = picture {} row {}: {} significant bits",
            slot.name(),
            slot.picture(),
            slot.row(),
            value.bits()
        );

        values[slot as usize] = value;
    }

    Ok(DecodedScalars { values })
}
