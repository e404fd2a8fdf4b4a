use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
};

use log::{debug, warn};
use seti_types::{SetiError, SetiResult, MESSAGE_BITS};

use crate::config::LengthPolicy;

/// Плоская последовательность бит, прочитанная из ASCII-файла.
#[derive(Debug, Clone)]
pub struct BitStream {
    name: String,
    bits: Vec<u8>,
}

impl BitStream {
    /// Читает файл сообщения целиком.
    ///
    /// Отсутствующий файл даёт [`SetiError::MessageNotFound`], остальные
    /// ошибки открытия и чтения - [`SetiError::Io`].
    pub fn load(path: &Path) -> SetiResult<Self> {
        let name = display_name(path);

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("open {path:?}: {e}");
                return Err(SetiError::not_found(name));
            }
            Err(e) => return Err(SetiError::Io(e)),
        };

        let stream = Self::from_reader(BufReader::new(file), name)?;
        debug!("Loaded {} bits from {:?}", stream.len(), path);

        Ok(stream)
    }

    /// Читает цифры `0`/`1` из любого `BufRead`.
    ///
    /// Переводы строк и прочие ASCII-пробелы пропускаются, любой другой
    /// символ - [`SetiError::InvalidDigit`]. Строки и столбцы в ошибке
    /// считаются с единицы.
    pub fn from_reader<R: BufRead>(
        reader: R,
        name: impl Into<String>,
    ) -> SetiResult<Self> {
        let mut bits = Vec::with_capacity(MESSAGE_BITS);

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;

            for (col_idx, ch) in line.chars().enumerate() {
                match ch {
                    '0' | '1' => bits.push(ch as u8 - b'0'),
                    c if c.is_ascii_whitespace() => {}
                    c => {
                        return Err(SetiError::InvalidDigit {
                            line: line_idx + 1,
                            column: col_idx + 1,
                            found: c,
                        })
                    }
                }
            }
        }

        Ok(Self {
            name: name.into(),
            bits,
        })
    }

    /// Оборачивает готовый вектор бит (значения 0/1).
    pub fn from_bits(
        bits: Vec<u8>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            bits,
        }
    }

    /// Имя источника для сообщений об ошибках.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Проверяет длину. Возвращает количество лишних бит в хвосте.
    ///
    /// Короче [`MESSAGE_BITS`] - всегда [`SetiError::Incomplete`]. Длиннее -
    /// зависит от `policy`: хвост либо игнорируется, либо
    /// [`SetiError::TrailingBits`].
    pub fn validate(
        &self,
        policy: LengthPolicy,
    ) -> SetiResult<usize> {
        if self.bits.get(MESSAGE_BITS - 1).is_none() {
            return Err(SetiError::Incomplete {
                name: self.name.clone(),
                found: self.bits.len(),
                expected: MESSAGE_BITS,
            });
        }

        let extra = self.bits.len() - MESSAGE_BITS;

        if extra > 0 {
            match policy {
                LengthPolicy::Truncate => {
                    warn!("{}: ignoring {extra} trailing bits", self.name)
                }
                LengthPolicy::Exact => return Err(SetiError::TrailingBits { extra }),
            }
        }

        Ok(extra)
    }

    /// Отдаёт первые [`MESSAGE_BITS`] бит, хвост отбрасывается.
    pub(crate) fn into_message_bits(mut self) -> Vec<u8> {
        self.bits.truncate(MESSAGE_BITS);
        self.bits
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
