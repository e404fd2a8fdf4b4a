use thiserror::Error;

/// Результат для операций декодера.
pub type SetiResult<T> = std::result::Result<T, SetiError>;

/// Типы ошибок декодирования сообщения.
#[derive(Debug, Error)]
pub enum SetiError {
    /// Файл сообщения отсутствует
    #[error("Couldn't find {name}, is it in the same directory as the script?")]
    MessageNotFound { name: String },

    /// В файле меньше бит, чем требует геометрия сообщения
    #[error("{name} isn't complete...")]
    Incomplete {
        name: String,
        found: usize,
        expected: usize,
    },

    /// Лишние биты после конца сообщения (только в строгом режиме)
    #[error("Message has {extra} trailing bits beyond the expected length")]
    TrailingBits { extra: usize },

    /// Символ, который не является двоичной цифрой
    #[error("Invalid digit {found:?} at line {line}, column {column}")]
    InvalidDigit {
        line: usize,
        column: usize,
        found: char,
    },

    /// Координата строки вне сетки
    #[error("Row {row} of picture {picture} is outside the message grid")]
    RowOutOfRange { picture: usize, row: usize },

    /// Число не помещается в строку картинки
    #[error("Value needs {bits} bits, a picture row holds {width}")]
    ValueTooWide { bits: u64, width: usize },

    /// Опорный масштаб s1 равен нулю, отношения не определены
    #[error("Reference scale s1 is zero, derived quantities are undefined")]
    ZeroReferenceScale,

    /// Ошибка построения или вывода изображения
    #[error("Render error: {0}")]
    Render(String),

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SetiError {
    /// Удобные конструкторы
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Self::MessageNotFound { name: name.into() }
    }

    pub fn render<S: Into<String>>(s: S) -> Self {
        Self::Render(s.into())
    }

    /// Ошибка одной из двух проверок входа (файл и длина).
    pub fn is_input_gate(&self) -> bool {
        matches!(
            self,
            SetiError::MessageNotFound { .. } | SetiError::Incomplete { .. }
        )
    }
}
