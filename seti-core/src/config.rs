use std::path::PathBuf;

use seti_types::PhysicalScales;

/// Имя файла сообщения по умолчанию.
pub const DEFAULT_MESSAGE_FILE: &str = "SETI_message.txt";

/// Что делать с битами после конца сообщения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Лишний хвост отбрасывается (с предупреждением в логе).
    #[default]
    Truncate,
    /// Длина должна совпадать точно, хвост - ошибка.
    Exact,
}

/// Наибольший допустимый зазор между картинками, пиксели.
pub const MAX_GAP_PX: u32 = 256;

/// Параметры сборки монтажа картинок.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Зазор между картинками (пиксели, не больше [`MAX_GAP_PX`])
    pub gap_px: u32,
    /// Яркость зазора (0 - чёрный, 255 - белый)
    pub gap_luma: u8,
}

/// Полная конфигурация запуска декодера.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Путь к файлу сообщения
    pub input_path: PathBuf,
    /// Политика длины входа
    pub length_policy: LengthPolicy,
    /// Физические константы для калькулятора
    pub scales: PhysicalScales,
    /// Параметры рендера
    pub render: RenderOptions,
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для LengthPolicy, RenderOptions, DecoderConfig
////////////////////////////////////////////////////////////////////////////////

impl std::fmt::Display for LengthPolicy {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            LengthPolicy::Truncate => write!(f, "truncate"),
            LengthPolicy::Exact => write!(f, "exact"),
        }
    }
}

impl std::str::FromStr for LengthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "truncate" | "ignore" => Ok(LengthPolicy::Truncate),
            "exact" | "strict" => Ok(LengthPolicy::Exact),
            _ => Err(format!("Unknown length policy: '{s}'. Use: truncate, exact")),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            gap_px: 8,
            gap_luma: 128,
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_MESSAGE_FILE),
            length_policy: LengthPolicy::Truncate,
            scales: PhysicalScales::default(),
            render: RenderOptions::default(),
        }
    }
}

/// Парсит строку частоты в герцы.
///
/// Поддерживает суффиксы: `GHz`, `MHz`, `kHz`, `Hz` (регистронезависимо).
/// Дробные значения допустимы: частота сигнала задана с точностью до долей Гц.
///
/// # Примеры
/// ```
/// use seti_core::config::parse_freq_hz;
/// assert_eq!(parse_freq_hz("452MHz").unwrap(), 452_000_000.0);
/// assert_eq!(parse_freq_hz("1.5GHz").unwrap(), 1_500_000_000.0);
/// assert_eq!(parse_freq_hz("2000000").unwrap(), 2_000_000.0);
/// ```
pub fn parse_freq_hz(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let lower = s.to_lowercase();

    let (num_str, mult) = if let Some(v) = lower.strip_suffix("ghz") {
        (v.trim(), 1_000_000_000_f64)
    } else if let Some(v) = lower.strip_suffix("mhz") {
        (v.trim(), 1_000_000_f64)
    } else if let Some(v) = lower.strip_suffix("khz") {
        (v.trim(), 1_000_f64)
    } else if let Some(v) = lower.strip_suffix("hz") {
        (v.trim(), 1_f64)
    } else {
        (lower.as_str(), 1_f64)
    };

    let n: f64 = num_str
        .parse()
        .map_err(|e| format!("Invalid frequency value '{num_str}': {e}"))?;

    if !n.is_finite() || n <= 0.0 {
        return Err(format!("Frequency must be positive, got '{s}'"));
    }

    Ok(n * mult)
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
