//! Физические масштабы задачи.
//!
//! Частота радиосигнала задаёт единицы длины и времени:
//! `lambda = c / f`, `t = 1 / f`.

use serde::Serialize;

/// Скорость света, м/с.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Секунд в юлианском году.
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;

/// Метров в астрономической единице.
pub const METRES_PER_AU: f64 = 149_597_870_700.0;

/// Частота сигнала, Гц.
pub const SIGNAL_FREQUENCY_HZ: f64 = 452.129_19e6;

/// Единица длины (длина волны сигнала), м.
pub const LENGTH_UNIT_M: f64 = 0.663_068_1;

/// Единица времени (период сигнала), с.
pub const TIME_UNIT_S: f64 = 2.211_757_2e-9;

/// Неизменяемый набор констант, передаётся в калькулятор явно.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalScales {
    /// Частота сигнала (Гц)
    pub frequency_hz: f64,
    /// Единица длины `l` (м)
    pub length_m: f64,
    /// Единица времени `t` (с)
    pub time_s: f64,
    /// Скорость света `c` (м/с)
    pub speed_of_light: f64,
    /// Секунд в году `yr`
    pub seconds_per_year: f64,
    /// Метров в а.е. `au`
    pub metres_per_au: f64,
}

impl PhysicalScales {
    /// Пересчитывает единицы длины и времени из частоты сигнала.
    pub fn from_frequency(frequency_hz: f64) -> Self {
        Self {
            frequency_hz,
            length_m: SPEED_OF_LIGHT / frequency_hz,
            time_s: 1.0 / frequency_hz,
            ..Self::default()
        }
    }
}

impl Default for PhysicalScales {
    fn default() -> Self {
        Self {
            frequency_hz: SIGNAL_FREQUENCY_HZ,
            length_m: LENGTH_UNIT_M,
            time_s: TIME_UNIT_S,
            speed_of_light: SPEED_OF_LIGHT,
            seconds_per_year: SECONDS_PER_YEAR,
            metres_per_au: METRES_PER_AU,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_literals_match_frequency() {
        let derived = PhysicalScales::from_frequency(SIGNAL_FREQUENCY_HZ);
        let literal = PhysicalScales::default();

        // Литералы округлены до 7-8 знаков
        assert_relative_eq!(derived.length_m, literal.length_m, max_relative = 1e-7);
        assert_relative_eq!(derived.time_s, literal.time_s, max_relative = 1e-7);
    }

    #[test]
    fn test_from_frequency_keeps_constants() {
        let s = PhysicalScales::from_frequency(1.0e9);

        assert_relative_eq!(s.length_m, 0.299_792_458);
        assert_relative_eq!(s.time_s, 1.0e-9);
        assert_eq!(s.seconds_per_year, SECONDS_PER_YEAR);
        assert_eq!(s.metres_per_au, METRES_PER_AU);
    }
}
