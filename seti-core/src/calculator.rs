//! Пересчёт декодированных чисел в физические величины.
//!
//! Масштаб задаёт `s1`: каждое число делится на него и умножается на
//! единицу длины `l` или единицу времени `t` сигнала. Первое число в
//! картинке несёт длину, второе - время.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::Serialize;
use seti_types::{PhysicalScales, SetiError, SetiResult};

use crate::decoder::{DecodedScalars, ScalarSlot};

/// Значащих цифр при выводе.
pub const SIGNIFICANT_DIGITS: usize = 5;

/// Размерность величины и способ перевода из отношения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// `ratio * l`, метры
    Length,
    /// `ratio * t / yr`, годы
    Duration,
    /// `ratio * l / au`, астрономические единицы
    OrbitalDistance,
}

/// Выводимые величины в порядке печати.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    SignalTravelTime,
    AlienHeight,
    AlienLifetime,
    TelescopeSize,
    CommunicationTime,
    PlanetStarDistance,
    SystemAge,
}

/// Вычисленная величина.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedQuantity {
    pub quantity: Quantity,
    /// Отношение `numerator / s1`
    pub ratio: f64,
    /// Значение в единицах [`Quantity::unit`]
    pub value: f64,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl Dimension {
    pub fn apply(
        &self,
        ratio: f64,
        scales: &PhysicalScales,
    ) -> f64 {
        match self {
            Dimension::Length => ratio * scales.length_m,
            Dimension::Duration => ratio * scales.time_s / scales.seconds_per_year,
            Dimension::OrbitalDistance => ratio * scales.length_m / scales.metres_per_au,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Dimension::Length => "m",
            Dimension::Duration => "yrs",
            Dimension::OrbitalDistance => "AU",
        }
    }
}

impl Quantity {
    pub const ALL: [Quantity; 7] = [
        Quantity::SignalTravelTime,
        Quantity::AlienHeight,
        Quantity::AlienLifetime,
        Quantity::TelescopeSize,
        Quantity::CommunicationTime,
        Quantity::PlanetStarDistance,
        Quantity::SystemAge,
    ];

    /// Подпись в консольном выводе.
    pub fn label(&self) -> &'static str {
        match self {
            Quantity::SignalTravelTime => "time for signal to reach earth",
            Quantity::AlienHeight => "alien height",
            Quantity::AlienLifetime => "alien lifetime",
            Quantity::TelescopeSize => "telescope size",
            Quantity::CommunicationTime => "time they've been communicating",
            Quantity::PlanetStarDistance => "planet distance from star",
            Quantity::SystemAge => "age of their stellar system",
        }
    }

    /// Число-числитель отношения.
    pub fn numerator(&self) -> ScalarSlot {
        match self {
            Quantity::SignalTravelTime => ScalarSlot::S2,
            Quantity::AlienHeight => ScalarSlot::A1,
            Quantity::AlienLifetime => ScalarSlot::A2,
            Quantity::TelescopeSize => ScalarSlot::T1,
            Quantity::CommunicationTime => ScalarSlot::T2,
            Quantity::PlanetStarDistance => ScalarSlot::P1,
            Quantity::SystemAge => ScalarSlot::P2,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Quantity::AlienHeight | Quantity::TelescopeSize => Dimension::Length,
            Quantity::PlanetStarDistance => Dimension::OrbitalDistance,
            _ => Dimension::Duration,
        }
    }

    pub fn unit(&self) -> &'static str {
        self.dimension().unit()
    }
}

impl DerivedQuantity {
    /// Значение, округлённое до [`SIGNIFICANT_DIGITS`] значащих цифр.
    pub fn formatted(&self) -> String {
        format_significant(self.value, SIGNIFICANT_DIGITS)
    }
}

impl std::fmt::Display for DerivedQuantity {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {}",
            self.quantity.label(),
            self.formatted(),
            self.quantity.unit()
        )
    }
}

/// Вычисляет все семь величин.
///
/// `s1 == 0` - [`SetiError::ZeroReferenceScale`], а не бесконечности в выводе.
pub fn calculate(
    scalars: &DecodedScalars,
    scales: &PhysicalScales,
) -> SetiResult<Vec<DerivedQuantity>> {
    let s1 = scalars.get(ScalarSlot::S1);

    if s1.is_zero() {
        return Err(SetiError::ZeroReferenceScale);
    }

    let s1 = big_to_f64(s1);

    Ok(Quantity::ALL
        .iter()
        .map(|&quantity| {
            let ratio = big_to_f64(scalars.get(quantity.numerator())) / s1;

            DerivedQuantity {
                quantity,
                ratio,
                value: quantity.dimension().apply(ratio, scales),
            }
        })
        .collect())
}

fn big_to_f64(v: &BigUint) -> f64 {
    // 359 бит < 2^1024, переполнения нет
    v.to_f64().unwrap_or(f64::INFINITY)
}

/// Форматирует число с `digits` значащими цифрами по правилам `%g`.
///
/// Экспоненциальная запись при десятичном порядке `< -4` или `>= digits`,
/// хвостовые нули отбрасываются: `3.5043e-17`, `1.2346e+05`, `50`, `0.00012346`.
pub fn format_significant(
    value: f64,
    digits: usize,
) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);
    let sci = format!("{:.*e}", digits - 1, value);

    // Порядок берём после округления: 99999.9 -> 1.0000e5
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use seti_types::MESSAGE_BITS;

    use super::*;
    use crate::{
        bitstream::BitStream, config::LengthPolicy, decoder::decode_scalars, grid::ImageGrid,
        synth::MessageBuilder,
    };

    fn scalars(values: &[(ScalarSlot, u64)]) -> DecodedScalars {
        let mut builder = MessageBuilder::new();

        for &(slot, v) in values {
            builder.set_scalar(slot, &BigUint::from(v)).unwrap();
        }

        let grid = ImageGrid::from_bitstream(
            BitStream::from_bits(builder.into_bits(), "t"),
            LengthPolicy::Exact,
        )
        .unwrap();

        decode_scalars(&grid).unwrap()
    }

    #[test]
    fn test_signal_travel_time_reference() {
        let s = scalars(&[(ScalarSlot::S1, 100), (ScalarSlot::S2, 50)]);
        let q = calculate(&s, &PhysicalScales::default()).unwrap();

        // 0.5 * 2.2117572e-9 / 31557600 = 3.50431781884554e-17
        assert_eq!(q[0].quantity, Quantity::SignalTravelTime);
        assert_relative_eq!(q[0].value, 3.504_317_818_845_54e-17, max_relative = 1e-12);
        assert_eq!(q[0].formatted(), "3.5043e-17");
        assert_eq!(q[0].to_string(), "time for signal to reach earth: 3.5043e-17 yrs");
    }

    #[test]
    fn test_length_and_orbital_units() {
        let s = scalars(&[
            (ScalarSlot::S1, 2),
            (ScalarSlot::A1, 14),
            (ScalarSlot::P1, 4),
        ]);
        let scales = PhysicalScales::default();
        let q = calculate(&s, &scales).unwrap();

        let height = q[1];
        assert_eq!(height.quantity, Quantity::AlienHeight);
        assert_relative_eq!(height.ratio, 7.0);
        assert_eq!(height.to_string(), "alien height: 4.6415 m");

        let orbit = q[5];
        assert_eq!(orbit.quantity, Quantity::PlanetStarDistance);
        assert_relative_eq!(orbit.value, 2.0 * 0.663_068_1 / 149_597_870_700.0);
        assert_eq!(orbit.quantity.unit(), "AU");
    }

    #[test]
    fn test_output_order_and_units() {
        let labels: Vec<_> = Quantity::ALL
            .iter()
            .map(|q| (q.label(), q.unit(), q.numerator().name()))
            .collect();

        assert_eq!(
            labels,
            vec![
                ("time for signal to reach earth", "yrs", "s2"),
                ("alien height", "m", "a1"),
                ("alien lifetime", "yrs", "a2"),
                ("telescope size", "m", "t1"),
                ("time they've been communicating", "yrs", "t2"),
                ("planet distance from star", "AU", "p1"),
                ("age of their stellar system", "yrs", "p2"),
            ]
        );
    }

    #[test]
    fn test_zero_reference_scale() {
        let grid = ImageGrid::from_bitstream(
            BitStream::from_bits(vec![0; MESSAGE_BITS], "t"),
            LengthPolicy::Exact,
        )
        .unwrap();
        let s = decode_scalars(&grid).unwrap();

        assert!(matches!(
            calculate(&s, &PhysicalScales::default()),
            Err(SetiError::ZeroReferenceScale)
        ));
    }

    #[test]
    fn test_format_significant_matches_g() {
        assert_eq!(format_significant(3.504_317_818_845_54e-17, 5), "3.5043e-17");
        assert_eq!(format_significant(123_456.0, 5), "1.2346e+05");
        assert_eq!(format_significant(0.0, 5), "0");
        assert_eq!(format_significant(50.000_001, 5), "50");
        assert_eq!(format_significant(0.000_123_456_7, 5), "0.00012346");
        assert_eq!(format_significant(0.000_012_345_67, 5), "1.2346e-05");
        assert_eq!(format_significant(1.5, 5), "1.5");
        assert_eq!(format_significant(12_345.0, 5), "12345");
        assert_eq!(format_significant(-2.5, 5), "-2.5");
        assert_eq!(format_significant(f64::INFINITY, 5), "inf");
    }
}
