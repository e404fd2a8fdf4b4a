//! Пример: генерация синтетического SETI_message.txt
//!
//! Демонстрирует:
//! - запись восьми чисел в строки картинок 3..=6
//! - рамку на картинке 0 как ориентир при просмотре
//! - запись ASCII-файла, который читает `seti-cli`

use std::path::Path;

use num_bigint::BigUint;
use seti_core::{MessageBuilder, ScalarSlot};
use seti_types::PhysicalScales;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = Path::new("SETI_message.txt");
    let scales = PhysicalScales::default();
    let s1 = 1_000_000f64;

    let years = |y: f64| BigUint::from((y * scales.seconds_per_year / scales.time_s * s1) as u128);
    let metres = |m: f64| BigUint::from((m / scales.length_m * s1) as u128);

    let mut builder = MessageBuilder::new();
    builder
        .frame_picture(0)?
        .set_scalar(ScalarSlot::S1, &BigUint::from(s1 as u64))?
        .set_scalar(ScalarSlot::S2, &years(50.0))?
        .set_scalar(ScalarSlot::A1, &metres(2.1))?
        .set_scalar(ScalarSlot::A2, &years(180.0))?
        .set_scalar(ScalarSlot::T1, &metres(950.0))?
        .set_scalar(ScalarSlot::T2, &years(3_200.0))?
        .set_scalar(ScalarSlot::P1, &metres(0.9 * scales.metres_per_au))?
        .set_scalar(ScalarSlot::P2, &years(6.1e9))?;

    builder.write_file(output_path, Some(359))?;

    println!("✓ Message written: {output_path:?}");
    println!("  Bits          : {}", builder.as_bits().len());
    println!("  Line width    : 359");
    println!("\nRun: cargo run -p seti-cli -- --input {}", output_path.display());

    Ok(())
}
