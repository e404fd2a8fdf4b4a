use std::{hint::black_box, io::Cursor};

use criterion::{criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use seti_core::{
    calculate, decode_scalars, render_montage, BitStream, ImageGrid, LengthPolicy,
    MessageBuilder, RenderOptions, ScalarSlot,
};
use seti_types::PhysicalScales;

fn message() -> MessageBuilder {
    let mut b = MessageBuilder::new();
    for (i, slot) in ScalarSlot::ALL.into_iter().enumerate() {
        b.set_scalar(slot, &BigUint::from(1_000u32 + i as u32)).unwrap();
    }
    b.frame_picture(0).unwrap();
    b
}

fn bench_load(c: &mut Criterion) {
    let mut ascii = Vec::new();
    message().write_ascii(&mut ascii, Some(359)).unwrap();

    c.bench_function("load_ascii_1.9M", |b| {
        b.iter(|| BitStream::from_reader(Cursor::new(black_box(&ascii)), "bench").unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let grid = ImageGrid::from_bitstream(
        BitStream::from_bits(message().into_bits(), "bench"),
        LengthPolicy::Exact,
    )
    .unwrap();
    let scales = PhysicalScales::default();

    c.bench_function("decode_and_calculate", |b| {
        b.iter(|| {
            let s = decode_scalars(black_box(&grid)).unwrap();
            calculate(&s, &scales).unwrap()
        })
    });

    c.bench_function("render_montage", |b| {
        b.iter(|| render_montage(black_box(&grid), &RenderOptions::default()).unwrap())
    });
}

criterion_group!(benches, bench_load, bench_decode);
criterion_main!(benches);
