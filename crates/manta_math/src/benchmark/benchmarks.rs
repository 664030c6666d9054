pub mod scalar;
pub mod vector2;
pub mod vector4;

use crate::{
    parity::{Operands, ParityConfig},
    vector::{Vector2, Vector2Int, Vector4, Vector4Int},
};
use manta_profiling::benchmark::Benchmarker;
use std::hint::black_box;

const N_OPERANDS: usize = 1024;

/// Benchmarks applying `f` to every input, collecting the results.
fn apply_all<I: Copy, O>(benchmarker: impl Benchmarker, inputs: &[I], f: impl Fn(I) -> O) {
    let mut outputs = Vec::with_capacity(inputs.len());
    benchmarker.benchmark(&mut || {
        outputs.clear();
        outputs.extend(inputs.iter().map(|&input| f(input)));
        black_box(&outputs).len()
    });
}

fn operands() -> Operands {
    Operands::generate(&ParityConfig {
        count: N_OPERANDS,
        ..ParityConfig::default()
    })
}

fn collect<T>(f: impl Fn(&Operands, usize) -> T) -> Vec<T> {
    let operands = operands();
    (0..N_OPERANDS).map(|idx| f(&operands, idx)).collect()
}

fn floats() -> Vec<f32> {
    collect(|o, i| o.float(i))
}

fn positive_floats() -> Vec<f32> {
    collect(|o, i| o.positive_float(i))
}

fn float_pairs() -> Vec<(f32, f32)> {
    collect(|o, i| (o.float(i), o.float(i + 1)))
}

fn float_triples() -> Vec<(f32, f32, f32)> {
    collect(|o, i| (o.float(i), o.float(i + 1), o.float(i + 2)))
}

fn positive_ints() -> Vec<i32> {
    collect(|o, i| o.positive_int(i))
}

fn binomial_arguments() -> Vec<(i32, i32)> {
    collect(|o, i| {
        let n = o.positive_int(i) % 51;
        (n, o.positive_int(i + 1) % (n + 1))
    })
}

fn vector2s() -> Vec<Vector2> {
    collect(|o, i| o.vector2(i))
}

fn vector2_pairs() -> Vec<(Vector2, Vector2)> {
    collect(|o, i| (o.vector2(i), o.vector2(i + 1)))
}

fn vector2_interpolations() -> Vec<(Vector2, Vector2, f32)> {
    collect(|o, i| (o.vector2(i), o.vector2(i + 1), o.unit(i)))
}

fn vector2_steps() -> Vec<(Vector2, Vector2, f32)> {
    collect(|o, i| (o.vector2(i), o.vector2(i + 1), o.positive_float(i)))
}

fn vector2_int_pairs() -> Vec<(Vector2Int, Vector2Int)> {
    collect(|o, i| (o.vector2_int(i), o.vector2_int(i + 1)))
}

fn vector4s() -> Vec<Vector4> {
    collect(|o, i| o.vector4(i))
}

fn vector4_pairs() -> Vec<(Vector4, Vector4)> {
    collect(|o, i| (o.vector4(i), o.vector4(i + 1)))
}

fn vector4_interpolations() -> Vec<(Vector4, Vector4, f32)> {
    collect(|o, i| (o.vector4(i), o.vector4(i + 1), o.unit(i)))
}

fn vector4_steps() -> Vec<(Vector4, Vector4, f32)> {
    collect(|o, i| (o.vector4(i), o.vector4(i + 1), o.positive_float(i)))
}

fn vector4_int_pairs() -> Vec<(Vector4Int, Vector4Int)> {
    collect(|o, i| (o.vector4_int(i), o.vector4_int(i + 1)))
}
