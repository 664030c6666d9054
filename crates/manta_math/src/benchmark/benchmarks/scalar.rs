use super::{
    apply_all, binomial_arguments, float_pairs, float_triples, floats, positive_floats,
    positive_ints,
};
use crate::scalar::{accelerated, reference};
use manta_profiling::benchmark::Benchmarker;

pub fn reference_min(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &float_pairs(), |(a, b)| reference::min(a, b));
}

pub fn accelerated_min(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &float_pairs(), |(a, b)| accelerated::min(a, b));
}

pub fn reference_clamp(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &float_triples(), |(x, min, max)| {
        reference::clamp(x, min, max)
    });
}

pub fn accelerated_clamp(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &float_triples(), |(x, min, max)| {
        accelerated::clamp(x, min, max)
    });
}

pub fn reference_sqrt(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &positive_floats(), reference::sqrt);
}

pub fn accelerated_sqrt(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &positive_floats(), accelerated::sqrt);
}

pub fn reference_inv_sqrt_fast(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &positive_floats(), reference::inv_sqrt_fast);
}

pub fn accelerated_inv_sqrt_fast(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &positive_floats(), accelerated::inv_sqrt_fast);
}

pub fn reference_next_power_of_two(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &positive_ints(), reference::next_power_of_two);
}

pub fn accelerated_next_power_of_two(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &positive_ints(), accelerated::next_power_of_two);
}

pub fn reference_is_power_of_two(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &positive_ints(), reference::is_power_of_two);
}

pub fn accelerated_is_power_of_two(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &positive_ints(), accelerated::is_power_of_two);
}

pub fn reference_binomial_coefficient(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &binomial_arguments(), |(n, k)| {
        reference::binomial_coefficient(n, k)
    });
}

pub fn accelerated_binomial_coefficient(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &binomial_arguments(), |(n, k)| {
        accelerated::binomial_coefficient(n, k)
    });
}

pub fn reference_smooth_step(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &floats(), |t| reference::smooth_step(-5.0, 5.0, t));
}

pub fn accelerated_smooth_step(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &floats(), |t| accelerated::smooth_step(-5.0, 5.0, t));
}
