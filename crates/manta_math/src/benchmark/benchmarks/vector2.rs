use super::{
    apply_all, vector2_int_pairs, vector2_interpolations, vector2_pairs, vector2_steps, vector2s,
};
use crate::vector::{
    vector2::{accelerated, reference},
    vector2_int,
};
use manta_profiling::benchmark::Benchmarker;

pub fn reference_add(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_pairs(), |(a, b)| reference::add(a, b));
}

pub fn accelerated_add(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_pairs(), |(a, b)| accelerated::add(a, b));
}

pub fn reference_dot(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_pairs(), |(a, b)| reference::dot(a, b));
}

pub fn accelerated_dot(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_pairs(), |(a, b)| accelerated::dot(a, b));
}

pub fn reference_magnitude(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2s(), reference::magnitude);
}

pub fn accelerated_magnitude(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2s(), accelerated::magnitude);
}

pub fn reference_normalize(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2s(), reference::normalize);
}

pub fn accelerated_normalize(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2s(), accelerated::normalize);
}

pub fn reference_normalize_fast(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2s(), reference::normalize_fast);
}

pub fn accelerated_normalize_fast(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2s(), accelerated::normalize_fast);
}

pub fn reference_distance(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_pairs(), |(a, b)| reference::distance(a, b));
}

pub fn accelerated_distance(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_pairs(), |(a, b)| accelerated::distance(a, b));
}

pub fn reference_lerp(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_interpolations(), |(a, b, t)| {
        reference::lerp(a, b, t)
    });
}

pub fn accelerated_lerp(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_interpolations(), |(a, b, t)| {
        accelerated::lerp(a, b, t)
    });
}

pub fn reference_move_towards(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_steps(), |(a, b, max_delta)| {
        reference::move_towards(a, b, max_delta)
    });
}

pub fn accelerated_move_towards(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_steps(), |(a, b, max_delta)| {
        accelerated::move_towards(a, b, max_delta)
    });
}

pub fn reference_round(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2s(), vector2_int::reference::round);
}

pub fn accelerated_round(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2s(), vector2_int::accelerated::round);
}

pub fn reference_add_int(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_int_pairs(), |(a, b)| {
        vector2_int::reference::add(a, b)
    });
}

pub fn accelerated_add_int(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector2_int_pairs(), |(a, b)| {
        vector2_int::accelerated::add(a, b)
    });
}
