use super::{
    apply_all, vector4_int_pairs, vector4_interpolations, vector4_pairs, vector4_steps, vector4s,
};
use crate::vector::{
    vector4::{accelerated, reference},
    vector4_int,
};
use manta_profiling::benchmark::Benchmarker;

pub fn reference_add(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_pairs(), |(a, b)| reference::add(a, b));
}

pub fn accelerated_add(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_pairs(), |(a, b)| accelerated::add(a, b));
}

pub fn reference_component_multiply(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_pairs(), |(a, b)| {
        reference::component_multiply(a, b)
    });
}

pub fn accelerated_component_multiply(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_pairs(), |(a, b)| {
        accelerated::component_multiply(a, b)
    });
}

pub fn reference_dot(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_pairs(), |(a, b)| reference::dot(a, b));
}

pub fn accelerated_dot(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_pairs(), |(a, b)| accelerated::dot(a, b));
}

pub fn reference_magnitude(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4s(), reference::magnitude);
}

pub fn accelerated_magnitude(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4s(), accelerated::magnitude);
}

pub fn reference_normalize(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4s(), reference::normalize);
}

pub fn accelerated_normalize(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4s(), accelerated::normalize);
}

pub fn reference_normalize_fast(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4s(), reference::normalize_fast);
}

pub fn accelerated_normalize_fast(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4s(), accelerated::normalize_fast);
}

pub fn reference_project(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_pairs(), |(v, n)| reference::project(v, n));
}

pub fn accelerated_project(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_pairs(), |(v, n)| accelerated::project(v, n));
}

pub fn reference_distance(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_pairs(), |(a, b)| reference::distance(a, b));
}

pub fn accelerated_distance(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_pairs(), |(a, b)| accelerated::distance(a, b));
}

pub fn reference_lerp(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_interpolations(), |(a, b, t)| {
        reference::lerp(a, b, t)
    });
}

pub fn accelerated_lerp(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_interpolations(), |(a, b, t)| {
        accelerated::lerp(a, b, t)
    });
}

pub fn reference_move_towards(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_steps(), |(a, b, max_delta)| {
        reference::move_towards(a, b, max_delta)
    });
}

pub fn accelerated_move_towards(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_steps(), |(a, b, max_delta)| {
        accelerated::move_towards(a, b, max_delta)
    });
}

pub fn reference_round(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4s(), vector4_int::reference::round);
}

pub fn accelerated_round(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4s(), vector4_int::accelerated::round);
}

pub fn reference_distance_squared_int(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_int_pairs(), |(a, b)| {
        vector4_int::reference::distance_squared(a, b)
    });
}

pub fn accelerated_distance_squared_int(benchmarker: impl Benchmarker) {
    apply_all(benchmarker, &vector4_int_pairs(), |(a, b)| {
        vector4_int::accelerated::distance_squared(a, b)
    });
}
