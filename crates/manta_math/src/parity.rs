//! Checks that the reference and accelerated implementations of every
//! operation agree on randomized operands.

use crate::{
    scalar,
    simd::BACKEND_NAME,
    vector::{self, Vector2, Vector2Int, Vector4, Vector4Int},
};
use anyhow::{Result, bail};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::fmt;

/// Tolerance for operations whose paths compute the same formula, allowing
/// the paths to differ by up to four representable values.
pub const FLOAT_TOLERANCE: Tolerance = Tolerance::Ulps { max_delta_bits: 2 };

/// Tolerance for operations where the accelerated path uses the approximate
/// reciprocal square root.
pub const APPROXIMATE_RSQRT_TOLERANCE: Tolerance = Tolerance::Relative {
    epsilon: 1.5 / 4096.0,
};

/// Bound on the magnitude of integer operands, keeping squared distances
/// between four-component integer vectors within the `i32` range.
pub const MAX_INT_OPERAND: i32 = 8192;

/// Configuration for a parity run.
#[derive(Clone, Debug, PartialEq)]
pub struct ParityConfig {
    /// Number of samples per check.
    pub count: usize,
    /// Seed for the operand generator.
    pub seed: u64,
    /// Float operands are drawn uniformly from `[-range, range]`.
    pub range: f32,
    /// Integer operands are float operands multiplied by this and truncated.
    pub int_scale: f32,
}

/// Randomized operands shared by all checks.
#[derive(Clone, Debug)]
pub struct Operands {
    floats: Vec<f32>,
    units: Vec<f32>,
    ints: Vec<i32>,
    longs: Vec<i64>,
    vector2s: Vec<Vector2>,
    vector4s: Vec<Vector4>,
    vector2_ints: Vec<Vector2Int>,
    vector4_ints: Vec<Vector4Int>,
}

/// How closely the accelerated result of a check must match the reference
/// result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance {
    /// Results must be identical. NaN matches NaN.
    Exact,
    /// Float results may be at most `1 << max_delta_bits` representable
    /// values apart.
    Ulps { max_delta_bits: u32 },
    /// Float results may differ by `epsilon` relative to their magnitudes.
    Relative { epsilon: f32 },
    /// Float results may differ by at most `tolerance`.
    Absolute { tolerance: f32 },
}

/// A result type that can be compared between the two paths.
pub trait Outcome: fmt::Debug {
    /// Returns how far `accelerated` deviates from `self`, or [`None`] if it
    /// is within the tolerance.
    fn deviation(&self, accelerated: &Self, tolerance: Tolerance) -> Option<f64>;
}

/// The sample of a check where the paths deviated the most.
#[derive(Clone, Debug, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub deviation: f64,
    pub reference: String,
    pub accelerated: String,
}

/// The outcome of comparing the paths of one operation.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckResult {
    pub name: &'static str,
    pub samples: usize,
    pub mismatches: usize,
    pub worst: Option<Mismatch>,
}

/// The outcomes of all checks in a parity run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParityReport {
    checks: Vec<CheckResult>,
}

impl Default for ParityConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            seed: 0,
            range: 10.0,
            int_scale: 100.0,
        }
    }
}

impl Operands {
    /// Generates `4 * config.count` operands of each kind.
    pub fn generate(config: &ParityConfig) -> Self {
        let mut rng = Pcg64Mcg::seed_from_u64(config.seed);
        let n_values = 4 * config.count;
        let range = config.range.abs();
        let long_range = 4 * i64::from(i32::MAX);

        let floats: Vec<f32> = (0..n_values)
            .map(|_| rng.random_range(-range..=range))
            .collect();
        let units = (0..n_values).map(|_| rng.random_range(0.0..=1.0)).collect();
        let ints: Vec<i32> = floats
            .iter()
            .map(|&value| ((value * config.int_scale) as i32).clamp(-MAX_INT_OPERAND, MAX_INT_OPERAND))
            .collect();
        let longs = (0..n_values)
            .map(|_| rng.random_range(-long_range..=long_range))
            .collect();

        let vector2s = floats
            .chunks_exact(2)
            .map(|chunk| Vector2::new(chunk[0], chunk[1]))
            .collect();
        let vector4s = floats
            .chunks_exact(4)
            .map(|chunk| Vector4::new(chunk[0], chunk[1], chunk[2], chunk[3]))
            .collect();
        let vector2_ints = ints
            .chunks_exact(2)
            .map(|chunk| Vector2Int::new(chunk[0], chunk[1]))
            .collect();
        let vector4_ints = ints
            .chunks_exact(4)
            .map(|chunk| Vector4Int::new(chunk[0], chunk[1], chunk[2], chunk[3]))
            .collect();

        Self {
            floats,
            units,
            ints,
            longs,
            vector2s,
            vector4s,
            vector2_ints,
            vector4_ints,
        }
    }

    /// A float in `[-range, range]`.
    pub fn float(&self, idx: usize) -> f32 {
        self.floats[idx % self.floats.len()]
    }

    /// A non-negative float in `[0, range]`.
    pub fn positive_float(&self, idx: usize) -> f32 {
        self.float(idx).abs()
    }

    /// A float in `[0, 1]`.
    pub fn unit(&self, idx: usize) -> f32 {
        self.units[idx % self.units.len()]
    }

    pub fn int(&self, idx: usize) -> i32 {
        self.ints[idx % self.ints.len()]
    }

    /// A strictly positive integer.
    pub fn positive_int(&self, idx: usize) -> i32 {
        self.int(idx).abs().max(1)
    }

    pub fn long(&self, idx: usize) -> i64 {
        self.longs[idx % self.longs.len()]
    }

    pub fn vector2(&self, idx: usize) -> Vector2 {
        self.vector2s[idx % self.vector2s.len()]
    }

    pub fn vector4(&self, idx: usize) -> Vector4 {
        self.vector4s[idx % self.vector4s.len()]
    }

    pub fn vector2_int(&self, idx: usize) -> Vector2Int {
        self.vector2_ints[idx % self.vector2_ints.len()]
    }

    pub fn vector4_int(&self, idx: usize) -> Vector4Int {
        self.vector4_ints[idx % self.vector4_ints.len()]
    }
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.mismatches == 0
    }
}

impl ParityReport {
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|check| !check.passed())
    }

    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckResult::passed)
    }

    /// Returns an error naming every check where the paths disagreed.
    pub fn ensure_passed(&self) -> Result<()> {
        let failed: Vec<_> = self.failed_checks().map(|check| check.name).collect();
        if !failed.is_empty() {
            bail!(
                "{} of {} parity checks failed: {}",
                failed.len(),
                self.checks.len(),
                failed.join(", ")
            );
        }
        Ok(())
    }

    fn push(&mut self, check: CheckResult) {
        self.checks.push(check);
    }
}

impl fmt::Display for ParityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for check in &self.checks {
            write!(
                f,
                "{:<40} {:>6} samples {:>6} mismatches",
                check.name, check.samples, check.mismatches
            )?;
            if let Some(worst) = &check.worst {
                write!(
                    f,
                    " (worst at {}: reference {}, accelerated {})",
                    worst.index, worst.reference, worst.accelerated
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn monotonic_bits_f64(x: f64) -> i64 {
    let bits = x.to_bits() as i64;
    if bits < 0 { i64::MIN - bits } else { bits }
}

impl Outcome for f32 {
    fn deviation(&self, accelerated: &Self, tolerance: Tolerance) -> Option<f64> {
        let (reference, accelerated) = (*self, *accelerated);
        if reference == accelerated || (reference.is_nan() && accelerated.is_nan()) {
            return None;
        }
        let within = match tolerance {
            Tolerance::Exact => false,
            Tolerance::Ulps { max_delta_bits } => {
                scalar::approximately_equal_ulps(reference, accelerated, max_delta_bits)
            }
            Tolerance::Relative { epsilon } => {
                scalar::approximately_equal_relative(reference, accelerated, epsilon)
            }
            Tolerance::Absolute { tolerance } => {
                scalar::approximately_equal(reference, accelerated, tolerance)
            }
        };
        if within {
            None
        } else if let Tolerance::Ulps { .. } = tolerance {
            Some(scalar::monotonic_bits(reference).abs_diff(scalar::monotonic_bits(accelerated)) as f64)
        } else {
            Some(f64::from((reference - accelerated).abs()))
        }
    }
}

impl Outcome for f64 {
    fn deviation(&self, accelerated: &Self, tolerance: Tolerance) -> Option<f64> {
        let (reference, accelerated) = (*self, *accelerated);
        if reference == accelerated || (reference.is_nan() && accelerated.is_nan()) {
            return None;
        }
        let ulps = monotonic_bits_f64(reference).abs_diff(monotonic_bits_f64(accelerated));
        let within = match tolerance {
            Tolerance::Exact => false,
            Tolerance::Ulps { max_delta_bits } => 1_u64
                .checked_shl(max_delta_bits)
                .is_none_or(|max_delta| ulps <= max_delta),
            Tolerance::Relative { epsilon } => {
                scalar::approximately_equal_relative(reference, accelerated, f64::from(epsilon))
            }
            Tolerance::Absolute { tolerance } => {
                scalar::approximately_equal(reference, accelerated, f64::from(tolerance))
            }
        };
        if within {
            None
        } else if let Tolerance::Ulps { .. } = tolerance {
            Some(ulps as f64)
        } else {
            Some((reference - accelerated).abs())
        }
    }
}

macro_rules! impl_integer_outcome {
    ($t:ty) => {
        impl Outcome for $t {
            fn deviation(&self, accelerated: &Self, _tolerance: Tolerance) -> Option<f64> {
                (self != accelerated).then(|| self.abs_diff(*accelerated) as f64)
            }
        }
    };
}

impl_integer_outcome!(i32);
impl_integer_outcome!(i64);

impl Outcome for bool {
    fn deviation(&self, accelerated: &Self, _tolerance: Tolerance) -> Option<f64> {
        (self != accelerated).then_some(1.0)
    }
}

macro_rules! impl_vector_outcome {
    ($t:ty) => {
        impl Outcome for $t {
            fn deviation(&self, accelerated: &Self, tolerance: Tolerance) -> Option<f64> {
                self.as_array()
                    .iter()
                    .zip(accelerated.as_array())
                    .filter_map(|(reference, accelerated)| {
                        reference.deviation(accelerated, tolerance)
                    })
                    .reduce(f64::max)
            }
        }
    };
}

impl_vector_outcome!(Vector2);
impl_vector_outcome!(Vector4);
impl_vector_outcome!(Vector2Int);
impl_vector_outcome!(Vector4Int);

/// Runs both paths for every sample index and records how often and how
/// badly they disagree.
pub fn run_check<T: Outcome>(
    name: &'static str,
    samples: usize,
    tolerance: Tolerance,
    reference: impl Fn(usize) -> T,
    accelerated: impl Fn(usize) -> T,
) -> CheckResult {
    let mut mismatches = 0;
    let mut worst: Option<Mismatch> = None;

    for idx in 0..samples {
        let reference_result = reference(idx);
        let accelerated_result = accelerated(idx);

        if let Some(deviation) = reference_result.deviation(&accelerated_result, tolerance) {
            mismatches += 1;
            if worst
                .as_ref()
                .is_none_or(|worst| deviation > worst.deviation)
            {
                worst = Some(Mismatch {
                    index: idx,
                    deviation,
                    reference: format!("{reference_result:?}"),
                    accelerated: format!("{accelerated_result:?}"),
                });
            }
        }
    }

    if let Some(worst) = &worst {
        manta_log::warn!(
            "Parity check {name} failed for {mismatches}/{samples} samples, worst at index {}: reference {}, accelerated {}",
            worst.index,
            worst.reference,
            worst.accelerated
        );
    } else {
        manta_log::debug!("Parity check {name} passed for {samples} samples");
    }

    CheckResult {
        name,
        samples,
        mismatches,
        worst,
    }
}

/// Records a check comparing `<module>::reference::<func>` with
/// `<module>::accelerated::<func>` called with the same arguments.
macro_rules! check {
    (
        $report:ident, $samples:expr, $name:literal, $tolerance:expr,
        |$idx:ident| $($module:ident)::+ => $func:ident($($arg:expr),* $(,)?)
    ) => {
        $report.push(run_check(
            $name,
            $samples,
            $tolerance,
            |$idx| $($module)::+::reference::$func($($arg),*),
            |$idx| $($module)::+::accelerated::$func($($arg),*),
        ))
    };
}

/// Runs every parity check on operands generated from the configuration.
pub fn run_all(config: &ParityConfig) -> ParityReport {
    let o = Operands::generate(config);
    let n = config.count;
    let mut report = ParityReport::default();

    run_scalar_checks(&mut report, &o, n);
    run_vector2_checks(&mut report, &o, n);
    run_vector2_int_checks(&mut report, &o, n);
    run_vector4_checks(&mut report, &o, n, config.range);
    run_vector4_int_checks(&mut report, &o, n);

    let n_failed = report.failed_checks().count();
    manta_log::info!(
        "{} of {} parity checks passed with {} samples each using the {} backend",
        report.checks().len() - n_failed,
        report.checks().len(),
        n,
        BACKEND_NAME
    );

    report
}

fn run_scalar_checks(report: &mut ParityReport, o: &Operands, n: usize) {
    let exact = Tolerance::Exact;

    check!(report, n, "scalar::min_i32", exact, |i| scalar => min(o.int(i), o.int(i + 1)));
    check!(report, n, "scalar::max_i32", exact, |i| scalar => max(o.int(i), o.int(i + 1)));
    check!(report, n, "scalar::clamp_i32", exact, |i| scalar => clamp(o.int(i), o.int(i + 1), o.int(i + 2)));
    check!(report, n, "scalar::min_i64", exact, |i| scalar => min(o.long(i), o.long(i + 1)));
    check!(report, n, "scalar::max_i64", exact, |i| scalar => max(o.long(i), o.long(i + 1)));
    check!(report, n, "scalar::clamp_i64", exact, |i| scalar => clamp(o.long(i), o.long(i + 1), o.long(i + 2)));
    check!(report, n, "scalar::min_f32", FLOAT_TOLERANCE, |i| scalar => min(o.float(i), o.float(i + 1)));
    check!(report, n, "scalar::max_f32", FLOAT_TOLERANCE, |i| scalar => max(o.float(i), o.float(i + 1)));
    check!(report, n, "scalar::clamp_f32", FLOAT_TOLERANCE, |i| scalar => clamp(o.float(i), o.float(i + 1), o.float(i + 2)));
    check!(report, n, "scalar::min_f64", FLOAT_TOLERANCE, |i| scalar => min(f64::from(o.float(i)), f64::from(o.float(i + 1))));
    check!(report, n, "scalar::max_f64", FLOAT_TOLERANCE, |i| scalar => max(f64::from(o.float(i)), f64::from(o.float(i + 1))));
    check!(report, n, "scalar::clamp01_f32", FLOAT_TOLERANCE, |i| scalar => clamp01(o.float(i)));
    check!(report, n, "scalar::sqrt_f32", FLOAT_TOLERANCE, |i| scalar => sqrt(o.positive_float(i)));
    check!(report, n, "scalar::sqrt_f64", FLOAT_TOLERANCE, |i| scalar => sqrt(f64::from(o.positive_float(i))));
    check!(report, n, "scalar::inv_sqrt_fast", APPROXIMATE_RSQRT_TOLERANCE, |i| scalar => inv_sqrt_fast(o.positive_float(i)));
    check!(report, n, "scalar::next_power_of_two_i32", exact, |i| scalar => next_power_of_two(o.positive_int(i)));
    check!(report, n, "scalar::next_power_of_two_i64", exact, |i| scalar => next_power_of_two(o.long(i).abs().max(1)));
    check!(report, n, "scalar::next_power_of_two_f32", FLOAT_TOLERANCE, |i| scalar => next_power_of_two(o.positive_float(i)));
    check!(report, n, "scalar::is_power_of_two_i32", exact, |i| scalar => is_power_of_two(o.int(i)));
    check!(report, n, "scalar::is_power_of_two_i64", exact, |i| scalar => is_power_of_two(o.long(i)));
    check!(report, n, "scalar::factorial", exact, |i| scalar => factorial(o.positive_int(i) % 21));
    check!(report, n, "scalar::binomial_coefficient", exact, |i| scalar => binomial_coefficient(
        o.positive_int(i) % 51,
        o.positive_int(i + 1) % (o.positive_int(i) % 51 + 1),
    ));
    check!(report, n, "scalar::binomial_coefficient_large_k", exact, |i| scalar => binomial_coefficient(
        51 + o.positive_int(i) % 16,
        51 + o.positive_int(i) % 16 - o.positive_int(i + 1) % 9,
    ));
    check!(report, n, "scalar::lerp_clamped", FLOAT_TOLERANCE, |i| scalar => lerp_clamped(o.float(i), o.float(i + 1), o.float(i + 2)));
    check!(report, n, "scalar::smooth_step", FLOAT_TOLERANCE, |i| scalar => smooth_step(o.float(i), o.float(i + 1), o.float(i + 2)));
}

fn run_vector2_checks(report: &mut ParityReport, o: &Operands, n: usize) {
    let tol = FLOAT_TOLERANCE;

    check!(report, n, "vector2::add", tol, |i| vector::vector2 => add(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::subtract", tol, |i| vector::vector2 => subtract(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::negate", tol, |i| vector::vector2 => negate(o.vector2(i)));
    check!(report, n, "vector2::multiply", tol, |i| vector::vector2 => multiply(o.vector2(i), o.float(i)));
    check!(report, n, "vector2::component_multiply", tol, |i| vector::vector2 => component_multiply(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::divide", tol, |i| vector::vector2 => divide(o.vector2(i), o.float(i)));
    check!(report, n, "vector2::component_divide", tol, |i| vector::vector2 => component_divide(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::dot", tol, |i| vector::vector2 => dot(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::component_min", tol, |i| vector::vector2 => component_min(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::component_max", tol, |i| vector::vector2 => component_max(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::component_clamp", tol, |i| vector::vector2 => component_clamp(o.vector2(i), o.vector2(i + 1), o.vector2(i + 2)));
    check!(report, n, "vector2::min", tol, |i| vector::vector2 => min(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::max", tol, |i| vector::vector2 => max(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::magnitude_clamp", tol, |i| vector::vector2 => magnitude_clamp(o.vector2(i), o.positive_float(i)));
    check!(report, n, "vector2::magnitude", tol, |i| vector::vector2 => magnitude(o.vector2(i)));
    check!(report, n, "vector2::magnitude_squared", tol, |i| vector::vector2 => magnitude_squared(o.vector2(i)));
    check!(report, n, "vector2::magnitude_fast", APPROXIMATE_RSQRT_TOLERANCE, |i| vector::vector2 => magnitude_fast(o.vector2(i)));
    check!(report, n, "vector2::normalize", tol, |i| vector::vector2 => normalize(o.vector2(i)));
    check!(report, n, "vector2::normalize_fast", APPROXIMATE_RSQRT_TOLERANCE, |i| vector::vector2 => normalize_fast(o.vector2(i)));
    check!(report, n, "vector2::distance", tol, |i| vector::vector2 => distance(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::distance_squared", tol, |i| vector::vector2 => distance_squared(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::reflect", tol, |i| vector::vector2 => reflect(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::angle", tol, |i| vector::vector2 => angle(o.vector2(i), o.vector2(i + 1)));
    check!(report, n, "vector2::lerp", tol, |i| vector::vector2 => lerp(o.vector2(i), o.vector2(i + 1), o.unit(i)));
    check!(report, n, "vector2::lerp_clamped", tol, |i| vector::vector2 => lerp_clamped(o.vector2(i), o.vector2(i + 1), o.float(i)));
    check!(report, n, "vector2::move_towards", tol, |i| vector::vector2 => move_towards(o.vector2(i), o.vector2(i + 1), o.positive_float(i)));
    check!(report, n, "vector2::smooth_step", tol, |i| vector::vector2 => smooth_step(o.vector2(i), o.vector2(i + 1), o.float(i)));
}

fn run_vector2_int_checks(report: &mut ParityReport, o: &Operands, n: usize) {
    let exact = Tolerance::Exact;

    check!(report, n, "vector2_int::add", exact, |i| vector::vector2_int => add(o.vector2_int(i), o.vector2_int(i + 1)));
    check!(report, n, "vector2_int::subtract", exact, |i| vector::vector2_int => subtract(o.vector2_int(i), o.vector2_int(i + 1)));
    check!(report, n, "vector2_int::negate", exact, |i| vector::vector2_int => negate(o.vector2_int(i)));
    check!(report, n, "vector2_int::scale", exact, |i| vector::vector2_int => scale(o.vector2_int(i), o.int(i)));
    check!(report, n, "vector2_int::multiply", exact, |i| vector::vector2_int => multiply(o.vector2_int(i), o.vector2_int(i + 1)));
    check!(report, n, "vector2_int::component_min", exact, |i| vector::vector2_int => component_min(o.vector2_int(i), o.vector2_int(i + 1)));
    check!(report, n, "vector2_int::component_max", exact, |i| vector::vector2_int => component_max(o.vector2_int(i), o.vector2_int(i + 1)));
    check!(report, n, "vector2_int::component_clamp", exact, |i| vector::vector2_int => component_clamp(o.vector2_int(i), o.vector2_int(i + 1), o.vector2_int(i + 2)));
    check!(report, n, "vector2_int::magnitude", exact, |i| vector::vector2_int => magnitude(o.vector2_int(i)));
    check!(report, n, "vector2_int::magnitude_squared", exact, |i| vector::vector2_int => magnitude_squared(o.vector2_int(i)));
    check!(report, n, "vector2_int::distance_squared", exact, |i| vector::vector2_int => distance_squared(o.vector2_int(i), o.vector2_int(i + 1)));
    check!(report, n, "vector2_int::ceil", exact, |i| vector::vector2_int => ceil(o.vector2(i)));
    check!(report, n, "vector2_int::floor", exact, |i| vector::vector2_int => floor(o.vector2(i)));
    check!(report, n, "vector2_int::round", exact, |i| vector::vector2_int => round(o.vector2(i)));
    check!(report, n, "vector2_int::to_float", exact, |i| vector::vector2_int => to_float(o.vector2_int(i)));
}

fn run_vector4_checks(report: &mut ParityReport, o: &Operands, n: usize, range: f32) {
    let tol = FLOAT_TOLERANCE;
    // The paths evaluate lerp with differently ordered operations
    let lerp_tolerance = Tolerance::Absolute {
        tolerance: 8.0 * f32::EPSILON * range.abs().max(1.0),
    };

    check!(report, n, "vector4::add", tol, |i| vector::vector4 => add(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::subtract", tol, |i| vector::vector4 => subtract(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::negate", tol, |i| vector::vector4 => negate(o.vector4(i)));
    check!(report, n, "vector4::multiply", tol, |i| vector::vector4 => multiply(o.vector4(i), o.float(i)));
    check!(report, n, "vector4::component_multiply", tol, |i| vector::vector4 => component_multiply(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::divide", tol, |i| vector::vector4 => divide(o.vector4(i), o.float(i)));
    check!(report, n, "vector4::component_divide", tol, |i| vector::vector4 => component_divide(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::dot", tol, |i| vector::vector4 => dot(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::component_min", tol, |i| vector::vector4 => component_min(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::component_max", tol, |i| vector::vector4 => component_max(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::component_clamp", tol, |i| vector::vector4 => component_clamp(o.vector4(i), o.vector4(i + 1), o.vector4(i + 2)));
    check!(report, n, "vector4::min", tol, |i| vector::vector4 => min(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::max", tol, |i| vector::vector4 => max(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::magnitude_clamp", tol, |i| vector::vector4 => magnitude_clamp(o.vector4(i), o.positive_float(i)));
    check!(report, n, "vector4::magnitude", tol, |i| vector::vector4 => magnitude(o.vector4(i)));
    check!(report, n, "vector4::magnitude_squared", tol, |i| vector::vector4 => magnitude_squared(o.vector4(i)));
    check!(report, n, "vector4::magnitude_fast", APPROXIMATE_RSQRT_TOLERANCE, |i| vector::vector4 => magnitude_fast(o.vector4(i)));
    check!(report, n, "vector4::normalize", tol, |i| vector::vector4 => normalize(o.vector4(i)));
    check!(report, n, "vector4::normalize_fast", APPROXIMATE_RSQRT_TOLERANCE, |i| vector::vector4 => normalize_fast(o.vector4(i)));
    check!(report, n, "vector4::project", tol, |i| vector::vector4 => project(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::distance", tol, |i| vector::vector4 => distance(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::distance_squared", tol, |i| vector::vector4 => distance_squared(o.vector4(i), o.vector4(i + 1)));
    check!(report, n, "vector4::lerp", lerp_tolerance, |i| vector::vector4 => lerp(o.vector4(i), o.vector4(i + 1), o.unit(i)));
    check!(report, n, "vector4::lerp_clamped", lerp_tolerance, |i| vector::vector4 => lerp_clamped(o.vector4(i), o.vector4(i + 1), o.float(i)));
    check!(report, n, "vector4::move_towards", tol, |i| vector::vector4 => move_towards(o.vector4(i), o.vector4(i + 1), o.positive_float(i)));
}

fn run_vector4_int_checks(report: &mut ParityReport, o: &Operands, n: usize) {
    let exact = Tolerance::Exact;

    check!(report, n, "vector4_int::add", exact, |i| vector::vector4_int => add(o.vector4_int(i), o.vector4_int(i + 1)));
    check!(report, n, "vector4_int::subtract", exact, |i| vector::vector4_int => subtract(o.vector4_int(i), o.vector4_int(i + 1)));
    check!(report, n, "vector4_int::negate", exact, |i| vector::vector4_int => negate(o.vector4_int(i)));
    check!(report, n, "vector4_int::scale", exact, |i| vector::vector4_int => scale(o.vector4_int(i), o.int(i)));
    check!(report, n, "vector4_int::multiply", exact, |i| vector::vector4_int => multiply(o.vector4_int(i), o.vector4_int(i + 1)));
    check!(report, n, "vector4_int::component_min", exact, |i| vector::vector4_int => component_min(o.vector4_int(i), o.vector4_int(i + 1)));
    check!(report, n, "vector4_int::component_max", exact, |i| vector::vector4_int => component_max(o.vector4_int(i), o.vector4_int(i + 1)));
    check!(report, n, "vector4_int::component_clamp", exact, |i| vector::vector4_int => component_clamp(o.vector4_int(i), o.vector4_int(i + 1), o.vector4_int(i + 2)));
    check!(report, n, "vector4_int::magnitude", exact, |i| vector::vector4_int => magnitude(o.vector4_int(i)));
    check!(report, n, "vector4_int::magnitude_squared", exact, |i| vector::vector4_int => magnitude_squared(o.vector4_int(i)));
    check!(report, n, "vector4_int::distance_squared", exact, |i| vector::vector4_int => distance_squared(o.vector4_int(i), o.vector4_int(i + 1)));
    check!(report, n, "vector4_int::ceil", exact, |i| vector::vector4_int => ceil(o.vector4(i)));
    check!(report, n, "vector4_int::floor", exact, |i| vector::vector4_int => floor(o.vector4(i)));
    check!(report, n, "vector4_int::round", exact, |i| vector::vector4_int => round(o.vector4(i)));
    check!(report, n, "vector4_int::to_float", exact, |i| vector::vector4_int => to_float(o.vector4_int(i)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ParityConfig {
        ParityConfig {
            count: 200,
            seed: 42,
            ..ParityConfig::default()
        }
    }

    #[test]
    fn default_config_matches_documented_values() {
        let config = ParityConfig::default();
        assert_eq!(config.count, 1000);
        assert_eq!(config.seed, 0);
        assert_eq!(config.range, 10.0);
        assert_eq!(config.int_scale, 100.0);
    }

    #[test]
    fn generated_operands_respect_ranges() {
        let config = small_config();
        let operands = Operands::generate(&config);
        for idx in 0..4 * config.count {
            assert!(operands.float(idx).abs() <= config.range);
            assert!((0.0..=1.0).contains(&operands.unit(idx)));
            assert!(operands.int(idx).abs() <= MAX_INT_OPERAND);
            assert!(operands.positive_int(idx) >= 1);
            assert!(operands.long(idx).abs() <= 4 * i64::from(i32::MAX));
        }
    }

    #[test]
    fn integer_operands_are_scaled_floats() {
        let operands = Operands::generate(&small_config());
        for idx in 0..10 {
            assert_eq!(operands.int(idx), (operands.float(idx) * 100.0) as i32);
        }
    }

    #[test]
    fn vector_operands_are_built_from_float_operands() {
        let operands = Operands::generate(&small_config());
        assert_eq!(
            operands.vector4(1),
            Vector4::new(
                operands.float(4),
                operands.float(5),
                operands.float(6),
                operands.float(7)
            )
        );
        assert_eq!(
            operands.vector2(3),
            Vector2::new(operands.float(6), operands.float(7))
        );
    }

    #[test]
    fn operand_generation_is_reproducible() {
        let config = small_config();
        let a = Operands::generate(&config);
        let b = Operands::generate(&config);
        assert_eq!(a.floats, b.floats);
        assert_eq!(a.longs, b.longs);

        let c = Operands::generate(&ParityConfig {
            seed: 43,
            ..config
        });
        assert_ne!(a.floats, c.floats);
    }

    #[test]
    fn all_paths_agree_on_default_operands() {
        let report = run_all(&ParityConfig::default());
        assert!(!report.checks().is_empty());
        for check in report.checks() {
            assert_eq!(check.samples, 1000);
        }
        if let Err(error) = report.ensure_passed() {
            panic!("{error}\n{report}");
        }
    }

    #[test]
    fn all_paths_agree_on_other_seeds() {
        for seed in [1, 7, 1234] {
            let report = run_all(&ParityConfig {
                seed,
                ..small_config()
            });
            assert!(report.passed(), "{report}");
        }
    }

    #[test]
    fn float_deviation_respects_tolerance() {
        let next = f32::from_bits(1.0_f32.to_bits() + 3);
        assert_eq!(1.0_f32.deviation(&next, FLOAT_TOLERANCE), None);
        assert_eq!(1.0_f32.deviation(&next, Tolerance::Exact), Some(f64::from(next - 1.0)));

        let far = f32::from_bits(1.0_f32.to_bits() + 5);
        assert_eq!(1.0_f32.deviation(&far, FLOAT_TOLERANCE), Some(5.0));

        assert_eq!(f32::NAN.deviation(&f32::NAN, Tolerance::Exact), None);
        assert!(1.0_f32.deviation(&1.0003, APPROXIMATE_RSQRT_TOLERANCE).is_none());
        assert!(1.0_f32.deviation(&1.01, APPROXIMATE_RSQRT_TOLERANCE).is_some());
        assert!(1.0_f32
            .deviation(&1.05, Tolerance::Absolute { tolerance: 0.1 })
            .is_none());
    }

    #[test]
    fn full_width_ulp_tolerance_accepts_any_difference() {
        let tolerance = Tolerance::Ulps { max_delta_bits: 64 };
        assert_eq!(1.0_f32.deviation(&2.0, tolerance), None);
        assert_eq!(1.0_f64.deviation(&-2.0, tolerance), None);
    }

    #[test]
    fn binomial_checks_cover_k_above_half_of_n() {
        let report = run_all(&small_config());
        let check = report
            .checks()
            .iter()
            .find(|check| check.name == "scalar::binomial_coefficient_large_k")
            .unwrap();
        assert!(check.passed());
        assert!(check.samples > 0);
    }

    #[test]
    fn integer_deviation_is_exact() {
        assert_eq!(3_i32.deviation(&3, FLOAT_TOLERANCE), None);
        assert_eq!(3_i32.deviation(&5, FLOAT_TOLERANCE), Some(2.0));
        assert_eq!(i64::MIN.deviation(&0, Tolerance::Exact), Some(i64::MIN.unsigned_abs() as f64));
        assert_eq!(true.deviation(&false, Tolerance::Exact), Some(1.0));
    }

    #[test]
    fn vector_deviation_is_largest_component_deviation() {
        let a = Vector2Int::new(1, 2);
        let b = Vector2Int::new(4, 1);
        assert_eq!(a.deviation(&b, Tolerance::Exact), Some(3.0));
        assert_eq!(a.deviation(&a, Tolerance::Exact), None);
    }

    #[test]
    fn failing_check_is_reported_with_worst_mismatch() {
        let check = run_check(
            "always_off",
            10,
            Tolerance::Exact,
            |idx| idx as i32,
            |idx| if idx == 7 { 100 } else { idx as i32 + (idx % 2) as i32 },
        );
        assert_eq!(check.samples, 10);
        assert_eq!(check.mismatches, 5);
        assert!(!check.passed());

        let worst = check.worst.clone().unwrap();
        assert_eq!(worst.index, 7);
        assert_eq!(worst.reference, "7");
        assert_eq!(worst.accelerated, "100");

        let mut report = ParityReport::default();
        report.push(check);
        let error = report.ensure_passed().unwrap_err();
        assert!(error.to_string().contains("always_off"));
        assert!(report.to_string().contains("always_off"));
    }

    #[test]
    fn empty_run_passes() {
        let report = run_all(&ParityConfig {
            count: 0,
            ..ParityConfig::default()
        });
        assert!(report.ensure_passed().is_ok());
    }
}
