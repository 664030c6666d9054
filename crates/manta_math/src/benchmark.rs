//! Benchmark targets for the reference and accelerated paths.

pub mod benchmarks;

use manta_profiling::benchmark::{Comparison, Measurement};

manta_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    scalar => {
        reference_min,
        accelerated_min,
        reference_clamp,
        accelerated_clamp,
        reference_sqrt,
        accelerated_sqrt,
        reference_inv_sqrt_fast,
        accelerated_inv_sqrt_fast,
        reference_next_power_of_two,
        accelerated_next_power_of_two,
        reference_is_power_of_two,
        accelerated_is_power_of_two,
        reference_binomial_coefficient,
        accelerated_binomial_coefficient,
        reference_smooth_step,
        accelerated_smooth_step,
    },
    vector2 => {
        reference_add,
        accelerated_add,
        reference_dot,
        accelerated_dot,
        reference_magnitude,
        accelerated_magnitude,
        reference_normalize,
        accelerated_normalize,
        reference_normalize_fast,
        accelerated_normalize_fast,
        reference_distance,
        accelerated_distance,
        reference_lerp,
        accelerated_lerp,
        reference_move_towards,
        accelerated_move_towards,
        reference_round,
        accelerated_round,
        reference_add_int,
        accelerated_add_int,
    },
    vector4 => {
        reference_add,
        accelerated_add,
        reference_component_multiply,
        accelerated_component_multiply,
        reference_dot,
        accelerated_dot,
        reference_magnitude,
        accelerated_magnitude,
        reference_normalize,
        accelerated_normalize,
        reference_normalize_fast,
        accelerated_normalize_fast,
        reference_project,
        accelerated_project,
        reference_distance,
        accelerated_distance,
        reference_lerp,
        accelerated_lerp,
        reference_move_towards,
        accelerated_move_towards,
        reference_round,
        accelerated_round,
        reference_distance_squared_int,
        accelerated_distance_squared_int,
    }
}

impl Target {
    /// The target running the other path of the same operation.
    pub fn counterpart(&self) -> Option<Self> {
        let name = self.name();
        let counterpart_name = if let Some(rest) = name.split_once("::reference_") {
            format!("{}::accelerated_{}", rest.0, rest.1)
        } else {
            let (module, func) = name.split_once("::accelerated_")?;
            format!("{module}::reference_{func}")
        };
        Self::ALL
            .iter()
            .copied()
            .find(|target| target.name() == counterpart_name)
    }

    /// Whether this target runs the reference path.
    pub fn is_reference(&self) -> bool {
        self.name().contains("::reference_")
    }
}

/// Runs the given target repeatedly for at least `duration` seconds after
/// waiting until `delay` seconds have passed.
pub fn benchmark(target: Target, duration: f64, delay: f64) -> Option<Measurement> {
    manta_profiling::benchmark::benchmark(
        |benchmarker| target.execute(benchmarker),
        duration,
        delay,
    )
}

/// Benchmarks both paths of the operation run by `target` and compares the
/// accelerated measurement against the reference one.
pub fn compare(target: Target, duration: f64) -> Option<(Measurement, Measurement, Comparison)> {
    let (reference, accelerated) = if target.is_reference() {
        (target, target.counterpart()?)
    } else {
        (target.counterpart()?, target)
    };
    let reference_measurement = benchmark(reference, duration, 0.0)?;
    let accelerated_measurement = benchmark(accelerated, duration, 0.0)?;
    let comparison = accelerated_measurement.compare_to(&reference_measurement);
    Some((reference_measurement, accelerated_measurement, comparison))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_has_a_counterpart() {
        for target in Target::ALL {
            let counterpart = target.counterpart().unwrap();
            assert_ne!(counterpart, *target);
            assert_ne!(counterpart.is_reference(), target.is_reference());
            assert_eq!(counterpart.counterpart(), Some(*target));
        }
    }

    #[test]
    fn target_names_include_module() {
        assert_eq!(
            Target::Vector4ReferenceDot.name(),
            "vector4::reference_dot"
        );
        assert_eq!(
            Target::ScalarAcceleratedInvSqrtFast.name(),
            "scalar::accelerated_inv_sqrt_fast"
        );
    }

    #[test]
    fn every_target_runs_and_gives_a_measurement() {
        for target in Target::ALL {
            let measurement = benchmark(*target, 0.0, 0.0).unwrap();
            assert!(measurement.iterations() >= 1);
        }
    }

    #[test]
    fn comparing_paths_measures_both() {
        let (reference, accelerated, _) = compare(Target::Vector2AcceleratedDot, 0.0).unwrap();
        assert!(reference.iterations() >= 1);
        assert!(accelerated.iterations() >= 1);
    }
}
