//! Benchmarking.

#[cfg(feature = "criterion")]
pub mod criterion;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Relative difference in mean duration below which two measured
/// implementations are considered equally fast.
pub const INSIGNIFICANT_RELATIVE_DIFFERENCE: f64 = 0.05;

pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

#[derive(Debug)]
pub struct BasicBenchmarker<'a> {
    duration: Duration,
    delayer: Delayer,
    measurement: &'a mut Option<Measurement>,
}

#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

/// The outcome of running a benchmarked function repeatedly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    iterations: u64,
    elapsed: Duration,
}

/// How a measured implementation compares to a baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Comparison {
    /// The difference in mean duration is insignificant.
    Similar { relative_difference: f64 },
    Faster { relative_difference: f64 },
    Slower { relative_difference: f64 },
}

impl<'a> BasicBenchmarker<'a> {
    pub fn new(
        duration: Duration,
        delayer: Delayer,
        measurement: &'a mut Option<Measurement>,
    ) -> Self {
        Self {
            duration,
            delayer,
            measurement,
        }
    }
}

impl Benchmarker for BasicBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.delayer.wait();
        let start = Instant::now();
        let mut iterations = 0;
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }
        *self.measurement = Some(Measurement::new(iterations, start.elapsed()));
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if remaining > Duration::ZERO {
            std::thread::sleep(remaining);
        }
    }
}

impl Measurement {
    pub fn new(iterations: u64, elapsed: Duration) -> Self {
        Self {
            iterations,
            elapsed,
        }
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The mean duration of a single iteration, in nanoseconds.
    pub fn mean_nanos(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e9 / self.iterations.max(1) as f64
    }

    /// Compares this measurement against the given baseline measurement.
    pub fn compare_to(&self, baseline: &Self) -> Comparison {
        let relative_difference = (self.mean_nanos() - baseline.mean_nanos()) / baseline.mean_nanos();
        if relative_difference.abs() < INSIGNIFICANT_RELATIVE_DIFFERENCE {
            Comparison::Similar {
                relative_difference,
            }
        } else if relative_difference > 0.0 {
            Comparison::Slower {
                relative_difference,
            }
        } else {
            Comparison::Faster {
                relative_difference,
            }
        }
    }
}

#[macro_export]
macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident),* $(,)?
        }
    ),* $(,)?
) => {
    $crate::pastey::paste! {
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[
                $(
                    $( Self::[<$module:camel $func:camel>], )*
                )*
            ];

            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => concat!(stringify!($module), "::", stringify!($func)), )*
                    )*
                }
            }

            fn execute(&self, benchmarker: impl $crate::benchmark::Benchmarker) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }
        }
    }};
}

/// Runs the function given to `execute` with a [`BasicBenchmarker`] that
/// repeats the benchmarked closure for at least `duration` seconds, starting no
/// earlier than `delay` seconds from now. Returns the resulting measurement, or
/// [`None`] if `execute` never invoked the benchmarker.
pub fn benchmark(
    execute: impl FnOnce(BasicBenchmarker<'_>),
    duration: f64,
    delay: f64,
) -> Option<Measurement> {
    let start = Instant::now();

    let delayer = Delayer::new(start, delay);
    let duration = Duration::from_secs_f64(duration);

    let mut measurement = None;
    let benchmarker = BasicBenchmarker::new(duration, delayer, &mut measurement);

    execute(benchmarker);

    if let Some(measurement) = &measurement {
        manta_log::debug!(
            "Completed {} iterations in {:.2} ms ({:.2} ns per iteration)",
            measurement.iterations(),
            measurement.elapsed().as_secs_f64() * 1e3,
            measurement.mean_nanos()
        );
    }
    measurement
}
