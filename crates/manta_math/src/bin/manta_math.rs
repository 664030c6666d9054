use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::bail;
    use clap::{Parser, Subcommand};
    use manta_math::parity::{self, ParityConfig};

    /// Largest accepted operand range, keeping float to integer conversions in
    /// range for both paths.
    const MAX_RANGE: f32 = 1e6;

    #[derive(Debug, Parser)]
    #[command(about = "The Manta math kernel", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Check that the reference and accelerated paths agree on randomized
        /// operands
        Parity {
            /// Number of samples per operation
            #[arg(short, long, default_value_t = 1000)]
            count: usize,

            /// Seed for the operand generator
            #[arg(short, long, default_value_t = 0)]
            seed: u64,

            /// Float operands are drawn from [-range, range]
            #[arg(short, long, default_value_t = 10.0)]
            range: f32,
        },
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: manta_math::benchmark::Target,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from the program is started until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,

            /// Also run the other path of the same operation and compare the two
            #[arg(long)]
            compare: bool,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
        /// Print the SIMD backend used by the accelerated paths
        Backend,
    }

    pub fn main() -> Result<()> {
        init_logging()?;

        let cli = Cli::parse();

        match cli.command {
            Command::Parity { count, seed, range } => run_parity(count, seed, range),
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
                compare,
            } => run_benchmark(target, duration, delay, compare),
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                bail!("The `benchmark` subcommand requires the `benchmark` feature to be enabled.")
            }
            Command::Backend => {
                println!("{}", manta_math::simd::BACKEND_NAME);
                Ok(())
            }
        }
    }

    fn init_logging() -> Result<()> {
        env_logger::try_init()?;
        Ok(())
    }

    fn run_parity(count: usize, seed: u64, range: f32) -> Result<()> {
        if !(range.is_finite() && range > 0.0 && range <= MAX_RANGE) {
            bail!("The operand range must be in (0, {MAX_RANGE}], got {range}");
        }
        let config = ParityConfig {
            count,
            seed,
            range,
            ..ParityConfig::default()
        };
        let report = manta_log::with_timing_info_logging!(
            "Running parity checks with {} samples", count;
            parity::run_all(&config)
        );
        print!("{report}");
        report.ensure_passed()
    }

    #[cfg(feature = "benchmark")]
    fn run_benchmark(
        target: manta_math::benchmark::Target,
        duration: f64,
        delay: f64,
        compare: bool,
    ) -> Result<()> {
        use manta_math::benchmark;

        if compare {
            let outcome = manta_log::with_timing_info_logging!(
                "Comparing paths of {}", target.name();
                benchmark::compare(target, duration)
            );
            let Some((reference, accelerated, comparison)) = outcome else {
                bail!("Target {} has no counterpart to compare with", target.name());
            };
            println!(
                "reference: {:.2} ns, accelerated: {:.2} ns, {comparison:?}",
                reference.mean_nanos(),
                accelerated.mean_nanos()
            );
        } else {
            let measurement = manta_log::with_timing_info_logging!(
                "Benchmark {}", target.name();
                benchmark::benchmark(target, duration, delay)
            );
            if let Some(measurement) = measurement {
                println!(
                    "{}: {} iterations, {:.2} ns per iteration",
                    target.name(),
                    measurement.iterations(),
                    measurement.mean_nanos()
                );
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
