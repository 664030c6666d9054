//! Benchmarking using `criterion`.

pub use criterion::*;

use crate::benchmark::Benchmarker;
use criterion::measurement::WallTime;

/// Defines a criterion benchmark function named `$name` that runs the
/// `reference_$name` and `accelerated_$name` targets in `$group` as two members
/// of the same benchmark group, so that criterion reports them side by side.
#[macro_export]
macro_rules! define_criterion_comparison {
    ($group:ident, $name:ident) => {
        $crate::define_criterion_comparison!($group, $name, None);
    };
    ($group:ident, $name:ident, $sample_count:expr) => {
        $crate::pastey::paste! {
            pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
                let mut benchmark_group = c.benchmark_group(stringify!($name));

                if let Some(sample_count) = Option::<usize>::from($sample_count) {
                    benchmark_group.sample_size(sample_count);
                }

                $group::[<reference_ $name>](
                    $crate::benchmark::criterion::CriterionGroupMemberBenchmarker::new(
                        &mut benchmark_group,
                        "reference",
                    ),
                );
                $group::[<accelerated_ $name>](
                    $crate::benchmark::criterion::CriterionGroupMemberBenchmarker::new(
                        &mut benchmark_group,
                        "accelerated",
                    ),
                );
                benchmark_group.finish();
            }
        }
    };
}

/// Benchmarks a function as one named member of a criterion benchmark group.
#[allow(missing_debug_implementations)]
pub struct CriterionGroupMemberBenchmarker<'a, 'c> {
    group: &'a mut BenchmarkGroup<'c, WallTime>,
    id: &'static str,
}

impl<'a, 'c> CriterionGroupMemberBenchmarker<'a, 'c> {
    pub fn new(group: &'a mut BenchmarkGroup<'c, WallTime>, id: &'static str) -> Self {
        Self { group, id }
    }
}

impl Benchmarker for CriterionGroupMemberBenchmarker<'_, '_> {
    fn benchmark<T>(self, mut f: &mut impl FnMut() -> T) {
        self.group.bench_function(self.id, |b| b.iter(&mut f));
    }
}

pub fn config() -> Criterion {
    Criterion::default()
}
