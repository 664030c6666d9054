use manta_math::benchmark::benchmarks::scalar;
use manta_profiling::{benchmark::criterion, define_criterion_comparison};

define_criterion_comparison!(scalar, min);
define_criterion_comparison!(scalar, clamp);
define_criterion_comparison!(scalar, sqrt);
define_criterion_comparison!(scalar, inv_sqrt_fast);
define_criterion_comparison!(scalar, next_power_of_two);
define_criterion_comparison!(scalar, is_power_of_two);
define_criterion_comparison!(scalar, binomial_coefficient);
define_criterion_comparison!(scalar, smooth_step);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        min,
        clamp,
        sqrt,
        inv_sqrt_fast,
        next_power_of_two,
        is_power_of_two,
        binomial_coefficient,
        smooth_step,
);
criterion::criterion_main!(benches);
