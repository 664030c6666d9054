use manta_math::benchmark::benchmarks::vector4;
use manta_profiling::{benchmark::criterion, define_criterion_comparison};

define_criterion_comparison!(vector4, add);
define_criterion_comparison!(vector4, component_multiply);
define_criterion_comparison!(vector4, dot);
define_criterion_comparison!(vector4, magnitude);
define_criterion_comparison!(vector4, normalize);
define_criterion_comparison!(vector4, normalize_fast);
define_criterion_comparison!(vector4, project);
define_criterion_comparison!(vector4, distance);
define_criterion_comparison!(vector4, lerp);
define_criterion_comparison!(vector4, move_towards);
define_criterion_comparison!(vector4, round);
define_criterion_comparison!(vector4, distance_squared_int);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        add,
        component_multiply,
        dot,
        magnitude,
        normalize,
        normalize_fast,
        project,
        distance,
        lerp,
        move_towards,
        round,
        distance_squared_int,
);
criterion::criterion_main!(benches);
