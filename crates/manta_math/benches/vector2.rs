use manta_math::benchmark::benchmarks::vector2;
use manta_profiling::{benchmark::criterion, define_criterion_comparison};

define_criterion_comparison!(vector2, add);
define_criterion_comparison!(vector2, dot);
define_criterion_comparison!(vector2, magnitude);
define_criterion_comparison!(vector2, normalize);
define_criterion_comparison!(vector2, normalize_fast);
define_criterion_comparison!(vector2, distance);
define_criterion_comparison!(vector2, lerp);
define_criterion_comparison!(vector2, move_towards);
define_criterion_comparison!(vector2, round);
define_criterion_comparison!(vector2, add_int);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        add,
        dot,
        magnitude,
        normalize,
        normalize_fast,
        distance,
        lerp,
        move_towards,
        round,
        add_int,
);
criterion::criterion_main!(benches);
