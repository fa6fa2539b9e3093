use std::num::NonZeroUsize;

use bfd_machine::Machine;
use bfd_test_utils::{NullWriter, HELLO_WORLD_PROGRAM};
use criterion::{criterion_group, criterion_main, Criterion};

fn hello_world_benchmark(c: &mut Criterion) {
    let cell_count = NonZeroUsize::new(100).expect("cell count cannot be zero");
    c.bench_function("hello_world", |b| {
        b.iter(|| {
            let mut machine = Machine::new(
                HELLO_WORLD_PROGRAM,
                cell_count,
                None,
                Some(Box::new(NullWriter)),
            );
            machine.run().expect("benchmark program must run cleanly");
        });
    });
}

criterion_group!(benches, hello_world_benchmark);
criterion_main!(benches);
