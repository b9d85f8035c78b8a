use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ocho::prelude::*;

/// Tight loop that keeps the interpreter busy: draw a sprite at a
/// moving position, bump the coordinates, jump back.
#[rustfmt::skip]
const PROGRAM: &[u8] = &[
    0xA2, 0x10, // 0x200: LD I, 210
    0x60, 0x00, // 0x202: LD V0, 00
    0x61, 0x00, // 0x204: LD V1, 00
    0xD0, 0x14, // 0x206: DRW V0, V1, 4
    0x70, 0x07, // 0x208: ADD V0, 07
    0x71, 0x03, // 0x20A: ADD V1, 03
    0x12, 0x06, // 0x20C: JP 206
    0x00, 0x00, // 0x20E: (padding)
    0xAA, 0x55, // 0x210: sprite data
    0xAA, 0x55,
];

fn criterion_benchmark(c: &mut Criterion) {
    {
        let mut vm = OchoVm::new(OchoConf::default());
        vm.load_rom(PROGRAM).unwrap();

        c.bench_function("draw loop", |b| {
            b.iter(|| {
                let step_count = black_box(1000_usize);
                black_box(vm.run_steps(step_count))
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
