use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use grideye::calculations::{raw_pixels_to_temperatures, NUM_PIXELS};
use grideye::{GridEyeDriver, DEFAULT_ADDRESS};
use grideye_test_data::frames::{FREEZER_FRAME, HAND_FRAME};
use grideye_test_data::mock_grideye_at_address;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pixels to Temperatures");

    group.bench_function("conversion only", |b| {
        b.iter_batched(
            || [0f32; NUM_PIXELS],
            |mut temperatures| raw_pixels_to_temperatures(&HAND_FRAME, &mut temperatures),
            BatchSize::SmallInput,
        )
    });

    let mocked = mock_grideye_at_address(DEFAULT_ADDRESS);
    let mut sensor = GridEyeDriver::new_i2c(mocked.clone(), DEFAULT_ADDRESS);
    sensor.initialize().unwrap();
    let mut use_hand = false;
    group.bench_function("sample", |b| {
        b.iter_batched(
            || {
                // Alternate frames so each sample sees new data
                use_hand = !use_hand;
                if use_hand {
                    mocked.update_frame(&HAND_FRAME);
                } else {
                    mocked.update_frame(&FREEZER_FRAME);
                }
            },
            |_| sensor.sample().unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
