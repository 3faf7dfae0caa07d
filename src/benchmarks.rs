extern crate rand;
extern crate rand_chacha;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use digitlist::{add, karatsuba_mul, schoolbook_mul, subtract, DigitList};
use rand::{Rng, SeedableRng};

fn random_digit_list(rng: &mut rand_chacha::ChaCha8Rng, size: usize) -> DigitList {
    let mut digits = vec![0u32; size];
    for x in digits.iter_mut() {
        *x = rng.gen_range(0..10);
    }
    // Keep the requested width.
    digits[0] = rng.gen_range(1..10);
    DigitList::from_digits(&digits).unwrap()
}
fn bench_schoolbook_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digit_list(&mut rng, 1000);
    let b = random_digit_list(&mut rng, 1000);
    c.bench_function("schoolbook_mul_1k", |bench| {
        bench.iter(|| schoolbook_mul(black_box(&a), black_box(&b)))
    });
}
fn bench_karatsuba_mul_100(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digit_list(&mut rng, 100);
    let b = random_digit_list(&mut rng, 100);
    c.bench_function("karatsuba_mul_100", |bench| {
        bench.iter(|| karatsuba_mul(black_box(&a), black_box(&b)));
    });
}
fn bench_karatsuba_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digit_list(&mut rng, 1000);
    let b = random_digit_list(&mut rng, 1000);
    c.bench_function("karatsuba_mul_1k", |bench| {
        bench.iter(|| karatsuba_mul(black_box(&a), black_box(&b)));
    });
}
fn bench_add(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digit_list(&mut rng, 1000);
    let b = random_digit_list(&mut rng, 1000);
    c.bench_function("add_1k", |bench| {
        bench.iter(|| add(black_box(&a), black_box(&b)));
    });
}
fn bench_subtract(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digit_list(&mut rng, 1000);
    let b = random_digit_list(&mut rng, 999);
    c.bench_function("subtract_1k", |bench| {
        bench.iter(|| subtract(black_box(&a), black_box(&b)));
    });
}

fn profiled() -> Criterion {
    Criterion::default().sample_size(10)
}
criterion_group!(
    name = benches;
    config = profiled();
    targets =
        bench_schoolbook_mul,
        bench_karatsuba_mul_100,
        bench_karatsuba_mul,
        bench_add,
        bench_subtract,
);
criterion_main!(benches);
