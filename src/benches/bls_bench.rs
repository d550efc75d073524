#[macro_use]
extern crate criterion;
extern crate bls_curves;

use bls_curves::blsfp::BLSFp;
use bls_curves::blsfp2::BLSFp2;
use bls_curves::blsfp12::BLSFp12;
use bls_curves::blspairing::BLSPairing;
use bls_curves::blsparam::{BLS381Param, BLSParam};
use bls_curves::blspoint::BLSPoint;
use bls_curves::blspoint2::BLSPoint2;
use bls_curves::blszr::BLSZr;
use bls_curves::traits::BLSField;
use criterion::Criterion;
use crypto_bigint::Random;

#[allow(clippy::many_single_char_names)]
#[allow(non_snake_case)]
fn general_benchmark<BLS: BLSParam, const LIMBS: usize>(c: &mut Criterion) {
    let mut rng = rand::rng();
    let a: BLSFp<BLS, LIMBS> = BLSFp::random(&mut rng);
    let b: BLSFp<BLS, LIMBS> = BLSFp::random(&mut rng);
    let a2: BLSFp2<BLS, LIMBS> = BLSFp2::random(&mut rng);
    let b2: BLSFp2<BLS, LIMBS> = BLSFp2::random(&mut rng);
    let a12: BLSFp12<BLS, LIMBS> = BLSFp12::random(&mut rng);
    let b12: BLSFp12<BLS, LIMBS> = BLSFp12::random(&mut rng);
    let P: BLSPoint<BLS, LIMBS> = BLSPoint::random(&mut rng);
    let Q: BLSPoint2<BLS, LIMBS> = BLSPoint2::random(&mut rng);
    let s: BLSZr<BLS, 4> = BLSZr::random(&mut rng);

    // base and extension field arithmetic
    {
        c.bench_function("BLS12-381 F_p multiplication", move |bch| {
            bch.iter(|| std::hint::black_box(a)*std::hint::black_box(b))
        });
        c.bench_function("BLS12-381 F_p inversion", move |bch| {
            bch.iter(|| std::hint::black_box(a).inv())
        });
        c.bench_function("BLS12-381 F_p^2 multiplication", move |bch| {
            bch.iter(|| std::hint::black_box(a2)*std::hint::black_box(b2))
        });
        c.bench_function("BLS12-381 F_p^12 multiplication", move |bch| {
            bch.iter(|| std::hint::black_box(a12)*std::hint::black_box(b12))
        });
        c.bench_function("BLS12-381 F_p^12 final exponentiation", move |bch| {
            bch.iter(|| std::hint::black_box(a12).final_exp())
        });
    }

    // group arithmetic
    {
        c.bench_function("BLS12-381 G_1 doubling", move |bch| {
            bch.iter(|| std::hint::black_box(P).double(1))
        });
        c.bench_function("BLS12-381 G_1 addition", move |bch| {
            bch.iter(|| std::hint::black_box(P) + std::hint::black_box(P))
        });
        c.bench_function("BLS12-381 G_1 scalar multiplication", move |bch| {
            bch.iter(|| std::hint::black_box(s)*std::hint::black_box(P))
        });
        c.bench_function("BLS12-381 G_2 doubling", move |bch| {
            bch.iter(|| std::hint::black_box(Q).double(1))
        });
        c.bench_function("BLS12-381 G_2 addition", move |bch| {
            bch.iter(|| std::hint::black_box(Q) + std::hint::black_box(Q))
        });
        c.bench_function("BLS12-381 G_2 scalar multiplication", move |bch| {
            bch.iter(|| std::hint::black_box(s)*std::hint::black_box(Q))
        });
    }

    // pairings
    {
        c.bench_function("BLS12-381 optimal ate pairing", move |bch| {
            bch.iter(|| BLSPairing::pair(std::hint::black_box(&[P]), std::hint::black_box(&[Q])).unwrap())
        });
        c.bench_function("BLS12-381 Miller loop", move |bch| {
            bch.iter(|| BLSPairing::miller_loop(std::hint::black_box(&[P]), std::hint::black_box(&[Q])))
        });
    }
}

#[allow(non_snake_case)]
fn criterion_benchmark_BLS381(c: &mut Criterion) {
    type BLS = BLS381Param;
    const LIMBS: usize = BLS::LIMBS;
    general_benchmark::<BLS, LIMBS>(c);
}

criterion_group!(benches,
    criterion_benchmark_BLS381,
);
criterion_main!(benches);
