use super::code::*;
use super::PowRunner;
use crate::registry::AlgorithmRunner;
use crate::utils::timer::{measure_variants, PinStrategy, TimingConfig};

#[test]
fn test_literal_example_value() {
    // 1.2^1.2 = exp(1.2 * ln 1.2) ≈ 1.2445647
    let y = pow_original(LITERAL_BASE, LITERAL_EXPONENT);
    assert!((y - 1.244_564_747_203_977_6).abs() < 1e-12, "got {}", y);
    assert!((y - 1.2445).abs() < 1e-4);
}

#[test]
fn test_random_inputs_stay_in_range() {
    let inputs = PowInputs::random(4096, 1);
    assert_eq!(inputs.len(), 4096);
    for (base, exponent) in inputs.pairs() {
        assert!((1.0..10.0).contains(&base), "base {} out of range", base);
        assert!((1.0..10.0).contains(&exponent), "exponent {} out of range", exponent);
    }
}

#[test]
fn test_random_inputs_are_seeded() {
    let a = PowInputs::random(64, 99);
    let b = PowInputs::random(64, 99);
    let c = PowInputs::random(64, 100);
    assert_eq!(a.bases(), b.bases());
    assert_eq!(a.exponents(), b.exponents());
    assert_ne!(a.bases(), c.bases());
}

#[test]
fn test_f32_table_follows_operands() {
    let inputs = PowInputs::from_pairs(vec![4.0, 1.5], vec![0.5, 2.0]);
    assert_eq!(inputs.bases(), &[4.0, 1.5]);
    assert_eq!(inputs.exponents(), &[0.5, 2.0]);

    // Both precisions read the same operand pairs
    let f64_last = PowKernel::Table(pow_original).run(&inputs);
    let f32_last = PowKernel::TableF32(pow_f32).run(&inputs);
    assert_eq!(f64_last, 2.25);
    assert_eq!(f32_last, 2.25);
}

#[test]
fn test_powers_finite_and_positive_over_range() {
    let inputs = PowInputs::random(2048, 7);
    for (base, exponent) in inputs.pairs() {
        let y = pow_original(base, exponent);
        assert!(y.is_finite() && y >= 1.0, "pow({}, {}) = {}", base, exponent, y);
        // Upper bound: 10^10
        assert!(y < 1e10);
    }
}

#[test]
fn test_range_corners() {
    assert_eq!(pow_original(1.0, 9.999), 1.0);
    assert_eq!(pow_original(9.5, 1.0), 9.5);
    let near_max = pow_original(9.999_999, 9.999_999);
    assert!(near_max.is_finite() && near_max < 1e10);
}

#[test]
fn test_exp_ln_matches_powf() {
    let inputs = PowInputs::random(512, 3);
    for (base, exponent) in inputs.pairs() {
        let expected = base.powf(exponent);
        let rel = (pow_exp_ln(base, exponent) - expected).abs() / expected;
        assert!(rel < 1e-12, "rel error {} at pow({}, {})", rel, base, exponent);
    }
}

#[test]
fn test_kernel_run_returns_last_value() {
    let inputs = PowInputs::from_pairs(vec![2.0, 3.0], vec![3.0, 2.0]);
    assert_eq!(PowKernel::Table(pow_original).run(&inputs), 9.0);
    assert_eq!(PowKernel::TableF32(pow_f32).run(&inputs), 9.0);

    let literal = PowKernel::Literal(pow_original).run(&inputs);
    let opaque = PowKernel::Opaque(pow_original).run(&inputs);
    assert_eq!(literal, opaque);
    assert!((literal - 1.2445).abs() < 1e-4);
}

#[test]
fn test_kernel_run_on_empty_table() {
    let inputs = PowInputs::random(0, 0);
    assert!(inputs.is_empty());
    assert_eq!(PowKernel::Literal(pow_original).run(&inputs), 0.0);
    assert_eq!(PowKernel::Table(pow_original).run(&inputs), 0.0);
}

#[test]
#[should_panic(expected = "same length")]
fn test_from_pairs_rejects_mismatch() {
    PowInputs::from_pairs(vec![1.0], vec![]);
}

#[test]
fn test_variant_names() {
    let names: Vec<_> = available_variants().iter().map(|v| v.name).collect();
    assert_eq!(&names[..5], &["original", "black_box", "random", "f32", "exp_ln"]);
    assert_eq!(names.contains(&"c-original"), C_IMPL_AVAILABLE);
}

#[test]
fn test_runner_verify() {
    PowRunner.verify().expect("all pow variants agree with powf");
}

#[test]
fn test_closures_report_results() {
    let runner = PowRunner;
    let closures = runner.get_variant_closures(16, 42);
    assert_eq!(closures.len(), runner.available_variants().len());

    let config = TimingConfig {
        runs_per_variant: 3,
        warmup_iterations: 1,
        pin_strategy: PinStrategy::Global,
        schedule_seed: Some(1),
    };
    let results = measure_variants(closures, &config);

    let original = results.iter().find(|r| r.name == "original").expect("original");
    let value = original.result_sample.expect("result sample");
    assert!((value - 1.2445).abs() < 1e-4);

    let inputs = PowInputs::random(16, 42);
    let (base, exponent) = inputs.pairs().last().expect("non-empty");
    let random = results.iter().find(|r| r.name == "random").expect("random");
    assert_eq!(random.result_sample, Some(base.powf(exponent)));
}
