use super::code::*;
use super::FibonacciRunner;
use crate::registry::AlgorithmRunner;

#[test]
fn test_known_values() {
    let expected: [u64; 11] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
    for (n, &value) in expected.iter().enumerate() {
        let n = n as u32;
        assert_eq!(fib_recursive(n), value, "recursive fib({})", n);
        assert_eq!(fib_iterative(n), value, "iterative fib({})", n);
        assert_eq!(fib_fast_doubling(n), value, "fast doubling fib({})", n);
    }
}

#[test]
fn test_large_n_without_recursion() {
    // fib(90) still fits in u64
    assert_eq!(fib_iterative(90), 2_880_067_194_370_816_120);
    assert_eq!(fib_fast_doubling(90), 2_880_067_194_370_816_120);
}

#[test]
fn test_depth_for_default_sizes() {
    let depths: Vec<u32> = [64, 256, 1024, 4096, 16384]
        .iter()
        .map(|&s| depth_for_size(s))
        .collect();
    assert_eq!(depths, vec![12, 16, 20, 24, 28]);
}

#[test]
fn test_depth_is_clamped() {
    assert_eq!(depth_for_size(0), 2);
    assert_eq!(depth_for_size(1), 2);
    assert_eq!(depth_for_size(usize::MAX), MAX_DEPTH);
}

#[test]
fn test_complexity_n_uses_depth() {
    assert_eq!(FibonacciRunner.complexity_n(1024), 20);
}

#[test]
fn test_runner_verify() {
    FibonacciRunner.verify().expect("all fibonacci variants agree");
}

#[test]
fn test_closure_result_is_fib_of_depth() {
    let runner = FibonacciRunner;
    let mut closures = runner.get_variant_closures(64, 0);
    for closure in &mut closures {
        let (_, value) = (closure.run)();
        assert_eq!(value, Some(144.0), "variant {}", closure.name);
    }
}
