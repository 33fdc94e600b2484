use super::code::*;
use super::MemcpyRunner;
use crate::registry::AlgorithmRunner;

#[test]
fn test_all_variants_copy() {
    let src: Vec<u8> = (0..=255).cycle().take(1000).collect();
    for variant in available_variants() {
        let mut dst = vec![0u8; src.len()];
        (variant.function)(&mut dst, &src);
        assert_eq!(dst, src, "variant {}", variant.name);
    }
}

#[test]
fn test_empty_copy() {
    for variant in available_variants() {
        let mut dst: [u8; 0] = [];
        (variant.function)(&mut dst, &[]);
    }
}

#[test]
#[should_panic]
fn test_length_mismatch_panics() {
    let mut dst = [0u8; 4];
    copy_libc(&mut dst, &[1, 2, 3]);
}

#[test]
fn test_checksum() {
    assert_eq!(checksum(&[]), 0);
    assert_eq!(checksum(&[7]), 21);
    assert_eq!(checksum(&[1, 2, 3, 4]), 1 + 3 + 4);
}

#[test]
fn test_bytes_per_run() {
    assert_eq!(MemcpyRunner.bytes_per_run(4096), Some(4096));
}

#[test]
fn test_runner_verify() {
    MemcpyRunner.verify().expect("all memcpy variants copy faithfully");
}

#[test]
fn test_closures_agree_on_checksum() {
    let runner = MemcpyRunner;
    let mut closures = runner.get_variant_closures(256, 11);
    let sums: Vec<_> = closures.iter_mut().map(|c| (c.run)().1).collect();
    assert!(sums.iter().all(|s| s.is_some() && *s == sums[0]));
}
