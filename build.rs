//! Build script compiling the C reference kernels.
//!
//! Every `src/**/*.c` file is built into one static library when a GCC,
//! MSVC or Apple Clang toolchain is found. The Rust side only registers the
//! `c-*` variants when `cfg(c_implementation_active)` is set.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    println!("cargo:rerun-if-changed=build.rs");

    let compiler = cc::Build::new().get_compiler();
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    let compiler_name = if compiler.is_like_clang() {
        if target_os == "macos" {
            Some("Apple Clang")
        } else {
            // Vanilla Clang shares the LLVM backend with rustc, so the
            // comparison would say nothing about libm.
            println!("cargo:warning=Vanilla Clang detected. C variants disabled (requires GCC, MSVC, or Apple Clang).");
            None
        }
    } else if compiler.is_like_gnu() {
        Some("GCC")
    } else if compiler.is_like_msvc() {
        Some("MSVC")
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, Apple Clang, or MSVC). C variants disabled.");
        None
    };

    let Some(compiler_name) = compiler_name else {
        return;
    };

    let sources: Vec<_> = match glob::glob("src/**/*.c") {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(e) => {
            println!("cargo:warning=Failed to scan for C sources: {}", e);
            return;
        }
    };

    if sources.is_empty() {
        return;
    }

    let mut build = cc::Build::new();
    for file in &sources {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    // No -ffast-math here: pow() must keep IEEE semantics to be comparable
    // with f64::powf.
    build.opt_level(3);

    let rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let encoded_rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    if rustflags.contains("target-cpu=native") || encoded_rustflags.contains("target-cpu=native") {
        build.flag_if_supported("-march=native");
    }

    build.compile("microbench_c");

    if target_os != "windows" && target_os != "macos" {
        println!("cargo:rustc-link-lib=m");
    }

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
