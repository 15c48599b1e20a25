//! Custom cargo commands for the arrayseq crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run each fuzz target briefly
//!   cargo xtask kani      - Run Kani proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets defined in fuzz/Cargo.toml
const FUZZ_TARGETS: &[&str] = &["operation_script", "shift_boundaries"];

/// Seconds each fuzz target runs under `cargo xtask fuzz`
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + constants)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for {}s (requires cargo-fuzz, nightly)
  kani      Run Kani proofs (requires cargo-kani)
"#,
        FUZZ_SECONDS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("arrayseq Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers
    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    // Step 2: Run tests
    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Verify constant alignment with the Kani crate
    println!("[4/4] Verifying src/kani-proofs constant alignment...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for a bounded time
fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);

    for &target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, FUZZ_SECONDS);
        run_cargo_in(
            &fuzz_dir,
            &["+nightly", "fuzz", "run", target, "--", &max_time],
        )?;
    }

    println!("\n✓ Fuzz targets ran clean");
    Ok(())
}

/// Run Kani proofs
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    run_cargo_in(&kani_dir, &["kani"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// The Kani crate carries its own copy of the growth rule; make sure the
/// default capacity it proves against is the one the library ships.
fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let array_list_rs = std::fs::read_to_string(root.join("src/array_list.rs"))
        .context("Failed to read src/array_list.rs")?;
    let kani_rs = std::fs::read_to_string(root.join("kani-proofs/src/lib.rs"))
        .context("Failed to read kani-proofs/src/lib.rs")?;

    let Some(library) = extract_const(&array_list_rs, "DEFAULT_CAPACITY") else {
        bail!("DEFAULT_CAPACITY not found in src/array_list.rs");
    };
    let Some(proofs) = extract_const(&kani_rs, "DEFAULT_CAPACITY") else {
        bail!("DEFAULT_CAPACITY not found in kani-proofs/src/lib.rs");
    };

    if library != proofs {
        bail!(
            "DEFAULT_CAPACITY mismatch: src={} kani-proofs={}",
            library,
            proofs
        );
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<usize> {
    // Look for "pub const DEFAULT_CAPACITY: usize = 10;"
    let pattern = format!("const {}: usize =", name);
    content
        .lines()
        .find(|line| line.contains(&pattern))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.trim().trim_end_matches(';').trim())
        .and_then(|value| value.parse().ok())
}
