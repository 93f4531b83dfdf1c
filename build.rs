//! This build script copies the `memory.x` file from the crate root into a directory where
//! the linker can always find it at build time, and records the build time for the firmware
//! clock.

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() -> std::io::Result<()> {
    let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));

    // Only the firmware links against the nRF52832 memory layout
    if env::var_os("CARGO_FEATURE_FIRMWARE").is_some() {
        File::create(out.join("memory.x"))?.write_all(include_bytes!("memory.x"))?;
        println!("cargo:rustc-link-search={}", out.display());
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Create rs file with current UTC time
    File::create(out.join("utc.rs"))?.write_fmt(format_args!(
        "const UTC_TIME: i64 = {:?};",
        chrono::Utc::now().timestamp()
    ))?;

    // No `rerun-if-changed`: rerun whenever a package file changes so the time stays fresh.
    Ok(())
}
