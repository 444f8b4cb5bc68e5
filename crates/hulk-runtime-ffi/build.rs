//! Regenerates `include/hulk_runtime.h` from the `extern "C"` surface.

use std::env;
use std::path::{Path, PathBuf};

const HEADER: &str = "hulk_runtime.h";

fn main() {
    let manifest_dir = PathBuf::from(
        env::var_os("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR for build scripts"),
    );

    println!("cargo:rerun-if-changed=cbindgen.toml");
    println!("cargo:rerun-if-changed=src");

    let header = emit_header(&manifest_dir);
    println!("cargo:rustc-env=HULK_RUNTIME_HEADER={}", header.display());
}

/// Run cbindgen over this crate and write the header under `include/`.
///
/// The file is only rewritten when its contents change, so downstream C
/// builds keyed on its mtime are not invalidated on every cargo build.
fn emit_header(manifest_dir: &Path) -> PathBuf {
    let config = cbindgen::Config::from_file(manifest_dir.join("cbindgen.toml"))
        .unwrap_or_else(|e| panic!("cbindgen.toml is invalid: {e}"));

    let include_dir = manifest_dir.join("include");
    std::fs::create_dir_all(&include_dir)
        .unwrap_or_else(|e| panic!("cannot create {}: {e}", include_dir.display()));

    let bindings = cbindgen::generate_with_config(manifest_dir, config)
        .unwrap_or_else(|e| panic!("cbindgen could not generate {HEADER}: {e}"));

    let header = include_dir.join(HEADER);
    bindings.write_to_file(&header);
    header
}
