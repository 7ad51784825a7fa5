use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// target/<profile>, found by walking up from OUT_DIR
fn profile_dir() -> Option<PathBuf> {
    let out_dir = env::var("OUT_DIR").ok()?;
    let profile = env::var("PROFILE").ok()?;
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let Some(workspace_root) = manifest_dir.parent().and_then(Path::parent) else {
        return;
    };
    let source = workspace_root.join("config.toml");
    if !source.exists() {
        println!("cargo:warning=config.toml not found at {source:?}, defaults apply");
        return;
    }

    // Ship config.toml next to the binary so a release folder runs as-is
    match profile_dir() {
        Some(dir) => {
            let dest = dir.join("config.toml");
            if let Err(e) = fs::copy(&source, &dest) {
                println!("cargo:warning=failed to copy config.toml: {e}");
            }
        }
        None => println!("cargo:warning=target profile directory not found"),
    }
}
