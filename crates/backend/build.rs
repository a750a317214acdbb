// Places the workspace config.toml beside the compiled binary, where
// `shared::config::load_config` looks for it at startup.
use std::path::{Path, PathBuf};

fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").ok()?);
    let profile = std::env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|dir| dir.ends_with(&profile))
        .map(Path::to_path_buf)
}

fn main() {
    let config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    println!("cargo:rerun-if-changed={}", config.display());

    let Some(dest_dir) = profile_dir() else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    if !config.exists() {
        println!("cargo:warning=no config.toml in workspace root, embedded defaults apply");
        return;
    }

    if let Err(e) = std::fs::copy(&config, dest_dir.join("config.toml")) {
        println!("cargo:warning=copying config.toml failed: {}", e);
    }
}
