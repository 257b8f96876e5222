//! Version command implementation

use crate::error::Result;
use crate::fixes::embedded::BUNDLED_FIXES;

/// Run version command
pub fn run() -> Result<()> {
    println!("fixnotes {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Bundled fix notes: {}", BUNDLED_FIXES.len());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
