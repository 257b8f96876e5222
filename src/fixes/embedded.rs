//! Fix notes compiled into the binary
//!
//! Add a note by dropping `vX.Y.Z.md` into the top-level `fixes/` directory
//! and listing it here.

/// `(file name, content)` of every bundled fix note
pub const BUNDLED_FIXES: &[(&str, &str)] = &[
    ("v0.110.0.md", include_str!("../../fixes/v0.110.0.md")),
    ("v0.120.3.md", include_str!("../../fixes/v0.120.3.md")),
    ("v0.123.0.md", include_str!("../../fixes/v0.123.0.md")),
    ("v0.124.0.md", include_str!("../../fixes/v0.124.0.md")),
    ("v0.128.0.md", include_str!("../../fixes/v0.128.0.md")),
    ("v0.146.0.md", include_str!("../../fixes/v0.146.0.md")),
    ("v0.156.0.md", include_str!("../../fixes/v0.156.0.md")),
];
