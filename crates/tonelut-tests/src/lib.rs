//! Integration tests for tonelut crates.
//!
//! These exercise the table and the pixel engine together through the
//! public API, the way an image-processing caller would. Set `RUST_LOG`
//! (for example `RUST_LOG=tonelut_ops=trace`) to see the engine's tracing.
