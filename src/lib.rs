// THEORY:
// This file is the main entry point for the `chroma_scan` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the
// public API that will be exposed to external consumers (host-language
// bindings, analysis scripts, batch tooling).
//
// The primary goal is to export the `ScanPipeline` and its associated data
// structures (`ScanConfig`, `ScanResult`, the bound types) as the clean,
// high-level interface for the scanning engine. The internal modules
// (`core_modules`) stay encapsulated; consumers build bound sets and channel
// planes, hand them to a pipeline, and receive result records.

pub mod core_modules;
pub mod parallel_pipeline;
pub mod pipeline;

// Re-export commonly used types.
pub use core_modules::bound_box::{BoundBox, BoundSet};
pub use core_modules::error::{BoundField, ScanError};
pub use core_modules::hsv_planes::hsv_planes::HsvPlanes;
pub use core_modules::range_scanner::{PixelCoord, ScanResult};
pub use parallel_pipeline::ParallelScanPipeline;
pub use pipeline::{ScanConfig, ScanPipeline};
