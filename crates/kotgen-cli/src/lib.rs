//! Library surface of the kotgen CLI: input discovery and the per-file
//! conversion driver, kept out of `main` so integration tests can drive them
//! directly.

pub mod driver;

pub use driver::{DriveOptions, FileResult, convert_source, discover_inputs, drive_file};
