//! Output generation.
//!
//! One submodule: [`json`], which writes each cycle's displayed set as a
//! JSON snapshot for the presentation adapter.
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── technology.json
//!     └── business.json
//! ```

pub mod json;
