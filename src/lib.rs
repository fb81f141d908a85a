//! # colcheck-rs: Column Name Compliance Engine
//!
//! Validates dataset column names against a naming standard and checks the
//! data behind them:
//!
//! - **Filter usage**: controlled photometric filter names (`FUV_GALEX`,
//!   `u_SDSS`, ...) must be spelled exactly; misformatted, reordered or
//!   look-alike spellings are flagged with the canonical suggestion
//! - **Lexicon checks**: banned placeholder words, mistaken spellings of
//!   protected physical-quantity words, mandated casing of exception tokens
//! - **Structural checks**: character set, leading letter, no decimals,
//!   length limits, snake_case outside controlled tokens
//! - **Data checks**: coordinate ranges and the `-999` sentinel
//! - **UCD guessing** from the same lexicon
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 API Layer (DatasetValidator)                 │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Core          │  Detectors         │  Lexicon  │  I/O       │
//! │ • Config       │ • Names            │ • YAML    │ • Tables   │
//! │ • Errors       │ • Values           │ • Bundled │ • Reports  │
//! │ • Status       │ • UCD              │           │            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use colcheck_rs::DatasetValidator;
//!
//! fn main() -> colcheck_rs::Result<()> {
//!     let validator = DatasetValidator::with_defaults()?;
//!     let report = validator.validate_name("fuvGALEX");
//!     println!("valid: {}", report.is_valid());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// Core data structures shared by every check
pub mod core {
    //! Configuration, errors and check results.

    pub mod config;
    pub mod errors;
    pub mod status;
}

// Compliance checks
pub mod detectors {
    //! Column-name, data-value and UCD checks.

    pub mod names;
    pub mod ucd;
    pub mod values;
}

pub mod lexicon;

// Tables and report rendering
pub mod io {
    //! Table loading and report rendering.

    pub mod reports;
    pub mod table;
}

// Public API and engine interface
pub mod api {
    //! High-level validation engine.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use api::engine::DatasetValidator;
pub use api::results::{DatasetReport, NameSummary};
pub use core::config::ColcheckConfig;
pub use core::errors::{ColcheckError, Result, ResultExt};
pub use core::status::{State, Status};
pub use detectors::names::{validate_name, CheckKind, NameReport, NameValidator};
pub use io::reports::ReportRenderer;
pub use io::table::Table;
pub use lexicon::Lexicon;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
