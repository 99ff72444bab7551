//! Tasty: static analysis for the Tasty styling mini-language.
//!
//! # Example
//!
//! ```
//! use tasty_lib::config::MergedConfig;
//! use tasty_lib::defs::{StyleObject, StyleProperty, StyleValue};
//! use tasty_lib::document::analyze;
//!
//! let forest = [StyleObject::new(vec![StyleProperty::new(
//!     "padding",
//!     (0, 7).into(),
//!     StyleValue::string("2xx", 10),
//! )])];
//!
//! let analysis = analyze(&forest, &MergedConfig::new());
//! assert_eq!(analysis.diagnostics.len(), 1);
//! eprintln!("{}", analysis.diagnostics.printer().render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cache;
pub mod config;
pub mod defs;
pub mod diagnostics;
pub mod document;
pub mod dump;
pub mod names;
pub mod state;
pub mod validate;
pub mod value;


pub use config::{ConfigError, ConfigResolver, MergedConfig};
pub use defs::LocalDefinitions;
pub use diagnostics::{Diagnostic, Diagnostics, DiagnosticsPrinter, Severity};
pub use document::{DocumentAnalysis, DocumentCache, analyze};
pub use names::KnownNames;
