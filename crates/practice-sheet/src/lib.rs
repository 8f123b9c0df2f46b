//! Practice sheets for the move validator.
//!
//! A sheet sets up a board and lists moves with their expected verdicts.
//! [`run_sheet`] builds the board, asks it about every move and collects a
//! [`Report`] that can be printed as text or JSON.

pub mod config;
pub mod runner;

pub use config::{CheckConfig, PieceConfig, SheetConfig, SheetError, BUILTIN_SHEET};
pub use runner::{run_check, run_sheet, CheckResult, Report};
