// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack symbolication engine for Loom structured logging.
//!
//! This crate turns raw call-stack snapshots (sequences of opaque return
//! addresses) into readable frame descriptions:
//!
//! - [`SymbolSource`] - the narrow resolve-one-address service interface
//! - [`ProcessSymbols`] - resolution against the running process's symbol
//!   table, via the `backtrace` crate
//! - [`TableSymbols`] - a fixed in-memory address map for deterministic tests
//! - [`trace_lines`] - formats a snapshot as `"<function> <file>:<line>"`
//!   lines, with the [`UNKNOWN_FRAME`] sentinel for unresolvable addresses
//! - [`capture_stack`] - captures the current call stack as raw addresses
//!
//! # Example
//!
//! ```
//! use loom_logs_core::{ProgramCounter, SymbolizedFrame};
//! use loom_logs_symbolicate::{trace_lines, TableSymbols};
//!
//! let mut symbols = TableSymbols::new();
//! symbols.insert(
//!     ProgramCounter(0x1000),
//!     SymbolizedFrame {
//!         function: "app::handler".to_string(),
//!         file: "src/handler.rs".to_string(),
//!         line: 7,
//!     },
//! );
//!
//! let lines = trace_lines(&symbols, &[ProgramCounter(0x1000), ProgramCounter(0)]);
//! assert_eq!(lines, vec!["app::handler src/handler.rs:7", "unknown"]);
//! ```

pub mod capture;
pub mod demangle;
pub mod source;
pub mod trace;

pub use capture::capture_stack;
pub use demangle::{demangle_symbol, is_mangled_symbol};
pub use source::{ProcessSymbols, SymbolSource, TableSymbols};
pub use trace::{trace_lines, UNKNOWN_FRAME};
