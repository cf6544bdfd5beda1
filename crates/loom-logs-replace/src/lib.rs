// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Attribute replacement for Loom structured log records.
//!
//! The surrounding logging pipeline calls [`AttrReplacer::replace`] once per
//! attribute about to be written to a record. Depending on the configured
//! output format the replacer suppresses well-known header fields, rewrites
//! error-capable values into `{msg, trace}` groups, or passes the attribute
//! through untouched. Replacement is a pure function of (format, group path,
//! attribute) and is safe to call from concurrent log handlers.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use loom_logs_core::{Attr, AttrValue, ProgramCounter, SymbolizedFrame, TracedError};
//! use loom_logs_replace::{AttrReplacer, LogFormat, LogsConfig};
//! use loom_logs_symbolicate::TableSymbols;
//!
//! let mut symbols = TableSymbols::new();
//! symbols.insert(
//!     ProgramCounter(0x1000),
//!     SymbolizedFrame {
//!         function: "app::main".to_string(),
//!         file: "src/main.rs".to_string(),
//!         line: 12,
//!     },
//! );
//!
//! let config = LogsConfig { format: LogFormat::Json };
//! let replacer = AttrReplacer::new(&config, Arc::new(symbols));
//!
//! let err = TracedError::new("connection reset", vec![ProgramCounter(0x1000)]);
//! let replaced = replacer
//!     .replace(&[], Attr::any("error", Arc::new(err)))
//!     .expect("not suppressed");
//!
//! assert_eq!(
//!     replaced,
//!     Attr::group(
//!         "error",
//!         vec![
//!             Attr::string("msg", "connection reset"),
//!             Attr::new(
//!                 "trace",
//!                 AttrValue::List(vec![AttrValue::String(
//!                     "app::main src/main.rs:12".to_string(),
//!                 )]),
//!             ),
//!         ],
//!     )
//! );
//! ```

pub mod config;
pub mod replacer;

pub use config::{LogFormat, LogsConfig};
pub use replacer::AttrReplacer;
