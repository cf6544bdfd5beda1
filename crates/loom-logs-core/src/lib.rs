// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Loom structured log attribute pipeline.
//!
//! This crate provides the shared data model used by the attribute replacer
//! (`loom-logs-replace`) and the stack symbolication engine
//! (`loom-logs-symbolicate`):
//!
//! - [`Attr`] / [`AttrValue`] - a key/value attribute within a log record,
//!   where a value is a scalar, a group of nested attributes, a list, or an
//!   opaque host value
//! - [`AnyValue`] - the capability trait opaque values implement to expose an
//!   error message and, optionally, a captured call stack
//! - [`ProgramCounter`] / [`SymbolizedFrame`] - raw return addresses from a
//!   stack capture and their human-readable resolutions

pub mod attr;
pub mod capability;
pub mod error;
pub mod frame;

pub use attr::{Attr, AttrValue, LEVEL_KEY, MESSAGE_KEY, TIME_KEY};
pub use capability::{AnyValue, DynError, TracedError};
pub use error::{LogsError, Result};
pub use frame::{ProgramCounter, SymbolizedFrame};
