// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Formatting a stack snapshot as readable trace lines.

use loom_logs_core::ProgramCounter;

use crate::source::SymbolSource;

/// Sentinel emitted for a frame that cannot be resolved.
pub const UNKNOWN_FRAME: &str = "unknown";

/// Resolve an ordered snapshot of return addresses into trace lines.
///
/// Each resolvable address becomes `"<function> <file>:<line>"`; an
/// unresolvable address becomes [`UNKNOWN_FRAME`] and still consumes one
/// output slot, so later frames keep resolving. Output order equals input
/// order, innermost frame first. No caching across calls.
pub fn trace_lines(symbols: &dyn SymbolSource, stack: &[ProgramCounter]) -> Vec<String> {
	stack
		.iter()
		.map(|pc| match symbols.resolve(*pc) {
			Some(frame) => frame.to_string(),
			None => UNKNOWN_FRAME.to_string(),
		})
		.collect()
}
