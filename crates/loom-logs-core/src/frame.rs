// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Program counters and resolved stack frames.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw return address inside a call-stack snapshot.
///
/// Snapshots are immutable once captured and ordered innermost frame first.
/// The address is opaque to everything except a symbol source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramCounter(pub usize);

impl fmt::Display for ProgramCounter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:#x}", self.0)
	}
}

/// The human-readable resolution of one return address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolizedFrame {
	pub function: String,
	pub file: String,
	pub line: u32,
}

impl fmt::Display for SymbolizedFrame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}:{}", self.function, self.file, self.line)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn program_counter_display_roundtrip(addr in any::<usize>()) {
			let shown = ProgramCounter(addr).to_string();
			let stripped = shown.strip_prefix("0x").unwrap();
			let parsed = usize::from_str_radix(stripped, 16).unwrap();
			prop_assert_eq!(parsed, addr);
		}
	}

	#[test]
	fn program_counter_displays_hex() {
		assert_eq!(ProgramCounter(0).to_string(), "0x0");
		assert_eq!(ProgramCounter(0xdead_beef).to_string(), "0xdeadbeef");
	}

	#[test]
	fn frame_displays_function_then_location() {
		let frame = SymbolizedFrame {
			function: "app::main".to_string(),
			file: "src/main.rs".to_string(),
			line: 42,
		};
		assert_eq!(frame.to_string(), "app::main src/main.rs:42");
	}
}
