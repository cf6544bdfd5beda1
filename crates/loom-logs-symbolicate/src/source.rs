// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Symbol sources: mapping one return address to one frame.

use std::collections::HashMap;
use std::ffi::c_void;

use loom_logs_core::{ProgramCounter, SymbolizedFrame};

use crate::demangle::{demangle_symbol, is_mangled_symbol};

/// Maps a single return address to a resolved frame, or `None` when the
/// address is zero, unmapped, or otherwise unknown.
///
/// Implementations must be pure with respect to a single process lifetime:
/// the same address resolves to the same frame for as long as the process's
/// loaded code ranges do not change.
pub trait SymbolSource: Send + Sync {
	fn resolve(&self, pc: ProgramCounter) -> Option<SymbolizedFrame>;
}

/// Resolution against the running process's own symbol table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSymbols;

impl ProcessSymbols {
	pub fn new() -> Self {
		Self
	}
}

impl SymbolSource for ProcessSymbols {
	fn resolve(&self, pc: ProgramCounter) -> Option<SymbolizedFrame> {
		if pc.0 == 0 {
			return None;
		}

		let mut found = None;
		backtrace::resolve(pc.0 as *mut c_void, |symbol| {
			if found.is_some() {
				return;
			}
			let Some(name) = symbol.name() else {
				return;
			};
			let function = match name.as_str() {
				Some(raw) if is_mangled_symbol(raw) => demangle_symbol(raw),
				_ => name.to_string(),
			};
			let file = symbol
				.filename()
				.map(|path| path.display().to_string())
				.unwrap_or_else(|| "?".to_string());
			let line = symbol.lineno().unwrap_or(0);
			found = Some(SymbolizedFrame { function, file, line });
		});

		found
	}
}

/// A fixed address-to-frame table.
///
/// Useful as a deterministic [`SymbolSource`] in tests and documentation,
/// where resolving against the real process symbol table would make
/// expectations depend on the build.
#[derive(Debug, Clone, Default)]
pub struct TableSymbols {
	frames: HashMap<ProgramCounter, SymbolizedFrame>,
}

impl TableSymbols {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, pc: ProgramCounter, frame: SymbolizedFrame) {
		self.frames.insert(pc, frame);
	}

	pub fn len(&self) -> usize {
		self.frames.len()
	}

	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}
}

impl SymbolSource for TableSymbols {
	fn resolve(&self, pc: ProgramCounter) -> Option<SymbolizedFrame> {
		self.frames.get(&pc).cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn frame(function: &str, file: &str, line: u32) -> SymbolizedFrame {
		SymbolizedFrame {
			function: function.to_string(),
			file: file.to_string(),
			line,
		}
	}

	#[test]
	fn table_resolves_only_inserted_addresses() {
		let mut symbols = TableSymbols::new();
		symbols.insert(ProgramCounter(0x10), frame("a::b", "src/a.rs", 1));

		assert_eq!(
			symbols.resolve(ProgramCounter(0x10)),
			Some(frame("a::b", "src/a.rs", 1))
		);
		assert_eq!(symbols.resolve(ProgramCounter(0x11)), None);
		assert_eq!(symbols.resolve(ProgramCounter(0)), None);
	}

	#[test]
	fn process_symbols_rejects_null_address() {
		assert_eq!(ProcessSymbols::new().resolve(ProgramCounter(0)), None);
	}

	#[test]
	fn process_symbols_resolution_is_stable() {
		let symbols = ProcessSymbols::new();
		let stack = crate::capture_stack();
		assert!(!stack.is_empty());

		// Symbol tables do not change during a process lifetime, so two
		// resolutions of the same address must agree.
		let first = symbols.resolve(stack[0]);
		let second = symbols.resolve(stack[0]);
		assert_eq!(first, second);
	}
}
