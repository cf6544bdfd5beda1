// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rust symbol demangling for frame names.

use rustc_demangle::demangle;

/// Check if a symbol appears to be a Rust mangled symbol.
pub fn is_mangled_symbol(symbol: &str) -> bool {
	symbol.starts_with("_ZN") || symbol.starts_with("_R")
}

/// Demangle a Rust symbol name, returning the input unchanged when it is not
/// mangled.
pub fn demangle_symbol(symbol: &str) -> String {
	demangle(symbol).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detects_mangled_prefixes() {
		assert!(is_mangled_symbol("_ZN4core9panicking5panic17h1234567890abcdefE"));
		assert!(is_mangled_symbol("_RNvNtCs1234_7mycrate7handler"));
		assert!(!is_mangled_symbol("regular_function"));
		assert!(!is_mangled_symbol("__libc_start_main"));
	}

	#[test]
	fn demangles_legacy_symbol() {
		let demangled = demangle_symbol("_ZN4core9panicking5panic17h1234567890abcdefE");
		assert!(
			demangled.contains("core::panicking::panic"),
			"unexpected demangling: {demangled}"
		);
	}

	#[test]
	fn leaves_plain_names_unchanged() {
		assert_eq!(demangle_symbol("app::main"), "app::main");
	}
}
