// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Call-stack capture as raw return addresses.

use loom_logs_core::ProgramCounter;

/// Capture the current call stack as raw program counters, innermost frame
/// first.
///
/// The snapshot is immutable once returned; resolution happens later, when
/// the value carrying it is actually logged.
pub fn capture_stack() -> Vec<ProgramCounter> {
	let mut stack = Vec::new();
	backtrace::trace(|frame| {
		stack.push(ProgramCounter(frame.ip() as usize));
		true
	});
	stack
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn capture_returns_frames() {
		let stack = capture_stack();
		assert!(!stack.is_empty());
		// A test thread is tens of frames deep at most.
		assert!(stack.len() < 256);
	}
}
