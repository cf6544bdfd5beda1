// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Capability queries over opaque attribute values.
//!
//! The attribute replacer never inspects the concrete type of an opaque
//! value. It asks two independent questions: does the value expose a textual
//! error message, and does it expose a previously captured call stack. A
//! value may answer the first without the second; answering the second
//! without the first is legal but never rewritten.

use std::error::Error;
use std::fmt;

use crate::frame::ProgramCounter;

/// The closed capability set an opaque attribute value may implement.
///
/// Both queries default to `None`, so a plain host value carried as
/// [`AttrValue::Any`](crate::AttrValue::Any) matches neither capability
/// unless it opts in explicitly. Detection is behavior-based: a struct that
/// merely contains a field named `msg` or `stack` does not match.
pub trait AnyValue: fmt::Debug + Send + Sync {
	/// The textual description, when the value behaves as an error.
	fn error_message(&self) -> Option<String> {
		None
	}

	/// The captured call stack, innermost frame first, when the value
	/// carries one. `Some(&[])` means a stack was captured and was empty,
	/// which is distinct from not exposing the capability at all.
	fn stack_capture(&self) -> Option<&[ProgramCounter]> {
		None
	}
}

/// Adapter giving any [`std::error::Error`] the message capability.
#[derive(Debug)]
pub struct DynError(Box<dyn Error + Send + Sync>);

impl DynError {
	pub fn new(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
		Self(err.into())
	}
}

impl AnyValue for DynError {
	fn error_message(&self) -> Option<String> {
		Some(self.0.to_string())
	}
}

/// An error paired with the call stack captured where it was raised.
///
/// Implements both capabilities; the stack is owned and immutable for the
/// lifetime of the value.
#[derive(Debug)]
pub struct TracedError {
	error: Box<dyn Error + Send + Sync>,
	stack: Vec<ProgramCounter>,
}

impl TracedError {
	pub fn new(err: impl Into<Box<dyn Error + Send + Sync>>, stack: Vec<ProgramCounter>) -> Self {
		Self {
			error: err.into(),
			stack,
		}
	}
}

impl AnyValue for TracedError {
	fn error_message(&self) -> Option<String> {
		Some(self.error.to_string())
	}

	fn stack_capture(&self) -> Option<&[ProgramCounter]> {
		Some(&self.stack)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Plain {
		#[allow(dead_code)]
		msg: String,
	}

	impl AnyValue for Plain {}

	#[test]
	fn defaults_match_neither_capability() {
		let value = Plain {
			msg: "not an error".to_string(),
		};
		assert!(value.error_message().is_none());
		assert!(value.stack_capture().is_none());
	}

	#[test]
	fn dyn_error_has_message_only() {
		let value = DynError::new("test error");
		assert_eq!(value.error_message().as_deref(), Some("test error"));
		assert!(value.stack_capture().is_none());
	}

	#[test]
	fn traced_error_has_both_capabilities() {
		let value = TracedError::new("test error", vec![ProgramCounter(0x10), ProgramCounter(0x20)]);
		assert_eq!(value.error_message().as_deref(), Some("test error"));
		assert_eq!(
			value.stack_capture(),
			Some(&[ProgramCounter(0x10), ProgramCounter(0x20)][..])
		);
	}

	#[test]
	fn empty_capture_is_still_a_capture() {
		let value = TracedError::new("test error", Vec::new());
		assert_eq!(value.stack_capture(), Some(&[][..]));
	}
}
