// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The attribute replacer.

use std::sync::Arc;

use loom_logs_core::{Attr, AttrValue};
use loom_logs_symbolicate::{trace_lines, SymbolSource};

use crate::config::LogsConfig;

/// Rewrites one attribute at a time on behalf of the record encoder.
///
/// Holds only immutable state (the output format and a symbol source), so a
/// single replacer can be shared across concurrent log handlers.
pub struct AttrReplacer {
	pretty: bool,
	symbols: Arc<dyn SymbolSource>,
}

impl AttrReplacer {
	pub fn new(config: &LogsConfig, symbols: Arc<dyn SymbolSource>) -> Self {
		Self {
			pretty: config.format.is_pretty(),
			symbols,
		}
	}

	/// Decide what to emit for one attribute. `None` suppresses it.
	///
	/// `_groups` is the group path the attribute is nested under; it is
	/// carried as context for the encoder and does not change the outcome.
	pub fn replace(&self, _groups: &[String], attr: Attr) -> Option<Attr> {
		if attr.is_well_known() {
			// Pretty rendering draws time, level and message through the
			// record header; emitting them again here would duplicate them.
			if self.pretty {
				return None;
			}
			return Some(attr);
		}

		if let Some(rewritten) = self.rewrite_error(&attr) {
			return Some(Attr::new(attr.key, rewritten));
		}

		Some(attr)
	}

	/// Rewrite an error-capable opaque value into a `{msg, trace}` group.
	///
	/// `trace` appears only when the value exposes the stack capability; an
	/// empty captured stack yields `trace: []`, which is observably
	/// different from no `trace` field at all.
	fn rewrite_error(&self, attr: &Attr) -> Option<AttrValue> {
		let AttrValue::Any(value) = &attr.value else {
			return None;
		};
		let msg = value.error_message()?;

		let mut fields = vec![Attr::string("msg", msg)];
		if let Some(stack) = value.stack_capture() {
			let lines = trace_lines(self.symbols.as_ref(), stack);
			fields.push(Attr::new(
				"trace",
				AttrValue::List(lines.into_iter().map(AttrValue::String).collect()),
			));
		}

		Some(AttrValue::Group(fields))
	}
}
