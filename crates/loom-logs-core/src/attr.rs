// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Key/value attributes within a structured log record.

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::sync::Arc;

use crate::capability::AnyValue;
use crate::error::Result;

/// Well-known record key for the timestamp field.
pub const TIME_KEY: &str = "time";
/// Well-known record key for the severity field.
pub const LEVEL_KEY: &str = "level";
/// Well-known record key for the log message field.
pub const MESSAGE_KEY: &str = "msg";

/// A single key/value attribute of a log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
	pub key: String,
	pub value: AttrValue,
}

/// The value side of an attribute.
///
/// Scalars and groups are inert data. [`AttrValue::Any`] carries an opaque
/// host value whose behavior is discovered through the [`AnyValue`]
/// capability queries, never by inspecting its shape.
#[derive(Debug, Clone)]
pub enum AttrValue {
	String(String),
	Int(i64),
	Uint(u64),
	Float(f64),
	Bool(bool),
	Time(DateTime<Utc>),
	/// An ordered group of nested attributes; the group key is carried by
	/// the enclosing [`Attr`].
	Group(Vec<Attr>),
	List(Vec<AttrValue>),
	Any(Arc<dyn AnyValue>),
}

impl Attr {
	pub fn new(key: impl Into<String>, value: AttrValue) -> Self {
		Self {
			key: key.into(),
			value,
		}
	}

	pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self::new(key, AttrValue::String(value.into()))
	}

	pub fn int(key: impl Into<String>, value: i64) -> Self {
		Self::new(key, AttrValue::Int(value))
	}

	pub fn float(key: impl Into<String>, value: f64) -> Self {
		Self::new(key, AttrValue::Float(value))
	}

	pub fn boolean(key: impl Into<String>, value: bool) -> Self {
		Self::new(key, AttrValue::Bool(value))
	}

	pub fn time(key: impl Into<String>, value: DateTime<Utc>) -> Self {
		Self::new(key, AttrValue::Time(value))
	}

	pub fn group(key: impl Into<String>, attrs: Vec<Attr>) -> Self {
		Self::new(key, AttrValue::Group(attrs))
	}

	pub fn any(key: impl Into<String>, value: Arc<dyn AnyValue>) -> Self {
		Self::new(key, AttrValue::Any(value))
	}

	/// Whether the key is one of the well-known record keys handled by the
	/// record header rather than the attribute list.
	pub fn is_well_known(&self) -> bool {
		matches!(self.key.as_str(), TIME_KEY | LEVEL_KEY | MESSAGE_KEY)
	}

	/// Encode this attribute as a JSON value for the structured sink.
	pub fn to_json(&self) -> Result<serde_json::Value> {
		Ok(serde_json::to_value(self)?)
	}
}

impl PartialEq for AttrValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::String(a), Self::String(b)) => a == b,
			(Self::Int(a), Self::Int(b)) => a == b,
			(Self::Uint(a), Self::Uint(b)) => a == b,
			(Self::Float(a), Self::Float(b)) => a == b,
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Time(a), Self::Time(b)) => a == b,
			(Self::Group(a), Self::Group(b)) => a == b,
			(Self::List(a), Self::List(b)) => a == b,
			// Opaque values have no structural equality; compare identity.
			(Self::Any(a), Self::Any(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl Serialize for Attr {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(1))?;
		map.serialize_entry(&self.key, &self.value)?;
		map.end()
	}
}

impl Serialize for AttrValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::String(v) => serializer.serialize_str(v),
			Self::Int(v) => serializer.serialize_i64(*v),
			Self::Uint(v) => serializer.serialize_u64(*v),
			Self::Float(v) => serializer.serialize_f64(*v),
			Self::Bool(v) => serializer.serialize_bool(*v),
			Self::Time(v) => serializer.serialize_str(&v.to_rfc3339()),
			Self::Group(attrs) => {
				let mut map = serializer.serialize_map(Some(attrs.len()))?;
				for attr in attrs {
					map.serialize_entry(&attr.key, &attr.value)?;
				}
				map.end()
			}
			Self::List(values) => {
				let mut seq = serializer.serialize_seq(Some(values.len()))?;
				for value in values {
					seq.serialize_element(value)?;
				}
				seq.end()
			}
			Self::Any(value) => match value.error_message() {
				Some(msg) => serializer.serialize_str(&msg),
				None => serializer.serialize_str(&format!("{value:?}")),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::capability::DynError;
	use serde_json::json;

	#[test]
	fn well_known_keys() {
		assert!(Attr::string(TIME_KEY, "now").is_well_known());
		assert!(Attr::string(LEVEL_KEY, "info").is_well_known());
		assert!(Attr::string(MESSAGE_KEY, "hello").is_well_known());
		assert!(!Attr::string("request_id", "abc").is_well_known());
	}

	#[test]
	fn group_serializes_as_map() {
		let attr = Attr::group(
			"error",
			vec![
				Attr::string("msg", "test error"),
				Attr::new(
					"trace",
					AttrValue::List(vec![AttrValue::String("unknown".to_string())]),
				),
			],
		);
		let value = attr.to_json().unwrap();
		assert_eq!(value, json!({"error": {"msg": "test error", "trace": ["unknown"]}}));
	}

	#[test]
	fn any_serializes_as_its_message() {
		let attr = Attr::any("error", Arc::new(DynError::new("boom")));
		let value = attr.to_json().unwrap();
		assert_eq!(value, json!({"error": "boom"}));
	}

	#[test]
	fn any_compares_by_identity() {
		let shared: Arc<dyn AnyValue> = Arc::new(DynError::new("boom"));
		let a = Attr::any("error", Arc::clone(&shared));
		let b = Attr::any("error", Arc::clone(&shared));
		let c = Attr::any("error", Arc::new(DynError::new("boom")));
		assert_eq!(a, b);
		assert_ne!(a, c);
	}

	#[test]
	fn scalars_compare_by_value() {
		assert_eq!(Attr::int("n", 7), Attr::int("n", 7));
		assert_ne!(Attr::int("n", 7), Attr::int("n", 8));
		assert_ne!(Attr::int("n", 7), Attr::string("n", "7"));
	}
}
