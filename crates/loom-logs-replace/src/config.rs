// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Output-format configuration for the log pipeline.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

use loom_logs_core::{LogsError, Result};

/// How records are rendered by the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
	/// Human-oriented console rendering; time, level and message are drawn
	/// by the record header, not the attribute list.
	Pretty,
	/// Machine-readable JSON records.
	#[default]
	Json,
}

impl LogFormat {
	pub fn is_pretty(self) -> bool {
		matches!(self, Self::Pretty)
	}
}

impl fmt::Display for LogFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Pretty => write!(f, "pretty"),
			Self::Json => write!(f, "json"),
		}
	}
}

impl FromStr for LogFormat {
	type Err = LogsError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"pretty" => Ok(Self::Pretty),
			"json" => Ok(Self::Json),
			_ => Err(LogsError::InvalidFormat(s.to_string())),
		}
	}
}

/// Logging configuration, fixed at pipeline initialization.
///
/// The format is passed into [`AttrReplacer`](crate::AttrReplacer) at
/// construction so replacement never reads process-wide mutable state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsConfig {
	#[serde(default)]
	pub format: LogFormat,
}

impl LogsConfig {
	/// Load the configuration from the `LOG_FORMAT` environment variable.
	/// An unset variable means the default JSON format.
	pub fn from_env() -> Result<Self> {
		match env::var("LOG_FORMAT") {
			Ok(raw) => Ok(Self { format: raw.parse()? }),
			Err(env::VarError::NotPresent) => Ok(Self::default()),
			Err(env::VarError::NotUnicode(raw)) => {
				Err(LogsError::InvalidFormat(raw.to_string_lossy().into_owned()))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn format_roundtrips_through_strings() {
		for format in [LogFormat::Pretty, LogFormat::Json] {
			let parsed: LogFormat = format.to_string().parse().unwrap();
			assert_eq!(parsed, format);
		}
	}

	#[test]
	fn invalid_format_is_rejected() {
		let err = "yaml".parse::<LogFormat>().unwrap_err();
		assert!(matches!(err, LogsError::InvalidFormat(s) if s == "yaml"));
	}

	#[test]
	fn default_format_is_json() {
		assert_eq!(LogsConfig::default().format, LogFormat::Json);
		assert!(!LogFormat::default().is_pretty());
	}

	#[test]
	fn config_deserializes_from_json() {
		let config: LogsConfig = serde_json::from_str(r#"{"format":"pretty"}"#).unwrap();
		assert_eq!(config.format, LogFormat::Pretty);

		let config: LogsConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config.format, LogFormat::Json);
	}
}
