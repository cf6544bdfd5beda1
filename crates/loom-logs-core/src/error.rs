// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the log attribute pipeline.

use thiserror::Error;

/// Errors that can occur while configuring or encoding log attributes.
///
/// Attribute replacement and stack resolution themselves are total: an
/// unresolvable address becomes the `unknown` sentinel and a non-error value
/// simply passes through, neither produces a [`LogsError`].
#[derive(Debug, Error)]
pub enum LogsError {
	#[error("invalid log format: {0}")]
	InvalidFormat(String),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for log attribute operations.
pub type Result<T> = std::result::Result<T, LogsError>;
