// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error classification shared between the schema layer and the node runtime

use serde::{Deserialize, Serialize};

/// Error category for retry/routing decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Temporary failure - retry is likely to succeed
    Transient,
    /// Non-recoverable failure - human intervention may help
    Permanent,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transient => "transient",
            ErrorCategory::Permanent => "permanent",
        }
    }
}

/// Error severity for logging/alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational only
    Info,
    /// Expected failure, degraded but recoverable
    Warning,
    /// Operation failed
    #[default]
    Error,
    /// Failure requiring immediate attention
    Critical,
}

impl ErrorSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSeverity::Info => "info",
            ErrorSeverity::Warning => "warning",
            ErrorSeverity::Error => "error",
            ErrorSeverity::Critical => "critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(ErrorCategory::Transient.as_str(), "transient");
        assert_eq!(ErrorCategory::Permanent.as_str(), "permanent");
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&ErrorSeverity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");

        let parsed: ErrorSeverity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(parsed, ErrorSeverity::Critical);
    }

    #[test]
    fn test_severity_default() {
        assert_eq!(ErrorSeverity::default(), ErrorSeverity::Error);
    }
}
