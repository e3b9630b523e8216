// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::JdkScoutError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a JdkScoutError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a JdkScoutError) -> Self {
        let (suggestion, details) = match error {
            JdkScoutError::InvalidVersionFormat(msg) => {
                let suggestion = Some(
                    "Version bounds should look like '17', '21.0.2' or '11.0.22+7'.".to_string(),
                );
                let details = Some(format!("Invalid format: {msg}"));
                (suggestion, details)
            }
            JdkScoutError::InvalidVersionRange { min, max } => {
                let suggestion = Some(format!(
                    "Swap the bounds (--min {max} --max {min}) or omit one of them."
                ));
                (suggestion, None)
            }
            JdkScoutError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check config.toml in JDKSCOUT_HOME (default ~/.jdkscout) and any \
                     JDKSCOUT_DISCOVERY__* environment variables."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            JdkScoutError::Config(err) => {
                let suggestion = Some(
                    "Discovery settings live under the [discovery] table: excluded_paths, \
                     scan_paths and jdk_paths."
                        .to_string(),
                );
                let details = Some(err.to_string());
                (suggestion, details)
            }
            JdkScoutError::HomeDirectoryNotFound => {
                let suggestion = Some(if cfg!(windows) {
                    "Set JDKSCOUT_HOME to an absolute directory, e.g. set \
                     JDKSCOUT_HOME=C:\\Users\\me\\.jdkscout"
                        .to_string()
                } else {
                    "Set JDKSCOUT_HOME to an absolute directory, e.g. export \
                     JDKSCOUT_HOME=$HOME/.jdkscout"
                        .to_string()
                });
                (suggestion, None)
            }
            JdkScoutError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check file permissions of the reported path.".to_string())
                    }
                    std::io::ErrorKind::NotFound => {
                        Some("Ensure the file or directory exists.".to_string())
                    }
                    _ => None,
                };
                (suggestion, Some(io_err.to_string()))
            }
            _ => (None, None),
        };

        Self {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
