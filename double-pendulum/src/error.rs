// Copyright 2025 John Brosnihan
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
//! Error types for parameter validation and configuration loading
//!
//! The physics path itself never returns errors: degenerate dynamics show up
//! as NaN/Inf in the state and are surfaced through the energy monitor.
//! These types cover the opt-in checks a caller can run before a simulation
//! starts.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid physical parameters or initial conditions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// A length, mass, or gravitational constant that is zero, negative, NaN, or infinite
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// An initial angle or angular velocity that is NaN or infinite
    #[error("initial {name} must be finite, got {value}")]
    NonFinite {
        /// State component name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

/// Errors that can occur while loading or saving a [`SimulationConfig`](crate::config::SimulationConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found at the given path
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Reading the configuration file failed
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// TOML serialization failed
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),

    /// The `format_version` field is malformed or incompatible
    #[error("Unsupported configuration format version {found} (expected compatible with {expected})")]
    IncompatibleVersion {
        /// Version string found in the file
        found: String,
        /// Version this build understands
        expected: &'static str,
    },

    /// Pendulum parameters or initial conditions are invalid
    #[error("Invalid pendulum parameters: {0}")]
    InvalidParams(#[from] ParamError),

    /// Semantic validation of a non-physical field failed
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_error_display() {
        let err = ParamError::NonPositive { name: "len1", value: -2.0 };
        assert_eq!(err.to_string(), "len1 must be positive and finite, got -2");
    }

    #[test]
    fn test_config_error_wraps_param_error() {
        let err: ConfigError = ParamError::NonFinite { name: "theta1", value: f64::NAN }.into();
        assert!(err.to_string().contains("initial theta1 must be finite"));
    }
}
