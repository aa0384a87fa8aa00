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
//! Simulation configuration loaded from TOML
//!
//! Every field has a default, so an empty file is a valid configuration that
//! reproduces the classic screen-scale setup: links of 180 and 260 units,
//! equal masses of 10, unit gravity, the upper link horizontal to the right
//! and the lower link horizontal to the left, released from rest and stepped
//! with `dt = 0.5` once per frame.
//!
//! # TOML Example
//!
//! ```toml
//! format_version = "1.0.0"
//! record_trail = true
//!
//! [pendulum]
//! len1 = 1.0
//! len2 = 1.0
//! mass1 = 1.0
//! mass2 = 1.0
//! g = 9.81
//!
//! [initial]
//! theta1 = 2.0
//! theta2 = -1.5
//!
//! [integrator]
//! dt = 0.01
//!
//! [monitor]
//! tolerance = 0.01
//! ```

use crate::energy::EnergyMonitor;
use crate::error::ConfigError;
use crate::pendulum::{PendulumParams, PendulumState};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::path::Path;
use tracing::debug;

/// Configuration format understood by this build
///
/// Format: MAJOR.MINOR.PATCH following semantic versioning.
pub const CONFIG_FORMAT_VERSION: &str = "1.0.0";

/// Initial angles and angular velocities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    /// Initial angle of link 1 (radians from the downward vertical)
    pub theta1: f64,
    /// Initial angle of link 2 (radians from the downward vertical)
    pub theta2: f64,
    /// Initial angular velocity of link 1
    pub omega1: f64,
    /// Initial angular velocity of link 2
    pub omega2: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        InitialConditions {
            theta1: FRAC_PI_2,
            theta2: -FRAC_PI_2,
            omega1: 0.0,
            omega2: 0.0,
        }
    }
}

/// Integrator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegratorConfig {
    /// Fixed timestep taken once per tick
    pub dt: f64,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        IntegratorConfig { dt: 0.5 }
    }
}

/// Energy monitor settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Relative drift above which energy is reported as drifting
    pub tolerance: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            tolerance: EnergyMonitor::DEFAULT_TOLERANCE,
        }
    }
}

/// Complete configuration for a [`Simulation`](crate::simulation::Simulation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Format version of the file; checked against [`CONFIG_FORMAT_VERSION`] when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<String>,
    /// Whether to record the trail of bob 2
    pub record_trail: bool,
    /// Physical parameters
    pub pendulum: PendulumParams,
    /// Initial conditions
    pub initial: InitialConditions,
    /// Integrator settings
    pub integrator: IntegratorConfig,
    /// Energy monitor settings
    pub monitor: MonitorConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            format_version: None,
            record_trail: true,
            pendulum: PendulumParams::default(),
            initial: InitialConditions::default(),
            integrator: IntegratorConfig::default(),
            monitor: MonitorConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a configuration from TOML text
    ///
    /// # Errors
    ///
    /// - `ConfigError::ParseError` if the TOML is malformed or has wrong types
    /// - any error from [`validate`](Self::validate)
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig =
            toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    ///
    /// # Errors
    ///
    /// - `ConfigError::FileNotFound` if the file does not exist
    /// - `ConfigError::Io` if it cannot be read
    /// - any error from [`from_toml_str`](Self::from_toml_str)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), dt = config.integrator.dt, "Loaded simulation config");
        Ok(config)
    }

    /// Serialize to TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SerializeError` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// - `ConfigError::IncompatibleVersion` if `format_version` is malformed
    ///   or incompatible with [`CONFIG_FORMAT_VERSION`]
    /// - `ConfigError::InvalidParams` if a parameter is non-positive or an
    ///   initial condition is non-finite
    /// - `ConfigError::ValidationError` if `dt` or `tolerance` is not
    ///   positive and finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(found) = &self.format_version {
            if !is_version_compatible(found, CONFIG_FORMAT_VERSION) {
                return Err(ConfigError::IncompatibleVersion {
                    found: found.clone(),
                    expected: CONFIG_FORMAT_VERSION,
                });
            }
        }

        self.initial_state().validate()?;

        let dt = self.integrator.dt;
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "integrator.dt must be positive and finite, got {}",
                dt
            )));
        }

        let tolerance = self.monitor.tolerance;
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "monitor.tolerance must be positive and finite, got {}",
                tolerance
            )));
        }

        Ok(())
    }

    /// Build the initial pendulum state
    pub fn initial_state(&self) -> PendulumState {
        let InitialConditions {
            theta1,
            theta2,
            omega1,
            omega2,
        } = self.initial;
        PendulumState::new(theta1, theta2, omega1, omega2, self.pendulum)
    }
}

/// Check if a configuration format version is compatible with this build
///
/// Uses semantic versioning rules:
/// - Major version must match
/// - For major version 0.x.y, minor versions must match (breaking changes)
/// - For major version >= 1, the file's minor version can be less than or equal
/// - Patch version is ignored
fn is_version_compatible(file_version: &str, supported_version: &str) -> bool {
    let (file_ver, supported_ver) = match (
        Version::parse(file_version),
        Version::parse(supported_version),
    ) {
        (Ok(f), Ok(s)) => (f, s),
        _ => return false,
    };

    if file_ver.major != supported_ver.major {
        return false;
    }

    if file_ver.major != 0 {
        file_ver.minor <= supported_ver.minor
    } else {
        file_ver.minor == supported_ver.minor
    }
}
