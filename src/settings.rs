use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// How the stepper orders force evaluation against position updates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    /// Particles are moved one after another; later particles in a tick see
    /// the already-moved earlier ones (Gauss-Seidel).
    #[default]
    Sequential,
    /// Every force is computed from the positions at the start of the tick,
    /// across worker threads (Jacobi).
    Parallel,
}

/// Start-up parameters of a swarm simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Half-width of the toroidal domain. Also the wrap period, so it is read
    /// every tick and may be changed between ticks.
    pub domain_scale: f64,
    /// Global force multiplier (K)
    pub attraction_gain: f64,
    /// Velocity damping applied multiplicatively each tick
    pub friction: f64,
    /// Number of particle types
    pub num_types: usize,
    /// Number of particles
    pub num_particles: usize,
    /// Simulated seconds between interaction table randomizations
    pub refresh_period: f64,
    pub update_order: UpdateOrder,
    /// Seed for the simulation's random source; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            domain_scale: 1.0,
            attraction_gain: 0.05,
            friction: 0.6,
            num_types: 6,
            num_particles: 1000,
            refresh_period: 7.0,
            update_order: UpdateOrder::Sequential,
            seed: None,
        }
    }
}

impl SimulationParameters {
    pub const SETTINGS_FILE: &'static str = "settings.toml";

    /// Loads parameters from `settings.toml` in the working directory, or
    /// returns the defaults if the file doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::SETTINGS_FILE)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let params = Self::from_toml(&contents)?;
            log::info!("loaded simulation parameters from {}", path.display());
            Ok(params)
        } else {
            log::info!("{} not found, using default parameters", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let params: SimulationParameters = toml::from_str(contents)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_types == 0 {
            return Err(ConfigError::Invalid("num_types must be at least 1".into()));
        }
        if self.num_particles == 0 {
            return Err(ConfigError::Invalid("num_particles must be at least 1".into()));
        }
        if !(self.domain_scale.is_finite() && self.domain_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "domain_scale must be positive, got {}",
                self.domain_scale
            )));
        }
        if !self.attraction_gain.is_finite() {
            return Err(ConfigError::Invalid("attraction_gain must be finite".into()));
        }
        if !self.friction.is_finite() {
            return Err(ConfigError::Invalid("friction must be finite".into()));
        }
        if !(self.refresh_period.is_finite() && self.refresh_period > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "refresh_period must be positive, got {}",
                self.refresh_period
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_values() {
        let params = SimulationParameters::default();
        assert_eq!(params.num_types, 6);
        assert_eq!(params.num_particles, 1000);
        assert_eq!(params.attraction_gain, 0.05);
        assert_eq!(params.friction, 0.6);
        assert_eq!(params.refresh_period, 7.0);
        assert_eq!(params.update_order, UpdateOrder::Sequential);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let params = SimulationParameters::from_toml(
            "num_types = 3\nupdate_order = \"parallel\"\nseed = 42\n",
        )
        .unwrap();
        assert_eq!(params.num_types, 3);
        assert_eq!(params.update_order, UpdateOrder::Parallel);
        assert_eq!(params.seed, Some(42));
        assert_eq!(params.num_particles, 1000);
    }

    #[test]
    fn rejects_zero_types() {
        let err = SimulationParameters::from_toml("num_types = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_non_positive_scale() {
        let err = SimulationParameters::from_toml("domain_scale = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SimulationParameters::from_toml("num_types = \"six\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let params = SimulationParameters::load_from("does/not/exist/settings.toml").unwrap();
        assert_eq!(params, SimulationParameters::default());
    }
}
