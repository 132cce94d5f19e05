use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

pub const DEFAULT_BEGINNING_FACTOR: f64 = 5.0;
pub const DEFAULT_ENDING_FACTOR: f64 = 5.0;
pub const DEFAULT_DEGREES_OF_FREEDOM: f64 = 4.0;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("invalid value for '{field}': {value}")]
    InvalidValue { field: &'static str, value: String }
}

/// Defaults for building trapezium events.
///
/// 所有欄位皆可省略，省略時使用預設值：
/// ```json
/// { "beginning_factor": 5, "ending_factor": 5, "degrees_of_freedom": 4, "max_attempts": 10000 }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrapeziumConfiguration {
    beginning_factor: f64,
    ending_factor: f64,
    degrees_of_freedom: f64,
    max_attempts: usize
}

impl Default for TrapeziumConfiguration {
    fn default() -> Self {
        TrapeziumConfiguration {
            beginning_factor: DEFAULT_BEGINNING_FACTOR,
            ending_factor: DEFAULT_ENDING_FACTOR,
            degrees_of_freedom: DEFAULT_DEGREES_OF_FREEDOM,
            max_attempts: DEFAULT_MAX_ATTEMPTS
        }
    }
}

impl TrapeziumConfiguration {
    pub fn new(beginning_factor: f64,
               ending_factor: f64,
               degrees_of_freedom: f64,
               max_attempts: usize) -> Result<TrapeziumConfiguration, ConfigurationError> {
        let config = TrapeziumConfiguration { beginning_factor, ending_factor, degrees_of_freedom, max_attempts };
        config.validate()?;
        Ok(config)
    }

    pub fn beginning_factor(&self) -> f64 {
        self.beginning_factor
    }

    pub fn ending_factor(&self) -> f64 {
        self.ending_factor
    }

    pub fn degrees_of_freedom(&self) -> f64 {
        self.degrees_of_freedom
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Result<TrapeziumConfiguration, ConfigurationError> {
        self.max_attempts = max_attempts;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let positive_fields = [
            ("beginning_factor", self.beginning_factor),
            ("ending_factor", self.ending_factor),
            ("degrees_of_freedom", self.degrees_of_freedom)
        ];
        for (field, value) in positive_fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigurationError::InvalidValue { field, value: value.to_string() });
            }
        }
        if self.max_attempts == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "max_attempts",
                value: self.max_attempts.to_string()
            });
        }
        Ok(())
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<TrapeziumConfiguration, ConfigurationError> {
        let config: TrapeziumConfiguration = serde_json::from_value(json_value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<TrapeziumConfiguration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let config: TrapeziumConfiguration = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
