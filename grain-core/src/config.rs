//! Configuration for the range-probe calibration run.
//!
//! Read from a JSON5 file. Every field is optional; missing fields take the
//! values of [`ProbeConfig::default`].

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::range::ProbeTarget;

/// An error that can occur while loading a [`ProbeConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid JSON5 or does not match the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// `octaves` is below one or not finite.
    #[error("octaves must be a finite number >= 1, got {0}")]
    InvalidOctaves(f32),
}

/// Settings for a calibration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// Seed for the lattice table. `None` reseeds from the clock.
    pub seed: Option<u64>,
    /// Octave count passed to the turbulence targets.
    pub octaves: f32,
    /// Functions to probe, in report order.
    pub targets: Vec<ProbeTarget>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            octaves: 8.0,
            targets: ProbeTarget::ALL.to_vec(),
        }
    }
}

impl ProbeConfig {
    /// Parses and validates a JSON5 document.
    pub fn from_json5(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_json5(&source)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(source) => Self::from_json5(&source),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Checks the values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.octaves.is_finite() || self.octaves < 1.0 {
            return Err(ConfigError::InvalidOctaves(self.octaves));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_default() {
        let config = ProbeConfig::from_json5("{}").expect("empty config should parse");
        assert_eq!(config, ProbeConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = ProbeConfig::from_json5(
            r"{
                // fixed seed for reproducible calibration
                seed: 20061206,
                octaves: 4,
                targets: ['noise2', 'turbulence2_signed'],
            }",
        )
        .expect("config should parse");

        assert_eq!(config.seed, Some(20_061_206));
        assert!((config.octaves - 4.0).abs() < f32::EPSILON);
        assert_eq!(
            config.targets,
            [ProbeTarget::Noise2, ProbeTarget::Turbulence2Signed]
        );
    }

    #[test]
    fn rejects_bad_octaves() {
        let err = ProbeConfig::from_json5("{ octaves: 0.5 }").expect_err("octaves < 1");
        assert!(matches!(err, ConfigError::InvalidOctaves(_)));
    }

    #[test]
    fn rejects_unknown_targets_and_fields() {
        assert!(matches!(
            ProbeConfig::from_json5("{ targets: ['noise4'] }"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ProbeConfig::from_json5("{ sead: 1 }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = Path::new("definitely/not/a/grain.json5");
        let config = ProbeConfig::load_or_default(path).expect("missing file is not an error");
        assert_eq!(config, ProbeConfig::default());
        assert!(matches!(ProbeConfig::load(path), Err(ConfigError::Io(_))));
    }
}
