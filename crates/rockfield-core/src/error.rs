//! Error types for the simulation core.
//!
//! Ticking the simulation is infallible: dead entities, repeated splits and
//! empty collections are all guarded no-ops. The only fallible surface is
//! building a [`SimConfig`](crate::config::SimConfig), which is validated once
//! before a [`Simulation`](crate::simulation::Simulation) takes ownership of it.

use thiserror::Error;

/// Errors produced while loading or validating a simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The playfield must have a positive width and height.
    #[error("screen bounds must be positive, got {width}x{height}")]
    NonPositiveBounds {
        /// Configured width
        width: f32,
        /// Configured height
        height: f32,
    },

    /// Every entity variant needs a positive collision radius.
    #[error("{entity} radius must be positive, got {radius}")]
    NonPositiveRadius {
        /// Which entity the radius belongs to
        entity: &'static str,
        /// Configured radius
        radius: f32,
    },

    /// Projectiles must live for at least one tick.
    #[error("projectile life must be at least one tick, got {life}")]
    NonPositiveLife {
        /// Configured life in ticks
        life: i32,
    },

    /// A tuning value is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
        /// Configured value
        value: f32,
    },

    /// An inclusive spawn range has `min > max`.
    #[error("spawn range for {axis} is empty: {min}..={max}")]
    InvalidSpawnRange {
        /// Which range is invalid
        axis: &'static str,
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },

    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ConfigError::NonPositiveRadius {
            entity: "ship",
            radius: 0.0,
        };
        assert_eq!(err.to_string(), "ship radius must be positive, got 0");

        let err = ConfigError::InvalidSpawnRange {
            axis: "spawn_x",
            min: 10,
            max: 1,
        };
        assert_eq!(err.to_string(), "spawn range for spawn_x is empty: 10..=1");
    }

    #[test]
    fn parse_errors_convert() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse configuration"));
    }
}
