//! Cache configuration
//!
//! TTLs for the in-process response cache. Entries are also evicted
//! explicitly by write paths, so TTLs only bound staleness for reads
//! that race a crashed or missed invalidation.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// TTL for statistics report entries in seconds
    #[serde(default = "default_statistics_ttl")]
    pub statistics_ttl_secs: u64,

    /// TTL for the streak entry in seconds
    #[serde(default = "default_streak_ttl")]
    pub streak_ttl_secs: u64,

    /// TTL for per-year heatmap entries in seconds
    #[serde(default = "default_heatmap_ttl")]
    pub heatmap_ttl_secs: u64,

    /// TTL for author/tag list and detail entries in seconds
    #[serde(default = "default_entity_ttl")]
    pub entity_ttl_secs: u64,
}

impl CacheConfig {
    /// Get statistics TTL as Duration
    pub fn statistics_ttl(&self) -> Duration {
        Duration::from_secs(self.statistics_ttl_secs)
    }

    /// Get streak TTL as Duration
    pub fn streak_ttl(&self) -> Duration {
        Duration::from_secs(self.streak_ttl_secs)
    }

    /// Get heatmap TTL as Duration
    pub fn heatmap_ttl(&self) -> Duration {
        Duration::from_secs(self.heatmap_ttl_secs)
    }

    /// Get entity list/detail TTL as Duration
    pub fn entity_ttl(&self) -> Duration {
        Duration::from_secs(self.entity_ttl_secs)
    }

    /// Validate cache configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.statistics_ttl_secs == 0
            || self.streak_ttl_secs == 0
            || self.heatmap_ttl_secs == 0
            || self.entity_ttl_secs == 0
        {
            return Err(ValidationError::InvalidCacheTtl);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            statistics_ttl_secs: default_statistics_ttl(),
            streak_ttl_secs: default_streak_ttl(),
            heatmap_ttl_secs: default_heatmap_ttl(),
            entity_ttl_secs: default_entity_ttl(),
        }
    }
}

fn default_statistics_ttl() -> u64 {
    300
}

fn default_streak_ttl() -> u64 {
    3600
}

fn default_heatmap_ttl() -> u64 {
    900
}

fn default_entity_ttl() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.statistics_ttl_secs, 300);
        assert_eq!(config.streak_ttl_secs, 3600);
        assert_eq!(config.heatmap_ttl_secs, 900);
    }

    #[test]
    fn test_ttl_durations() {
        let config = CacheConfig {
            statistics_ttl_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.statistics_ttl(), Duration::from_secs(60));
        assert_eq!(config.streak_ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn test_validation_rejects_zero_ttl() {
        let config = CacheConfig {
            streak_ttl_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_defaults() {
        assert!(CacheConfig::default().validate().is_ok());
    }
}
