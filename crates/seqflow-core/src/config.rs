//! Engine configuration that downstream crates can serialize/deserialize.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum number of consumed head slots before a window queue compacts
    /// its backing buffer.
    pub queue_compact_min: usize,

    /// Initial capacity for materialized buffers (sort/reverse/group) when the
    /// upstream cursor cannot report a lower size bound.
    pub materialize_capacity_hint: usize,

    /// Let positional terminals index directly into random-access sources.
    pub fast_path: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            queue_compact_min: 32,
            materialize_capacity_hint: 16,
            fast_path: true,
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQFLOW_QUEUE_COMPACT_MIN`: head slots consumed before compaction
    /// - `SEQFLOW_MATERIALIZE_CAPACITY_HINT`: initial materialization capacity
    /// - `SEQFLOW_FAST_PATH`: `true`/`false`/`1`/`0`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`EngineConfig::from_env`], reading variables through `lookup`.
    /// Unparseable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(s) = lookup("SEQFLOW_QUEUE_COMPACT_MIN") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.queue_compact_min = v;
            }
        }

        if let Some(s) = lookup("SEQFLOW_MATERIALIZE_CAPACITY_HINT") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.materialize_capacity_hint = v;
            }
        }

        if let Some(s) = lookup("SEQFLOW_FAST_PATH") {
            if let Some(v) = parse_flag(&s) {
                cfg.fast_path = v;
            }
        }

        cfg
    }

    /// Capacity to reserve for a materialized buffer given a cursor's lower
    /// size bound.
    pub fn capacity_for(&self, lower_bound: usize) -> usize {
        if lower_bound == 0 {
            self.materialize_capacity_hint
        } else {
            lower_bound
        }
    }
}

static ENGINE_CONFIG: Lazy<EngineConfig> = Lazy::new(EngineConfig::from_env);

/// Process-wide configuration, read from the environment on first use.
pub fn engine_config() -> &'static EngineConfig {
    &ENGINE_CONFIG
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
