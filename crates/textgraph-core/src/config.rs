//! Build configuration.

use serde::{Deserialize, Serialize};

/// Default ceiling on total node count (`V + D`).
///
/// One dense f64 `N × N` matrix at 10k nodes is ~800 MB; beyond that the
/// dense representation is the wrong tool and the build is rejected.
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// Default co-occurrence window size (bigram window).
pub const DEFAULT_WINDOW_SIZE: usize = 2;

/// Configuration for one graph build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Maximum total node count before the build is rejected.
    pub max_nodes: usize,
    /// Token window for word co-occurrence counting. Two words co-occur
    /// when they fall inside one window position; `2` counts adjacent
    /// bigrams only.
    pub window_size: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl BuildConfig {
    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self {
            max_nodes,
            ..Self::default()
        }
    }

    pub fn with_window_size(window_size: usize) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }
}
