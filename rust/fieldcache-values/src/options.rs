//! Construction settings of string projections.

use serde::{Deserialize, Serialize};

use fieldcache_common::{Result, verify_arg};

/// Initial sizing of a projection's scratch storage.
///
/// Scratch storage grows on demand to fit the largest document seen, so these
/// only decide how much is reserved up front. Missing keys take their default
/// values when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScratchOptions {
    /// Number of values the scratch buffer holds before growing.
    pub initial_values: usize,
    /// Number of text bytes the scratch buffer holds before growing.
    pub initial_text_bytes: usize,
}

impl ScratchOptions {
    pub fn validate(&self) -> Result<()> {
        verify_arg!(initial_values, self.initial_values > 0);
        Ok(())
    }
}

impl Default for ScratchOptions {
    fn default() -> Self {
        ScratchOptions {
            initial_values: 1,
            initial_text_bytes: 32,
        }
    }
}
