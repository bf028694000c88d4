use serde::{Deserialize, Serialize};

use crate::conjugation::MIN_CONJUGATED_SIZE;

/// Knobs for [`parse_smiles_with`](crate::smiles::parse_smiles_with).
///
/// Missing fields take their default when deserialized, so a partial config
/// such as `{"validate": true}` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Check the input against the supported grammar before parsing.
    pub validate: bool,
    /// Raise bonds between lowercase atoms by half an order.
    pub aromaticity: bool,
    /// Average bond orders over conjugated systems.
    pub conjugation: bool,
    /// Smallest conjugated system that gets averaged.
    pub min_conjugated_size: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            validate: false,
            aromaticity: true,
            conjugation: true,
            min_conjugated_size: MIN_CONJUGATED_SIZE,
        }
    }
}

impl ParseOptions {
    pub fn validating() -> Self {
        Self {
            validate: true,
            ..Self::default()
        }
    }
}
