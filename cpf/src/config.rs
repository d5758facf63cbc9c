use serde::{Deserialize, Serialize};
use stowage::geometry::Rotation;

/// Configuration for the CPF optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct CPFConfig {
    /// Minimum fraction of an item's base that must rest on solid support.
    /// Items on the bin floor are always accepted.
    pub support_threshold: f32,
    /// Rotations to try for every candidate position, in order of preference
    pub rotation_order: [Rotation; 6],
    /// Hard cap on the number of packing passes
    pub max_passes: usize,
    /// Number of decimals to which input dimensions and weights are rounded.
    /// If undefined, the input is taken as-is
    pub n_decimals: Option<u8>,
}

impl Default for CPFConfig {
    fn default() -> Self {
        Self {
            support_threshold: 0.75,
            rotation_order: Rotation::ALL,
            max_passes: 50,
            n_decimals: None,
        }
    }
}
