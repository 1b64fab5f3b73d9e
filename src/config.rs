// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for topology processing.

/// The phase model the network is processed in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PhaseConfiguration {
    /// Only the positive-sequence component of each quantity is used.
    #[default]
    PositiveSequence,
    /// All three phases are used.
    ThreePhase,
}

/// Network-wide configuration options, passed explicitly into every
/// resolution and traversal.
#[derive(Clone, Default, Debug)]
pub struct TopologyConfig {
    /// Whether node observability and switch propagation use the
    /// positive-sequence or the three-phase quantities.
    pub phase_configuration: PhaseConfiguration,

    /// Whether the network is being pruned.  While this is `true`, every
    /// switching device resolves open, and container elements are only
    /// retained if at least one of their children is.
    pub in_pruning_mode: bool,
}

/// The test used to decide whether a node belongs to an existing observed
/// bus.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CoherencyMethod {
    /// Compare voltage angles only.
    #[default]
    AngleDelta,
    /// Compare per-unit voltage magnitudes only.
    MagnitudeDelta,
    /// Compare the full per-unit complex voltages.
    TotalVectorDelta,
}

/// Per-substation coherency configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct CoherencyConfig {
    pub method: CoherencyMethod,
    /// Largest angle difference, in degrees, for two voltages to be coherent.
    pub angle_delta_threshold_degrees: f64,
    /// Largest per-unit magnitude difference for two voltages to be coherent.
    pub magnitude_delta_threshold_per_unit: f64,
    /// Largest per-unit vector difference for two voltages to be coherent.
    pub total_vector_delta_threshold_per_unit: f64,
}

impl Default for CoherencyConfig {
    fn default() -> Self {
        Self {
            method: CoherencyMethod::default(),
            angle_delta_threshold_degrees: 0.5,
            magnitude_delta_threshold_per_unit: 0.01,
            total_vector_delta_threshold_per_unit: 0.01,
        }
    }
}
