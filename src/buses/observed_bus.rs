// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Observed buses: clusters of nodes believed to be at the same voltage.

use num_complex::Complex64;

use crate::elements::Node;
use crate::{CoherencyConfig, CoherencyMethod, Error, NetworkElement, VoltageLevel};

/// A cluster of nodes that are electrically coincident, summarised by their
/// average measured voltage.
///
/// The bus borrows its nodes; it is rebuilt on every clustering pass.
#[derive(Clone, Debug)]
pub struct ObservedBus<'a> {
    internal_id: u64,
    nodes: Vec<&'a Node>,
}

impl<'a> ObservedBus<'a> {
    /// Creates a bus holding a single node.
    pub fn new(internal_id: u64, node: &'a Node) -> Self {
        Self {
            internal_id,
            nodes: vec![node],
        }
    }

    pub fn internal_id(&self) -> u64 {
        self.internal_id
    }

    pub fn nodes(&self) -> &[&'a Node] {
        &self.nodes
    }

    pub fn add_node(&mut self, node: &'a Node) {
        self.nodes.push(node);
    }

    /// Appends the nodes of `other` to this bus.
    pub fn merge(&mut self, other: ObservedBus<'a>) {
        self.nodes.extend(other.nodes);
    }

    /// Returns true if the bus contains the node with the given id.
    pub fn contains(&self, node_id: u64) -> bool {
        self.nodes.iter().any(|n| n.internal_id() == node_id)
    }

    /// Returns the voltage level of the bus, which is that of its first node.
    pub fn voltage_level(&self) -> Result<VoltageLevel, Error> {
        self.nodes.first().map(|n| n.base_kv).ok_or_else(|| {
            Error::invalid_state(format!(
                "ObservedBus {} has no nodes and no voltage level.",
                self.internal_id
            ))
        })
    }

    /// Returns the mean of the measured per-unit positive-sequence voltages
    /// of the bus's nodes, or zero for a bus without nodes.
    pub fn average_voltage(&self) -> Complex64 {
        if self.nodes.is_empty() {
            return Complex64::default();
        }
        let sum: Complex64 = self
            .nodes
            .iter()
            .map(|n| n.measured_per_unit_voltage())
            .sum();
        sum / self.nodes.len() as f64
    }

    /// Returns the per-unit magnitude of the average voltage.
    pub fn average_magnitude(&self) -> f64 {
        self.average_voltage().norm()
    }

    /// Returns the angle of the average voltage, in degrees.
    pub fn average_angle_degrees(&self) -> f64 {
        self.average_voltage().arg().to_degrees()
    }

    /// Returns true if `node` belongs on this bus under the given coherency
    /// settings.  A bus without nodes is coherent with nothing.
    ///
    /// The magnitude test is one-sided: a node measuring more than the bus
    /// average always passes it.
    pub fn is_coherent_with(&self, node: &Node, coherency: &CoherencyConfig) -> bool {
        if self.nodes.is_empty() {
            return false;
        }

        let average = self.average_voltage();
        match coherency.method {
            CoherencyMethod::AngleDelta => {
                let bus = Complex64::from_polar(1.0, average.arg());
                let candidate = Complex64::from_polar(1.0, node.measured_angle_degrees().to_radians());
                let delta = (bus * candidate.conj()).arg().to_degrees().abs();
                delta <= coherency.angle_delta_threshold_degrees
            }
            CoherencyMethod::MagnitudeDelta => {
                average.norm() - node.measured_per_unit_magnitude()
                    <= coherency.magnitude_delta_threshold_per_unit
            }
            CoherencyMethod::TotalVectorDelta => {
                (average - node.measured_per_unit_voltage()).norm()
                    <= coherency.total_vector_delta_threshold_per_unit
            }
        }
    }
}
