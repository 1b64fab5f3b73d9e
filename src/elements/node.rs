// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Nodes, the terminals of the electrical graph.

use num_complex::Complex64;

use crate::element_traits::{ElementInfo, NetworkElement, RetainWhenPruning};
use crate::element_type::ElementType;
use crate::{TopologyConfig, VoltageLevel, VoltagePhasorGroup};

/// How well a node's voltage is known.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObservationState {
    /// The node has usable voltage measurements of its own.
    DirectlyObserved,
    /// The node's voltage can be derived from elsewhere.  Only assigned by
    /// the state estimator.
    IndirectlyObserved,
    #[default]
    Unobserved,
}

/// The element a node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeParent {
    Substation(u64),
    TransmissionLine(u64),
}

/// A terminal of the electrical graph, carrying a voltage phasor record.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    info: ElementInfo,
    parent: Option<NodeParent>,
    observability: ObservationState,
    /// The nominal voltage of the node.
    pub base_kv: VoltageLevel,
    pub voltage: VoltagePhasorGroup,
}

impl Node {
    pub fn new(info: ElementInfo, base_kv: VoltageLevel) -> Self {
        Self {
            info,
            parent: None,
            observability: ObservationState::default(),
            base_kv,
            voltage: VoltagePhasorGroup::default(),
        }
    }

    /// Sets the voltage phasor record of the node.
    pub fn with_voltage(mut self, voltage: VoltagePhasorGroup) -> Self {
        self.voltage = voltage;
        self
    }

    pub fn parent(&self) -> Option<NodeParent> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: NodeParent) {
        self.parent = Some(parent);
    }

    /// Returns the id of the substation that owns the node, if any.
    pub fn parent_substation(&self) -> Option<u64> {
        match self.parent {
            Some(NodeParent::Substation(id)) => Some(id),
            _ => None,
        }
    }

    pub fn observability(&self) -> ObservationState {
        self.observability
    }

    /// Marks the node directly observed if its voltage measurements are
    /// estimator-eligible under the given configuration, and unobserved
    /// otherwise.
    pub fn assign_observability(&mut self, config: &TopologyConfig) {
        self.observability = if self
            .voltage
            .is_estimator_eligible(config.phase_configuration)
        {
            ObservationState::DirectlyObserved
        } else {
            ObservationState::Unobserved
        };
    }

    /// Returns the measured positive-sequence voltage, in per-unit of the
    /// node's base voltage.
    pub fn measured_per_unit_voltage(&self) -> Complex64 {
        self.voltage
            .positive_sequence
            .measurement
            .per_unit_complex(&self.base_kv)
    }

    pub fn measured_per_unit_magnitude(&self) -> f64 {
        self.voltage
            .positive_sequence
            .measurement
            .per_unit_magnitude(&self.base_kv)
    }

    pub fn measured_angle_degrees(&self) -> f64 {
        self.voltage.positive_sequence.measurement.angle_degrees
    }
}

impl NetworkElement for Node {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn element_type(&self) -> ElementType {
        ElementType::Node
    }
}

/// Nodes are the leaves that carry telemetry: under pruning, a node is kept
/// only if its voltage was reported.
impl RetainWhenPruning for Node {
    fn retain_when_pruning(&self, config: &TopologyConfig) -> bool {
        !config.in_pruning_mode || self.voltage.measurement_was_reported
    }
}
