// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Grouping of nodes by voltage level, and clustering of each group into
//! observed buses.

use crate::buses::ObservedBus;
use crate::elements::{Node, ObservationState};
use crate::{CoherencyConfig, NetworkElement, VoltageLevel};

/// All nodes sharing one voltage level, and the observed buses they form.
#[derive(Clone, Debug)]
pub struct VoltageLevelGroup<'a> {
    voltage_level: VoltageLevel,
    members: Vec<(&'a Node, &'a CoherencyConfig)>,
    directly_observed: Vec<&'a Node>,
    observed_buses: Vec<ObservedBus<'a>>,
}

impl<'a> VoltageLevelGroup<'a> {
    pub fn new(voltage_level: VoltageLevel) -> Self {
        Self {
            voltage_level,
            members: Vec::new(),
            directly_observed: Vec::new(),
            observed_buses: Vec::new(),
        }
    }

    pub fn voltage_level(&self) -> VoltageLevel {
        self.voltage_level
    }

    /// Adds a node to the group, with the coherency settings that decide
    /// which bus it joins.
    pub fn add_node(&mut self, node: &'a Node, coherency: &'a CoherencyConfig) {
        self.members.push((node, coherency));
    }

    /// Returns an iterator over the nodes in the group, in the order they
    /// were added.
    pub fn nodes(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.members.iter().map(|(node, _)| *node)
    }

    /// Returns the directly observed nodes found by the last call to
    /// [`resolve_observed_buses`][Self::resolve_observed_buses].
    pub fn directly_observed_nodes(&self) -> &[&'a Node] {
        &self.directly_observed
    }

    /// Returns the observed buses found by the last call to
    /// [`resolve_observed_buses`][Self::resolve_observed_buses].
    pub fn observed_buses(&self) -> &[ObservedBus<'a>] {
        &self.observed_buses
    }

    /// Clusters the directly observed nodes of the group into observed buses,
    /// replacing the buses of any earlier pass.
    ///
    /// Nodes are visited in the order they were added, and each joins the
    /// first existing bus it is coherent with, or else starts a new one.  The
    /// result therefore depends on node order; callers that need
    /// reproducible buses must add nodes in a fixed order.
    pub fn resolve_observed_buses(&mut self) {
        self.directly_observed.clear();
        self.observed_buses.clear();

        for &(node, coherency) in &self.members {
            if node.observability() != ObservationState::DirectlyObserved {
                tracing::debug!(
                    "Node:{} is not directly observed and joins no bus.",
                    node.internal_id()
                );
                continue;
            }
            self.directly_observed.push(node);

            match self
                .observed_buses
                .iter_mut()
                .find(|bus| bus.is_coherent_with(node, coherency))
            {
                Some(bus) => bus.add_node(node),
                None => {
                    let bus_id = self.observed_buses.len() as u64 + 1;
                    tracing::debug!(
                        "Node:{} starts ObservedBus {} at {}.",
                        node.internal_id(),
                        bus_id,
                        self.voltage_level
                    );
                    self.observed_buses.push(ObservedBus::new(bus_id, node));
                }
            }
        }
    }
}
