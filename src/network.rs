// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The network model: the ownership tree of a transmission network, indexed
//! for lookups by element id.

mod creation;
mod propagation;
mod pruning;
mod retrieval;
mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

use std::cell::OnceCell;
use std::collections::HashMap;

use uuid::Uuid;

use crate::element_traits::{ElementInfo, NetworkElement};
use crate::element_type::ElementType;
use crate::elements::Company;
use crate::{TopologyConfig, VoltageLevel};

/// Where a substation sits in the ownership tree, as indices into the
/// company and division lists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SubstationLocation {
    pub(crate) company: usize,
    pub(crate) division: usize,
    pub(crate) substation: usize,
}

/// Where a transmission line sits in the ownership tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LineLocation {
    pub(crate) company: usize,
    pub(crate) line: usize,
}

/// Where a node or switching device sits in the ownership tree: the index
/// into the owning substation's or line's element list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ElementLocation {
    Substation(SubstationLocation, usize),
    TransmissionLine(LineLocation, usize),
}

/// `LocationMap`s map the ids of elements of one type to their position in
/// the ownership tree.
pub(crate) type LocationMap<L> = HashMap<u64, L>;

/// A transmission network: companies and everything they own, the voltage
/// levels in use, and the configuration its processing passes run under.
///
/// The ownership structure is fixed once the model is created.  Element state
/// (switch states, node phasors, coherency settings) can still be changed
/// between passes.
#[derive(Debug)]
pub struct NetworkModel {
    info: ElementInfo,
    unique_id: OnceCell<Uuid>,
    companies: Vec<Company>,
    voltage_levels: Vec<VoltageLevel>,
    config: TopologyConfig,
    substation_locations: LocationMap<SubstationLocation>,
    line_locations: LocationMap<LineLocation>,
    node_locations: LocationMap<ElementLocation>,
    switch_locations: LocationMap<ElementLocation>,
}

impl NetworkModel {
    /// Returns the process-wide unique id of the model, generating one on
    /// first access.
    pub fn unique_id(&self) -> Uuid {
        *self.unique_id.get_or_init(Uuid::new_v4)
    }

    /// Overrides the unique id of the model.
    pub fn set_unique_id(&mut self, unique_id: Uuid) {
        self.unique_id = OnceCell::from(unique_id);
    }

    /// Sets the descriptive attributes of the model.
    pub fn with_info(mut self, info: ElementInfo) -> Self {
        self.info = info;
        self
    }

    pub fn config(&self) -> &TopologyConfig {
        &self.config
    }

    /// Replaces the configuration used by subsequent passes.
    pub fn set_config(&mut self, config: TopologyConfig) {
        self.config = config;
    }

    pub fn voltage_levels(&self) -> &[VoltageLevel] {
        &self.voltage_levels
    }
}

impl NetworkElement for NetworkModel {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn element_type(&self) -> ElementType {
        ElementType::NetworkModel
    }
}
