// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving elements from a [`NetworkModel`].

use crate::elements::{Company, Node, NodeParent, Substation, Switch, TransmissionLine};
use crate::{CoherencyConfig, Error, NetworkElement, NetworkModel};

use super::{ElementLocation, LineLocation, SubstationLocation};

/// Element retrieval.
impl NetworkModel {
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Returns the company with the given id, if it exists.
    pub fn company(&self, company_id: u64) -> Result<&Company, Error> {
        self.companies
            .iter()
            .find(|c| c.internal_id() == company_id)
            .ok_or_else(|| {
                Error::element_not_found(format!("Company with id {} not found.", company_id))
            })
    }

    /// Returns the substation with the given id, if it exists.
    pub fn substation(&self, substation_id: u64) -> Result<&Substation, Error> {
        let location = self
            .substation_locations
            .get(&substation_id)
            .ok_or_else(|| {
                Error::element_not_found(format!(
                    "Substation with id {} not found.",
                    substation_id
                ))
            })?;
        self.substation_at(*location)
            .ok_or_else(|| Error::internal(format!("Substation {substation_id} is misindexed.")))
    }

    /// Returns a mutable reference to the substation with the given id, for
    /// changing its coherency settings.
    pub fn substation_mut(&mut self, substation_id: u64) -> Result<&mut Substation, Error> {
        let location = *self
            .substation_locations
            .get(&substation_id)
            .ok_or_else(|| {
                Error::element_not_found(format!(
                    "Substation with id {} not found.",
                    substation_id
                ))
            })?;
        self.substation_at_mut(location)
            .ok_or_else(|| Error::internal(format!("Substation {substation_id} is misindexed.")))
    }

    /// Returns the transmission line with the given id, if it exists.
    pub fn transmission_line(&self, line_id: u64) -> Result<&TransmissionLine, Error> {
        let location = self.line_locations.get(&line_id).ok_or_else(|| {
            Error::element_not_found(format!("TransmissionLine with id {} not found.", line_id))
        })?;
        self.line_at(*location)
            .ok_or_else(|| Error::internal(format!("TransmissionLine {line_id} is misindexed.")))
    }

    /// Returns the node with the given id, if it exists.
    pub fn node(&self, node_id: u64) -> Result<&Node, Error> {
        let location = self.node_locations.get(&node_id).ok_or_else(|| {
            Error::element_not_found(format!("Node with id {} not found.", node_id))
        })?;
        let node = match *location {
            ElementLocation::Substation(sl, i) => {
                self.substation_at(sl).and_then(|s| s.nodes().get(i))
            }
            ElementLocation::TransmissionLine(ll, i) => {
                self.line_at(ll).and_then(|l| l.nodes().get(i))
            }
        };
        node.ok_or_else(|| Error::internal(format!("Node {node_id} is misindexed.")))
    }

    /// Returns a mutable reference to the node with the given id, for
    /// updating its measurements.
    pub fn node_mut(&mut self, node_id: u64) -> Result<&mut Node, Error> {
        let location = *self.node_locations.get(&node_id).ok_or_else(|| {
            Error::element_not_found(format!("Node with id {} not found.", node_id))
        })?;
        let node = match location {
            ElementLocation::Substation(sl, i) => self
                .substation_at_mut(sl)
                .and_then(|s| s.nodes_mut().get_mut(i)),
            ElementLocation::TransmissionLine(ll, i) => {
                self.line_at_mut(ll).and_then(|l| l.nodes_mut().get_mut(i))
            }
        };
        node.ok_or_else(|| Error::internal(format!("Node {node_id} is misindexed.")))
    }

    /// Returns the switching device with the given id, if it exists.
    pub fn switch(&self, switch_id: u64) -> Result<&Switch, Error> {
        let location = self.switch_locations.get(&switch_id).ok_or_else(|| {
            Error::element_not_found(format!("Switch with id {} not found.", switch_id))
        })?;
        let switch = match *location {
            ElementLocation::Substation(sl, i) => {
                self.substation_at(sl).and_then(|s| s.switches().get(i))
            }
            ElementLocation::TransmissionLine(ll, i) => {
                self.line_at(ll).and_then(|l| l.switches().get(i))
            }
        };
        switch.ok_or_else(|| Error::internal(format!("Switch {switch_id} is misindexed.")))
    }

    /// Returns a mutable reference to the switching device with the given
    /// id, for updating its states.
    pub fn switch_mut(&mut self, switch_id: u64) -> Result<&mut Switch, Error> {
        let location = *self.switch_locations.get(&switch_id).ok_or_else(|| {
            Error::element_not_found(format!("Switch with id {} not found.", switch_id))
        })?;
        let switch = match location {
            ElementLocation::Substation(sl, i) => self
                .substation_at_mut(sl)
                .and_then(|s| s.switches_mut().get_mut(i)),
            ElementLocation::TransmissionLine(ll, i) => self
                .line_at_mut(ll)
                .and_then(|l| l.switches_mut().get_mut(i)),
        };
        switch.ok_or_else(|| Error::internal(format!("Switch {switch_id} is misindexed.")))
    }

    /// Returns the coherency settings that apply to the given node: those of
    /// its substation, or for nodes along a transmission line, those of the
    /// line's from substation.
    pub fn coherency_for(&self, node: &Node) -> Result<&CoherencyConfig, Error> {
        let substation_id = match node.parent() {
            Some(NodeParent::Substation(id)) => id,
            Some(NodeParent::TransmissionLine(id)) => self.transmission_line(id)?.from_substation(),
            None => {
                return Err(Error::internal(format!(
                    "Node {} has no parent.",
                    node.internal_id()
                )))
            }
        };
        Ok(&self.substation(substation_id)?.coherency)
    }

    /// Returns an iterator over all substations, in ownership-tree order.
    pub fn substations(&self) -> impl Iterator<Item = &Substation> + '_ {
        self.companies
            .iter()
            .flat_map(|c| c.divisions())
            .flat_map(|d| d.substations())
    }

    /// Returns an iterator over all transmission lines, in ownership-tree
    /// order.
    pub fn transmission_lines(&self) -> impl Iterator<Item = &TransmissionLine> + '_ {
        self.companies.iter().flat_map(|c| c.transmission_lines())
    }

    /// Returns an iterator over all nodes: those of substations first, then
    /// those along transmission lines.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.substations()
            .flat_map(|s| s.nodes())
            .chain(self.transmission_lines().flat_map(|l| l.nodes()))
    }

    /// Returns an iterator over all switching devices: those of substations
    /// first, then those along transmission lines.
    pub fn switches(&self) -> impl Iterator<Item = &Switch> + '_ {
        self.substations()
            .flat_map(|s| s.switches())
            .chain(self.transmission_lines().flat_map(|l| l.switches()))
    }

    fn substation_at(&self, location: SubstationLocation) -> Option<&Substation> {
        self.companies
            .get(location.company)?
            .divisions()
            .get(location.division)?
            .substations()
            .get(location.substation)
    }

    fn substation_at_mut(&mut self, location: SubstationLocation) -> Option<&mut Substation> {
        self.companies
            .get_mut(location.company)?
            .divisions_mut()
            .get_mut(location.division)?
            .substations_mut()
            .get_mut(location.substation)
    }

    fn line_at(&self, location: LineLocation) -> Option<&TransmissionLine> {
        self.companies
            .get(location.company)?
            .transmission_lines()
            .get(location.line)
    }

    fn line_at_mut(&mut self, location: LineLocation) -> Option<&mut TransmissionLine> {
        self.companies
            .get_mut(location.company)?
            .transmission_lines_mut()
            .get_mut(location.line)
    }
}
