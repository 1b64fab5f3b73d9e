// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Observable islands: connected groups of substations and the lines
//! between them.

use crate::elements::{Substation, TransmissionLine};
use crate::islands::TransmissionGraph;
use crate::{Error, NetworkElement, VoltageLevel};

/// A set of substations reachable from one another through transmission
/// lines, together with those lines.
///
/// The island borrows its members; it is rebuilt on every detection pass.
#[derive(Clone, Debug, Default)]
pub struct ObservableIsland<'a> {
    substations: Vec<&'a Substation>,
    transmission_lines: Vec<&'a TransmissionLine>,
}

impl<'a> ObservableIsland<'a> {
    /// Creates an island of all substations connected to `root`.  The island
    /// has no transmission lines until they are appended.
    pub fn from_root(root: u64, graph: &TransmissionGraph<'a>) -> Result<Self, Error> {
        let mut substations = vec![];
        graph.find_connected_substations(root, &mut substations)?;
        Ok(Self {
            substations,
            transmission_lines: vec![],
        })
    }

    /// Creates an island of all substations connected to `root` through lines
    /// at `voltage_level`.
    pub fn from_root_at_voltage_level(
        root: u64,
        graph: &TransmissionGraph<'a>,
        voltage_level: &VoltageLevel,
    ) -> Result<Self, Error> {
        let mut substations = vec![];
        graph.find_connected_substations_at_voltage_level(root, &mut substations, voltage_level)?;
        Ok(Self {
            substations,
            transmission_lines: vec![],
        })
    }

    pub fn substations(&self) -> &[&'a Substation] {
        &self.substations
    }

    pub fn transmission_lines(&self) -> &[&'a TransmissionLine] {
        &self.transmission_lines
    }

    pub fn contains_substation(&self, substation_id: u64) -> bool {
        self.substations
            .iter()
            .any(|s| s.internal_id() == substation_id)
    }

    pub fn contains_transmission_line(&self, line_id: u64) -> bool {
        self.transmission_lines
            .iter()
            .any(|l| l.internal_id() == line_id)
    }

    /// Merges `other` into this island if some transmission line connects
    /// the two, in either direction.
    ///
    /// On success, the substations and lines of `other` that this island
    /// doesn't have yet are appended and true is returned.  Otherwise this
    /// island is left unchanged.
    pub fn try_merge(&mut self, other: &ObservableIsland<'a>, graph: &TransmissionGraph<'a>) -> bool {
        let connected = graph.transmission_lines().any(|edge| {
            let (from, to) = (edge.line.from_substation(), edge.line.to_substation());
            (self.contains_substation(from) && other.contains_substation(to))
                || (other.contains_substation(from) && self.contains_substation(to))
        });
        if !connected {
            return false;
        }

        for substation in &other.substations {
            if !self.contains_substation(substation.internal_id()) {
                self.substations.push(*substation);
            }
        }
        for line in &other.transmission_lines {
            if !self.contains_transmission_line(line.internal_id()) {
                self.transmission_lines.push(*line);
            }
        }
        true
    }

    /// Adds every transmission line whose from substation is in the island.
    pub fn append_transmission_lines(&mut self, graph: &TransmissionGraph<'a>) {
        self.append_lines_where(graph, |_| true);
    }

    /// Adds every transmission line whose from substation is in the island
    /// and whose from node is at `voltage_level`.
    pub fn append_transmission_lines_at_voltage_level(
        &mut self,
        graph: &TransmissionGraph<'a>,
        voltage_level: &VoltageLevel,
    ) {
        self.append_lines_where(graph, |level| level == voltage_level);
    }

    fn append_lines_where(
        &mut self,
        graph: &TransmissionGraph<'a>,
        level_matches: impl Fn(&VoltageLevel) -> bool,
    ) {
        for edge in graph.transmission_lines() {
            if !level_matches(&edge.voltage_level)
                || !self.contains_substation(edge.line.from_substation())
                || self.contains_transmission_line(edge.line.internal_id())
            {
                continue;
            }
            self.transmission_lines.push(edge.line);
        }
    }
}

/// Merges islands pairwise until no two of the remaining islands are
/// connected by a transmission line.
pub fn merge_islands<'a>(
    mut islands: Vec<ObservableIsland<'a>>,
    graph: &TransmissionGraph<'a>,
) -> Vec<ObservableIsland<'a>> {
    let mut merged = true;
    while merged {
        merged = false;
        'outer: for i in 0..islands.len() {
            for j in (i + 1)..islands.len() {
                let other = islands[j].clone();
                if islands[i].try_merge(&other, graph) {
                    islands.remove(j);
                    merged = true;
                    break 'outer;
                }
            }
        }
    }
    islands
}
