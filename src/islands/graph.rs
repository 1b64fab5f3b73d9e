// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The graph of substations linked by transmission lines.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::elements::{Substation, TransmissionLine};
use crate::{Error, NetworkElement, NetworkModel, VoltageLevel};

/// A transmission line, as an edge of a [`TransmissionGraph`].
#[derive(Clone, Copy, Debug)]
pub struct LineEdge<'a> {
    pub line: &'a TransmissionLine,
    /// The voltage level of the line's from node.
    pub voltage_level: VoltageLevel,
}

/// Substations as vertices and transmission lines as edges.
///
/// Edges point from a line's from substation to its to substation, but the
/// traversals ignore direction.
pub struct TransmissionGraph<'a> {
    graph: DiGraph<&'a Substation, LineEdge<'a>>,
    node_indices: HashMap<u64, NodeIndex>,
}

impl<'a> TransmissionGraph<'a> {
    /// Creates the graph of all substations and transmission lines of
    /// `model`.
    pub fn try_new(model: &'a NetworkModel) -> Result<Self, Error> {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for substation in model.substations() {
            let idx = graph.add_node(substation);
            node_indices.insert(substation.internal_id(), idx);
        }

        for line in model.transmission_lines() {
            let index_of = |substation_id: u64| {
                node_indices.get(&substation_id).copied().ok_or_else(|| {
                    Error::element_not_found(format!(
                        "Substation with id {} not found.",
                        substation_id
                    ))
                })
            };
            let from = index_of(line.from_substation())?;
            let to = index_of(line.to_substation())?;
            let voltage_level = model.node(line.from_node())?.base_kv;
            graph.add_edge(
                from,
                to,
                LineEdge {
                    line,
                    voltage_level,
                },
            );
        }

        Ok(Self {
            graph,
            node_indices,
        })
    }

    /// Returns an iterator over the substations, in the model's order.
    pub fn substations(&self) -> impl Iterator<Item = &'a Substation> + '_ {
        self.graph.raw_nodes().iter().map(|n| n.weight)
    }

    /// Returns an iterator over the transmission lines, in the model's order.
    pub fn transmission_lines(&self) -> impl Iterator<Item = &LineEdge<'a>> + '_ {
        self.graph.raw_edges().iter().map(|e| &e.weight)
    }

    /// Returns the substation with the given id, if it is part of the graph.
    pub fn substation(&self, substation_id: u64) -> Result<&'a Substation, Error> {
        self.index(substation_id).map(|idx| self.graph[idx])
    }

    fn index(&self, substation_id: u64) -> Result<NodeIndex, Error> {
        self.node_indices.get(&substation_id).copied().ok_or_else(|| {
            Error::element_not_found(format!(
                "Substation with id {} not found.",
                substation_id
            ))
        })
    }

    /// Adds every substation connected to `root` by transmission lines to
    /// `visited`, starting with `root` itself.
    ///
    /// Substations already in `visited` are not added again, but the walk
    /// still continues through them, so a shared accumulator can be carried
    /// across several calls.
    pub fn find_connected_substations(
        &self,
        root: u64,
        visited: &mut Vec<&'a Substation>,
    ) -> Result<(), Error> {
        self.traverse(root, visited, |_| true)
    }

    /// Like [`find_connected_substations`][Self::find_connected_substations],
    /// but only follows lines whose from node is at `voltage_level`.
    pub fn find_connected_substations_at_voltage_level(
        &self,
        root: u64,
        visited: &mut Vec<&'a Substation>,
        voltage_level: &VoltageLevel,
    ) -> Result<(), Error> {
        self.traverse(root, visited, |edge| edge.voltage_level == *voltage_level)
    }

    fn traverse(
        &self,
        root: u64,
        visited: &mut Vec<&'a Substation>,
        follow: impl Fn(&LineEdge<'a>) -> bool,
    ) -> Result<(), Error> {
        let root_index = self.index(root)?;
        if !is_visited(visited, root) {
            visited.push(self.graph[root_index]);
        }

        let mut reached = vec![root_index];
        let mut stack = vec![root_index];
        while let Some(index) = stack.pop() {
            let edges = self
                .graph
                .edges_directed(index, petgraph::Direction::Outgoing)
                .chain(
                    self.graph
                        .edges_directed(index, petgraph::Direction::Incoming),
                );
            for edge in edges {
                if !follow(edge.weight()) {
                    continue;
                }
                let other = if edge.source() == index {
                    edge.target()
                } else {
                    edge.source()
                };
                if reached.contains(&other) {
                    continue;
                }
                reached.push(other);
                stack.push(other);

                let substation = self.graph[other];
                if !is_visited(visited, substation.internal_id()) {
                    visited.push(substation);
                }
            }
        }

        Ok(())
    }
}

fn is_visited(visited: &[&Substation], substation_id: u64) -> bool {
    visited.iter().any(|s| s.internal_id() == substation_id)
}
