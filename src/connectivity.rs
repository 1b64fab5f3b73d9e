// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The electrical connectivity of the nodes of a [`NetworkModel`].

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::elements::{
    LineSegment, Node, SeriesCompensator, Switch, Transformer, TransmissionLine,
};
use crate::{Error, NetworkElement, NetworkModel, TopologyConfig};

/// An element linking two nodes, as an edge of an [`ElectricalGraph`].
#[derive(Clone, Copy, Debug)]
pub enum Link<'a> {
    Switch(&'a Switch),
    Transformer(&'a Transformer),
    LineSegment(&'a LineSegment),
    SeriesCompensator(&'a SeriesCompensator),
    /// A transmission line without segments or compensators, linking its
    /// end nodes directly.
    TransmissionLine(&'a TransmissionLine),
}

impl Link<'_> {
    /// Whether current can flow through the link under `config`.  Only
    /// switching devices can be open.
    pub fn is_closed(&self, config: &TopologyConfig) -> bool {
        match self {
            Link::Switch(switch) => switch.is_closed(config),
            _ => true,
        }
    }

    pub fn element_id(&self) -> u64 {
        match self {
            Link::Switch(e) => e.internal_id(),
            Link::Transformer(e) => e.internal_id(),
            Link::LineSegment(e) => e.internal_id(),
            Link::SeriesCompensator(e) => e.internal_id(),
            Link::TransmissionLine(e) => e.internal_id(),
        }
    }
}

/// Nodes as vertices, and every element that connects two nodes as an edge.
pub struct ElectricalGraph<'a> {
    graph: UnGraph<&'a Node, Link<'a>>,
    node_indices: HashMap<u64, NodeIndex>,
    config: &'a TopologyConfig,
}

impl<'a> ElectricalGraph<'a> {
    /// Creates the graph of all nodes of `model` and the elements linking
    /// them.
    pub fn try_new(model: &'a NetworkModel) -> Result<Self, Error> {
        let mut graph = UnGraph::new_undirected();
        let mut node_indices = HashMap::new();

        for node in model.nodes() {
            node_indices.insert(node.internal_id(), graph.add_node(node));
        }

        let index_of = |node_id: u64| {
            node_indices.get(&node_id).copied().ok_or_else(|| {
                Error::element_not_found(format!("Node with id {} not found.", node_id))
            })
        };

        let mut links = vec![];
        for switch in model.switches() {
            links.push((switch.from_node(), switch.to_node(), Link::Switch(switch)));
        }
        for substation in model.substations() {
            for transformer in substation.transformers() {
                let primary = transformer.primary_node();
                links.push((
                    primary,
                    transformer.secondary_node(),
                    Link::Transformer(transformer),
                ));
                if let Some(tertiary) = transformer.tertiary_node() {
                    links.push((primary, tertiary, Link::Transformer(transformer)));
                }
            }
        }
        for line in model.transmission_lines() {
            if line.line_segments().is_empty() && line.series_compensators().is_empty() {
                links.push((line.from_node(), line.to_node(), Link::TransmissionLine(line)));
                continue;
            }
            for segment in line.line_segments() {
                links.push((segment.from_node(), segment.to_node(), Link::LineSegment(segment)));
            }
            for compensator in line.series_compensators() {
                links.push((
                    compensator.from_node(),
                    compensator.to_node(),
                    Link::SeriesCompensator(compensator),
                ));
            }
        }

        let mut edges = Vec::with_capacity(links.len());
        for (from, to, link) in links {
            edges.push((index_of(from)?, index_of(to)?, link));
        }
        for (from, to, link) in edges {
            graph.add_edge(from, to, link);
        }

        Ok(Self {
            graph,
            node_indices,
            config: model.config(),
        })
    }

    /// Returns an iterator over the nodes, in the model's order.
    pub fn nodes(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.graph.raw_nodes().iter().map(|n| n.weight)
    }

    /// Returns an iterator over the links between nodes.
    pub fn links(&self) -> impl Iterator<Item = &Link<'a>> + '_ {
        self.graph.raw_edges().iter().map(|e| &e.weight)
    }

    /// Returns all nodes reachable from `root` without crossing an open
    /// switching device, starting with `root` itself.
    pub fn connected_nodes(&self, root: u64) -> Result<Vec<&'a Node>, Error> {
        let root_index = self.node_indices.get(&root).copied().ok_or_else(|| {
            Error::element_not_found(format!("Node with id {} not found.", root))
        })?;

        let mut visited = vec![root_index];
        let mut stack = vec![root_index];
        while let Some(index) = stack.pop() {
            for edge in self.graph.edges(index) {
                if !edge.weight().is_closed(self.config) {
                    continue;
                }
                let other = if edge.source() == index {
                    edge.target()
                } else {
                    edge.source()
                };
                if visited.contains(&other) {
                    continue;
                }
                visited.push(other);
                stack.push(other);
            }
        }

        Ok(visited.into_iter().map(|index| self.graph[index]).collect())
    }
}

impl NetworkModel {
    /// Returns the graph of the model's nodes and the elements linking them.
    pub fn electrical_graph(&self) -> Result<ElectricalGraph<'_>, Error> {
        ElectricalGraph::try_new(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::element_traits::ElementInfo;
    use crate::elements::{NormalState, SwitchMode, SwitchState};
    use crate::network::test_utils::NetworkBuilder;
    use crate::Impedance;

    fn ids(nodes: &[&Node]) -> BTreeSet<u64> {
        nodes.iter().map(|n| n.internal_id()).collect()
    }

    #[test]
    fn test_connected_nodes() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let hv = builder.voltage_level(500.0);
        let lv = builder.voltage_level(230.0);
        let a = builder.substation("A");
        let b = builder.substation("B");
        let (a1, a2, a3) = (builder.node(a, hv), builder.node(a, hv), builder.node(a, lv));
        let b1 = builder.node(b, hv);
        let closed = builder.switch(a, a1, a2);
        let open = builder.switch(a, a2, a3);
        builder.line(a, a2, b, b1);

        let mut model = builder.build(None)?;
        model.switch_mut(open)?.actual_state = SwitchState::Open;

        let graph = model.electrical_graph()?;
        assert_eq!(graph.nodes().count(), 4);
        assert_eq!(graph.links().count(), 3);
        assert_eq!(ids(&graph.connected_nodes(a1)?), BTreeSet::from([a1, a2, b1]));
        assert_eq!(ids(&graph.connected_nodes(a3)?), BTreeSet::from([a3]));
        assert_eq!(graph.connected_nodes(a1)?[0].internal_id(), a1);

        // In default mode the normal state decides.
        {
            let switch = model.switch_mut(closed)?;
            switch.mode = SwitchMode::UsingNormalState;
            switch.normal_state = NormalState::Open;
        }
        let graph = model.electrical_graph()?;
        assert_eq!(ids(&graph.connected_nodes(a1)?), BTreeSet::from([a1]));
        assert_eq!(ids(&graph.connected_nodes(b1)?), BTreeSet::from([a2, b1]));

        assert!(graph
            .connected_nodes(999)
            .is_err_and(|e| e == Error::element_not_found("Node with id 999 not found.")));

        Ok(())
    }

    #[test]
    fn test_pruning_opens_every_switch() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let hv = builder.voltage_level(500.0);
        let lv = builder.voltage_level(230.0);
        let a = builder.substation("A");
        let (a1, a2, a3) = (builder.node(a, hv), builder.node(a, hv), builder.node(a, lv));
        builder.switch(a, a1, a2);
        builder
            .substation_mut(a)
            .add_transformer(Transformer::new(ElementInfo::new(100), a1, a3));

        let mut model = builder.build(None)?;
        assert_eq!(
            ids(&model.electrical_graph()?.connected_nodes(a1)?),
            BTreeSet::from([a1, a2, a3])
        );

        let mut config = model.config().clone();
        config.in_pruning_mode = true;
        model.set_config(config);
        assert_eq!(
            ids(&model.electrical_graph()?.connected_nodes(a1)?),
            BTreeSet::from([a1, a3])
        );

        Ok(())
    }

    #[test]
    fn test_segmented_line() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let level = builder.voltage_level(500.0);
        let a = builder.substation("A");
        let b = builder.substation("B");
        let (na, nb) = (builder.node(a, level), builder.node(b, level));
        let line_id = builder.line(a, na, b, nb);
        let model = builder.build(None)?;
        let graph = model.electrical_graph()?;
        assert!(matches!(
            graph.links().next(),
            Some(Link::TransmissionLine(line)) if line.internal_id() == line_id
        ));

        // A line whose end nodes are only joined through a series compensator
        // and a segment meeting at a mid-line node.
        let mut builder = NetworkBuilder::new();
        let level = builder.voltage_level(500.0);
        let a = builder.substation("A");
        let b = builder.substation("B");
        let (na, nb) = (builder.node(a, level), builder.node(b, level));
        let mut line = TransmissionLine::new(
            ElementInfo::new(100).with_name("A-B"),
            (builder.substation_id(a), na),
            (builder.substation_id(b), nb),
        );
        line.set_nodes(vec![Node::new(ElementInfo::new(101), level)]);
        line.set_series_compensators(vec![SeriesCompensator::new(
            ElementInfo::new(102),
            Impedance::positive_sequence(0.0, -0.01, 0.0),
        )
        .between(na, 101)]);
        line.set_line_segments(vec![LineSegment::new(
            ElementInfo::new(103),
            Impedance::positive_sequence(0.001, 0.01, 0.02),
        )
        .between(101, nb)]);
        builder.add_line(line);
        let model = builder.build(None)?;

        let graph = model.electrical_graph()?;
        assert_eq!(graph.links().count(), 2);
        assert_eq!(ids(&graph.connected_nodes(na)?), BTreeSet::from([na, 101, nb]));

        Ok(())
    }
}
