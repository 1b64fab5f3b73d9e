// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Impedance-bearing series branches: transmission lines and the line
//! segments and series compensators they are made of.

use crate::element_traits::{ElementInfo, NetworkElement, RetainWhenPruning};
use crate::element_type::ElementType;
use crate::elements::{Node, NodeParent, Switch, SwitchParent};
use crate::{Impedance, TopologyConfig};

/// A section of a transmission line between two nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineSegment {
    info: ElementInfo,
    parent_transmission_line: Option<u64>,
    from_node: u64,
    to_node: u64,
    pub impedance: Impedance,
}

impl LineSegment {
    pub fn new(info: ElementInfo, impedance: Impedance) -> Self {
        Self {
            info,
            impedance,
            ..Default::default()
        }
    }

    /// Sets the ids of the nodes at either end of the segment.
    pub fn between(mut self, from_node: u64, to_node: u64) -> Self {
        self.from_node = from_node;
        self.to_node = to_node;
        self
    }

    pub fn from_node(&self) -> u64 {
        self.from_node
    }

    pub fn to_node(&self) -> u64 {
        self.to_node
    }

    pub fn parent_transmission_line(&self) -> Option<u64> {
        self.parent_transmission_line
    }
}

impl NetworkElement for LineSegment {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn element_type(&self) -> ElementType {
        ElementType::LineSegment
    }
}

/// A series capacitor or reactor inserted into a transmission line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesCompensator {
    info: ElementInfo,
    parent_transmission_line: Option<u64>,
    from_node: u64,
    to_node: u64,
    pub impedance: Impedance,
}

impl SeriesCompensator {
    pub fn new(info: ElementInfo, impedance: Impedance) -> Self {
        Self {
            info,
            impedance,
            ..Default::default()
        }
    }

    /// Sets the ids of the nodes at either end of the compensator.
    pub fn between(mut self, from_node: u64, to_node: u64) -> Self {
        self.from_node = from_node;
        self.to_node = to_node;
        self
    }

    pub fn from_node(&self) -> u64 {
        self.from_node
    }

    pub fn to_node(&self) -> u64 {
        self.to_node
    }

    pub fn parent_transmission_line(&self) -> Option<u64> {
        self.parent_transmission_line
    }
}

impl NetworkElement for SeriesCompensator {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn element_type(&self) -> ElementType {
        ElementType::SeriesCompensator
    }
}

/// A transmission line connecting a node of one substation to a node of
/// another.
///
/// The line owns the nodes, segments, compensators and switches that lie
/// along it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransmissionLine {
    info: ElementInfo,
    parent_company: Option<u64>,
    from_substation: u64,
    from_node: u64,
    to_substation: u64,
    to_node: u64,
    nodes: Vec<Node>,
    line_segments: Vec<LineSegment>,
    series_compensators: Vec<SeriesCompensator>,
    switches: Vec<Switch>,
}

impl TransmissionLine {
    /// Creates a line from `from_node` in `from_substation` to `to_node` in
    /// `to_substation`.
    pub fn new(
        info: ElementInfo,
        (from_substation, from_node): (u64, u64),
        (to_substation, to_node): (u64, u64),
    ) -> Self {
        Self {
            info,
            from_substation,
            from_node,
            to_substation,
            to_node,
            ..Default::default()
        }
    }

    pub fn parent_company(&self) -> Option<u64> {
        self.parent_company
    }

    pub(crate) fn set_parent_company(&mut self, id: u64) {
        self.parent_company = Some(id);
    }

    pub fn from_substation(&self) -> u64 {
        self.from_substation
    }

    pub fn from_node(&self) -> u64 {
        self.from_node
    }

    pub fn to_substation(&self) -> u64 {
        self.to_substation
    }

    pub fn to_node(&self) -> u64 {
        self.to_node
    }

    /// Returns true if the line has the given substation at either end.
    pub fn touches(&self, substation_id: u64) -> bool {
        self.from_substation == substation_id || self.to_substation == substation_id
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Replaces the nodes along the line, making it their parent.
    pub fn set_nodes(&mut self, mut nodes: Vec<Node>) {
        for node in &mut nodes {
            node.set_parent(NodeParent::TransmissionLine(self.info.internal_id));
        }
        self.nodes = nodes;
    }

    pub fn line_segments(&self) -> &[LineSegment] {
        &self.line_segments
    }

    /// Replaces the segments of the line, making it their parent.
    pub fn set_line_segments(&mut self, mut segments: Vec<LineSegment>) {
        for segment in &mut segments {
            segment.parent_transmission_line = Some(self.info.internal_id);
        }
        self.line_segments = segments;
    }

    pub fn series_compensators(&self) -> &[SeriesCompensator] {
        &self.series_compensators
    }

    /// Replaces the series compensators of the line, making it their parent.
    pub fn set_series_compensators(&mut self, mut compensators: Vec<SeriesCompensator>) {
        for compensator in &mut compensators {
            compensator.parent_transmission_line = Some(self.info.internal_id);
        }
        self.series_compensators = compensators;
    }

    pub fn switches(&self) -> &[Switch] {
        &self.switches
    }

    pub(crate) fn switches_mut(&mut self) -> &mut [Switch] {
        &mut self.switches
    }

    /// Replaces the switching devices along the line, making it their parent.
    pub fn set_switches(&mut self, mut switches: Vec<Switch>) {
        for switch in &mut switches {
            switch.set_parent(SwitchParent::TransmissionLine(self.info.internal_id));
        }
        self.switches = switches;
    }

    /// Returns the total pi-model parameters of the line: the sum over all of
    /// its segments and compensators.
    pub fn impedance(&self) -> Impedance {
        self.line_segments
            .iter()
            .map(|s| s.impedance.clone())
            .chain(self.series_compensators.iter().map(|c| c.impedance.clone()))
            .sum()
    }
}

impl NetworkElement for TransmissionLine {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn element_type(&self) -> ElementType {
        ElementType::TransmissionLine
    }
}

impl RetainWhenPruning for TransmissionLine {
    fn retain_when_pruning(&self, config: &TopologyConfig) -> bool {
        !config.in_pruning_mode
            || self.nodes.iter().any(|n| n.retain_when_pruning(config))
            || self.switches.iter().any(|s| s.retain_when_pruning(config))
    }
}
