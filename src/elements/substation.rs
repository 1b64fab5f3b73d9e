// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Substations, which own nodes, switching devices and transformers.

use crate::element_traits::{ElementInfo, NetworkElement, RetainWhenPruning};
use crate::element_type::ElementType;
use crate::elements::{Node, NodeParent, Switch, SwitchParent, Transformer};
use crate::{CoherencyConfig, TopologyConfig};

/// A substation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Substation {
    info: ElementInfo,
    parent_division: Option<u64>,
    nodes: Vec<Node>,
    switches: Vec<Switch>,
    transformers: Vec<Transformer>,
    /// How the substation's nodes are clustered into observed buses.
    pub coherency: CoherencyConfig,
}

impl Substation {
    pub fn new(info: ElementInfo) -> Self {
        Self {
            info,
            ..Default::default()
        }
    }

    pub fn with_coherency(mut self, coherency: CoherencyConfig) -> Self {
        self.coherency = coherency;
        self
    }

    /// Returns the id of the division that owns the substation.
    pub fn parent_division(&self) -> Option<u64> {
        self.parent_division
    }

    pub(crate) fn set_parent_division(&mut self, id: u64) {
        self.parent_division = Some(id);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Replaces the nodes of the substation, making it their parent.
    pub fn set_nodes(&mut self, mut nodes: Vec<Node>) {
        for node in &mut nodes {
            node.set_parent(NodeParent::Substation(self.info.internal_id));
        }
        self.nodes = nodes;
    }

    pub fn add_node(&mut self, mut node: Node) {
        node.set_parent(NodeParent::Substation(self.info.internal_id));
        self.nodes.push(node);
    }

    pub fn switches(&self) -> &[Switch] {
        &self.switches
    }

    pub(crate) fn switches_mut(&mut self) -> &mut [Switch] {
        &mut self.switches
    }

    /// Replaces the switching devices of the substation, making it their
    /// parent.
    pub fn set_switches(&mut self, mut switches: Vec<Switch>) {
        for switch in &mut switches {
            switch.set_parent(SwitchParent::Substation(self.info.internal_id));
        }
        self.switches = switches;
    }

    pub fn add_switch(&mut self, mut switch: Switch) {
        switch.set_parent(SwitchParent::Substation(self.info.internal_id));
        self.switches.push(switch);
    }

    pub fn transformers(&self) -> &[Transformer] {
        &self.transformers
    }

    /// Replaces the transformers of the substation, making it their parent.
    pub fn set_transformers(&mut self, mut transformers: Vec<Transformer>) {
        for transformer in &mut transformers {
            transformer.set_parent_substation(self.info.internal_id);
        }
        self.transformers = transformers;
    }

    pub fn add_transformer(&mut self, mut transformer: Transformer) {
        transformer.set_parent_substation(self.info.internal_id);
        self.transformers.push(transformer);
    }
}

impl NetworkElement for Substation {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn element_type(&self) -> ElementType {
        ElementType::Substation
    }
}

impl RetainWhenPruning for Substation {
    fn retain_when_pruning(&self, config: &TopologyConfig) -> bool {
        !config.in_pruning_mode
            || self.nodes.iter().any(|n| n.retain_when_pruning(config))
            || self.switches.iter().any(|s| s.retain_when_pruning(config))
            || self
                .transformers
                .iter()
                .any(|t| t.retain_when_pruning(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::SwitchingDeviceKind;
    use crate::VoltageLevel;

    #[test]
    fn test_parent_rewiring() {
        let level = VoltageLevel::new(1, 500.0);
        let mut substation = Substation::new(ElementInfo::new(7));
        substation.set_nodes(vec![
            Node::new(ElementInfo::new(1), level),
            Node::new(ElementInfo::new(2), level),
        ]);
        substation.add_node(Node::new(ElementInfo::new(3), level));
        substation.set_switches(vec![Switch::new(
            ElementInfo::new(1),
            SwitchingDeviceKind::CircuitBreaker,
            1,
            2,
        )]);
        substation.set_transformers(vec![Transformer::new(ElementInfo::new(1), 1, 3)]);

        assert!(substation
            .nodes()
            .iter()
            .all(|n| n.parent() == Some(NodeParent::Substation(7))));
        assert_eq!(substation.nodes()[2].parent_substation(), Some(7));
        assert_eq!(
            substation.switches()[0].parent(),
            Some(SwitchParent::Substation(7))
        );
        assert_eq!(substation.transformers()[0].parent_substation(), Some(7));

        let mut other = Substation::new(ElementInfo::new(8));
        other.set_nodes(substation.nodes().to_vec());
        assert!(other.nodes().iter().all(|n| n.parent_substation() == Some(8)));
    }

    #[test]
    fn test_retain_when_pruning() {
        let pruning = TopologyConfig {
            in_pruning_mode: true,
            ..Default::default()
        };
        let level = VoltageLevel::new(1, 500.0);
        let mut substation = Substation::new(ElementInfo::new(7));
        assert!(!substation.retain_when_pruning(&pruning));
        assert!(substation.retain_when_pruning(&TopologyConfig::default()));

        substation.add_switch(Switch::new(
            ElementInfo::new(1),
            SwitchingDeviceKind::Switch,
            1,
            2,
        ));
        substation.add_node(Node::new(ElementInfo::new(1), level));
        assert!(!substation.retain_when_pruning(&pruning));

        let mut reported = Node::new(ElementInfo::new(2), level);
        reported.voltage.measurement_was_reported = true;
        substation.add_node(reported);
        assert!(substation.retain_when_pruning(&pruning));
    }
}
