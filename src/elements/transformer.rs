// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Transformers, which link nodes of different voltage levels inside a
//! substation.

use crate::element_traits::{ElementInfo, NetworkElement, RetainWhenPruning};
use crate::element_type::ElementType;
use crate::{Impedance, TopologyConfig};

/// A two- or three-winding transformer.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformer {
    info: ElementInfo,
    parent_substation: Option<u64>,
    primary_node: u64,
    secondary_node: u64,
    tertiary_node: Option<u64>,
    pub impedance: Impedance,
}

impl Transformer {
    pub fn new(info: ElementInfo, primary_node: u64, secondary_node: u64) -> Self {
        Self {
            info,
            parent_substation: None,
            primary_node,
            secondary_node,
            tertiary_node: None,
            impedance: Impedance::default(),
        }
    }

    /// Adds a tertiary winding connected to the given node.
    pub fn with_tertiary(mut self, tertiary_node: u64) -> Self {
        self.tertiary_node = Some(tertiary_node);
        self
    }

    pub fn parent_substation(&self) -> Option<u64> {
        self.parent_substation
    }

    pub(crate) fn set_parent_substation(&mut self, id: u64) {
        self.parent_substation = Some(id);
    }

    pub fn primary_node(&self) -> u64 {
        self.primary_node
    }

    pub fn secondary_node(&self) -> u64 {
        self.secondary_node
    }

    pub fn tertiary_node(&self) -> Option<u64> {
        self.tertiary_node
    }

    /// Returns the ids of all nodes the transformer connects.
    pub fn terminals(&self) -> impl Iterator<Item = u64> + '_ {
        [self.primary_node, self.secondary_node]
            .into_iter()
            .chain(self.tertiary_node)
    }
}

impl NetworkElement for Transformer {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn element_type(&self) -> ElementType {
        ElementType::Transformer
    }
}

impl RetainWhenPruning for Transformer {
    fn retain_when_pruning(&self, config: &TopologyConfig) -> bool {
        !config.in_pruning_mode
    }
}
