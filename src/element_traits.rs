// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits shared by all elements of a network
//! model.

use crate::{element_type::ElementType, TopologyConfig};

/// The descriptive attributes every network element carries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementInfo {
    /// Identifier, unique among the elements of the same type.
    pub internal_id: u64,
    pub number: i32,
    pub acronym: String,
    pub name: String,
    pub description: String,
}

impl ElementInfo {
    /// Creates an `ElementInfo` with the given internal id and empty
    /// descriptive fields.
    pub fn new(internal_id: u64) -> Self {
        Self {
            internal_id,
            ..Default::default()
        }
    }

    /// Sets the name of the element.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the acronym of the element.
    pub fn with_acronym(mut self, acronym: impl Into<String>) -> Self {
        self.acronym = acronym.into();
        self
    }
}

/**
The capability set shared by every element of a network model.

Implementors only need to expose their [`ElementInfo`] and their
[`ElementType`]; the accessors for the individual attributes are provided.
*/
pub trait NetworkElement {
    /// Returns the descriptive attributes of the element.
    fn info(&self) -> &ElementInfo;
    /// Returns the type tag of the element.
    fn element_type(&self) -> ElementType;

    /// Returns the internal id of the element.
    fn internal_id(&self) -> u64 {
        self.info().internal_id
    }
    fn number(&self) -> i32 {
        self.info().number
    }
    fn acronym(&self) -> &str {
        &self.info().acronym
    }
    fn name(&self) -> &str {
        &self.info().name
    }
    fn description(&self) -> &str {
        &self.info().description
    }
}

/// Decides whether an element takes part in a pruned topology.
pub trait RetainWhenPruning {
    /// Returns true if the element should be kept when the network is in
    /// pruning mode.  Always true when pruning mode is off.
    fn retain_when_pruning(&self, config: &TopologyConfig) -> bool;
}
