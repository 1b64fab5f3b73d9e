// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Helper methods for checking invariants of a [`NetworkModel`].

use crate::{Error, NetworkElement};

use super::NetworkModelValidator;

impl NetworkModelValidator<'_> {
    /// Checks that the node an element connects to exists.
    pub(super) fn ensure_node_exists(
        &self,
        element: &impl NetworkElement,
        node_id: u64,
    ) -> Result<(), Error> {
        if self.model.node(node_id).is_err() {
            return Err(Error::invalid_connection(format!(
                "{}:{} Can't find a node with ID {}",
                element.element_type(),
                element.internal_id(),
                node_id
            )));
        }
        Ok(())
    }

    /// Checks that a two-terminal element doesn't connect a node to itself.
    pub(super) fn ensure_distinct_terminals(
        &self,
        element: &impl NetworkElement,
        from: u64,
        to: u64,
    ) -> Result<(), Error> {
        if from == to {
            return Err(Error::invalid_connection(format!(
                "{}:{} Can't connect node {} to itself.",
                element.element_type(),
                element.internal_id(),
                from
            )));
        }
        Ok(())
    }

    /// Checks that the given substation exists and owns the given node.
    pub(super) fn ensure_node_in_substation(
        &self,
        element: &impl NetworkElement,
        substation_id: u64,
        node_id: u64,
    ) -> Result<(), Error> {
        if self.model.substation(substation_id).is_err() {
            return Err(Error::invalid_connection(format!(
                "{}:{} Can't find a substation with ID {}",
                element.element_type(),
                element.internal_id(),
                substation_id
            )));
        }
        self.ensure_node_exists(element, node_id)?;

        let owner = self.model.node(node_id)?.parent_substation();
        if owner != Some(substation_id) {
            return Err(Error::invalid_connection(format!(
                "{}:{} Node {} is not part of substation {}.",
                element.element_type(),
                element.internal_id(),
                node_id,
                substation_id
            )));
        }
        Ok(())
    }
}
