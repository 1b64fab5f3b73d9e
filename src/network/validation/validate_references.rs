// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating that all elements of a [`NetworkModel`] refer to
//! elements that exist.

use std::collections::HashSet;

use crate::{Error, NetworkElement};

use super::NetworkModelValidator;

impl NetworkModelValidator<'_> {
    /// Validates that voltage level ids are unique, and that every node's
    /// base voltage level is one of the model's voltage levels.
    pub(super) fn validate_voltage_levels(&self) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for level in self.model.voltage_levels() {
            if !seen.insert(level.internal_id) {
                return Err(Error::invalid_model(format!(
                    "Duplicate VoltageLevel ID found: {}",
                    level.internal_id
                )));
            }
        }

        for node in self.model.nodes() {
            if !self.model.voltage_levels().contains(&node.base_kv) {
                return Err(Error::invalid_element(format!(
                    "Node:{} has voltage level {} (ID {}), which is not part of the model.",
                    node.internal_id(),
                    node.base_kv,
                    node.base_kv.internal_id
                )));
            }
        }
        Ok(())
    }

    /// Validates that every switching device connects two distinct, existing
    /// nodes.
    pub(super) fn validate_switches(&self) -> Result<(), Error> {
        for switch in self.model.switches() {
            self.ensure_distinct_terminals(switch, switch.from_node(), switch.to_node())?;
            self.ensure_node_exists(switch, switch.from_node())?;
            self.ensure_node_exists(switch, switch.to_node())?;
        }
        Ok(())
    }

    /// Validates that every transformer winding connects to an existing node
    /// of the transformer's own substation.
    pub(super) fn validate_transformers(&self) -> Result<(), Error> {
        for substation in self.model.substations() {
            for transformer in substation.transformers() {
                self.ensure_distinct_terminals(
                    transformer,
                    transformer.primary_node(),
                    transformer.secondary_node(),
                )?;
                for node_id in transformer.terminals() {
                    self.ensure_node_in_substation(
                        transformer,
                        substation.internal_id(),
                        node_id,
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Validates that every transmission line:
    ///  - starts at a node of its from substation,
    ///  - ends at a node of its to substation,
    ///  - has segments and compensators between existing nodes.
    pub(super) fn validate_transmission_lines(&self) -> Result<(), Error> {
        for line in self.model.transmission_lines() {
            self.ensure_node_in_substation(line, line.from_substation(), line.from_node())?;
            self.ensure_node_in_substation(line, line.to_substation(), line.to_node())?;

            for segment in line.line_segments() {
                self.ensure_distinct_terminals(segment, segment.from_node(), segment.to_node())?;
                self.ensure_node_exists(segment, segment.from_node())?;
                self.ensure_node_exists(segment, segment.to_node())?;
            }
            for compensator in line.series_compensators() {
                self.ensure_distinct_terminals(
                    compensator,
                    compensator.from_node(),
                    compensator.to_node(),
                )?;
                self.ensure_node_exists(compensator, compensator.from_node())?;
                self.ensure_node_exists(compensator, compensator.to_node())?;
            }
        }
        Ok(())
    }
}
