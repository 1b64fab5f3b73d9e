// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for resolving the nodes of a [`NetworkModel`] into observed
//! buses.

mod observed_bus;
mod voltage_level_group;

pub use observed_bus::ObservedBus;
pub use voltage_level_group::VoltageLevelGroup;

use crate::{Error, NetworkElement, NetworkModel};

impl NetworkModel {
    /// Marks every node directly observed or unobserved, depending on whether
    /// its measurements are estimator-eligible under the model's phase
    /// configuration.
    pub fn assign_observability(&mut self) -> Result<(), Error> {
        let config = self.config().clone();
        let node_ids = self
            .nodes()
            .map(|n| n.internal_id())
            .collect::<Vec<_>>();
        for node_id in node_ids {
            self.node_mut(node_id)?.assign_observability(&config);
        }
        Ok(())
    }

    /// Returns one group per voltage level of the model, in the model's
    /// order, each holding the nodes at that level in ownership-tree order.
    ///
    /// The groups have no observed buses until they are resolved.
    pub fn voltage_level_groups(&self) -> Result<Vec<VoltageLevelGroup<'_>>, Error> {
        let mut groups = self
            .voltage_levels()
            .iter()
            .map(|level| VoltageLevelGroup::new(*level))
            .collect::<Vec<_>>();

        for node in self.nodes() {
            let coherency = self.coherency_for(node)?;
            let group = groups
                .iter_mut()
                .find(|g| g.voltage_level() == node.base_kv)
                .ok_or_else(|| {
                    Error::internal(format!(
                        "No voltage level group for {}.",
                        node.base_kv
                    ))
                })?;
            group.add_node(node, coherency);
        }

        Ok(groups)
    }

    /// Assigns node observability, then clusters the directly observed nodes
    /// of every voltage level into observed buses.
    pub fn resolve_observed_buses(&mut self) -> Result<Vec<VoltageLevelGroup<'_>>, Error> {
        self.assign_observability()?;

        let model: &NetworkModel = self;
        let mut groups = model.voltage_level_groups()?;
        for group in &mut groups {
            group.resolve_observed_buses();
        }
        Ok(groups)
    }
}
