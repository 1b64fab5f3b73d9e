// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Selection of the elements that take part in a pruned topology.

use crate::elements::{Substation, TransmissionLine};
use crate::{NetworkModel, RetainWhenPruning, TopologyConfig};

impl RetainWhenPruning for NetworkModel {
    fn retain_when_pruning(&self, config: &TopologyConfig) -> bool {
        !config.in_pruning_mode
            || self
                .companies
                .iter()
                .any(|c| c.retain_when_pruning(config))
    }
}

impl NetworkModel {
    /// Returns the substations retained under the model's configuration.
    pub fn retained_substations(&self) -> Vec<&Substation> {
        self.substations()
            .filter(|s| s.retain_when_pruning(&self.config))
            .collect()
    }

    /// Returns the transmission lines retained under the model's
    /// configuration.
    pub fn retained_transmission_lines(&self) -> Vec<&TransmissionLine> {
        self.transmission_lines()
            .filter(|l| l.retain_when_pruning(&self.config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::network::test_utils::NetworkBuilder;
    use crate::{Error, NetworkElement, RetainWhenPruning, TopologyConfig};

    #[test]
    fn test_retained_substations() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let level = builder.voltage_level(500.0);
        let a = builder.substation("A");
        let b = builder.substation("B");
        let na = builder.measured_node(a, level, 1.0, 0.0);
        let nb = builder.node(b, level);
        builder.line(a, na, b, nb);
        let mut model = builder.build(None)?;

        assert_eq!(model.retained_substations().len(), 2);
        assert_eq!(model.retained_transmission_lines().len(), 1);
        assert!(model.retain_when_pruning(model.config()));

        model.set_config(TopologyConfig {
            in_pruning_mode: true,
            ..Default::default()
        });
        let retained = model.retained_substations();
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].name(), "A");
        assert!(model.retained_transmission_lines().is_empty());
        assert!(model.retain_when_pruning(model.config()));

        model.node_mut(na)?.voltage.measurement_was_reported = false;
        assert!(model.retained_substations().is_empty());
        assert!(!model.retain_when_pruning(model.config()));

        Ok(())
    }
}
