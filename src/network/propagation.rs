// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Measurement propagation across closed switching devices.

use crate::{Error, NetworkElement, NetworkModel};

impl NetworkModel {
    /// Propagates measurements across every switching device once, in
    /// ownership-tree order.
    ///
    /// Each device sees the node values left by the devices before it.
    /// Returns the number of devices that changed a node's values.
    pub fn propagate_measurements(&mut self) -> Result<usize, Error> {
        let switch_ids = self
            .switches()
            .map(|s| s.internal_id())
            .collect::<Vec<_>>();

        let mut propagated = 0;
        for switch_id in switch_ids {
            let switch = self.switch(switch_id)?;
            let (from_id, to_id) = (switch.from_node(), switch.to_node());
            let mut from = self.node(from_id)?.voltage.clone();
            let mut to = self.node(to_id)?.voltage.clone();

            if switch.propagate_measurements(&self.config, &mut from, &mut to) {
                self.node_mut(from_id)?.voltage = from;
                self.node_mut(to_id)?.voltage = to;
                propagated += 1;
            }
        }

        Ok(propagated)
    }

    /// Repeats [`propagate_measurements`][Self::propagate_measurements] until
    /// a pass changes nothing, or `max_passes` passes have run.
    ///
    /// Copied values are not marked as reported, so they are never copied
    /// onwards: measurements cross at most one switching device, and the loop
    /// stops after at most two passes.
    ///
    /// Returns the number of passes run.
    pub fn propagate_measurements_until_stable(
        &mut self,
        max_passes: usize,
    ) -> Result<usize, Error> {
        let mut passes = 0;
        while passes < max_passes {
            passes += 1;
            if self.propagate_measurements()? == 0 {
                return Ok(passes);
            }
        }
        if max_passes > 0 {
            tracing::debug!("Measurement propagation stopped after {max_passes} passes.");
        }
        Ok(passes)
    }
}

#[cfg(test)]
mod tests {
    use crate::elements::{SwitchMode, SwitchState};
    use crate::network::test_utils::NetworkBuilder;
    use crate::{Error, Phasor, TopologyConfig};

    #[test]
    fn test_propagation_pass() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let level = builder.voltage_level(500.0);
        let a = builder.substation("A");
        let measured = builder.measured_node(a, level, 1.01, 12.0);
        let silent = builder.node(a, level);
        let other = builder.node(a, level);
        builder.switch(a, measured, silent);
        let open = builder.switch(a, measured, other);
        let mut model = builder.build(None)?;
        model.switch_mut(open)?.actual_state = SwitchState::Open;

        assert_eq!(model.propagate_measurements()?, 1);
        let copied = model.node(silent)?.voltage.positive_sequence.measurement;
        assert_eq!(
            copied,
            model.node(measured)?.voltage.positive_sequence.measurement
        );
        assert_eq!(
            model.node(other)?.voltage.positive_sequence.measurement,
            Phasor::default()
        );

        // A second pass with no new telemetry changes nothing.
        let before = model.nodes().cloned().collect::<Vec<_>>();
        assert_eq!(model.propagate_measurements()?, 0);
        assert!(model.nodes().cloned().eq(before));

        Ok(())
    }

    #[test]
    fn test_default_mode_and_pruning() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let level = builder.voltage_level(500.0);
        let a = builder.substation("A");
        let measured = builder.measured_node(a, level, 1.0, 3.0);
        let silent = builder.node(a, level);
        let sw = builder.switch(a, silent, measured);

        let mut model = builder.build(Some(TopologyConfig {
            in_pruning_mode: true,
            ..Default::default()
        }))?;
        assert_eq!(model.propagate_measurements()?, 0);

        model.set_config(TopologyConfig::default());
        {
            let switch = model.switch_mut(sw)?;
            switch.actual_state = SwitchState::Open;
            switch.mode = SwitchMode::UsingNormalState;
        }
        assert_eq!(model.propagate_measurements()?, 1);
        assert_eq!(
            model.node(silent)?.voltage.positive_sequence.measurement.angle_degrees,
            3.0
        );

        Ok(())
    }

    #[test]
    fn test_until_stable() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let level = builder.voltage_level(230.0);
        let a = builder.substation("A");
        let n1 = builder.measured_node(a, level, 1.0, 1.0);
        let n2 = builder.node(a, level);
        let n3 = builder.measured_node(a, level, 0.99, 2.0);
        let n4 = builder.node(a, level);
        builder.switch(a, n1, n2);
        builder.switch(a, n4, n3);
        let mut model = builder.build(None)?;

        assert_eq!(model.propagate_measurements_until_stable(10)?, 2);
        assert_eq!(
            model.node(n4)?.voltage.positive_sequence.measurement.angle_degrees,
            2.0
        );
        assert_eq!(model.propagate_measurements_until_stable(10)?, 1);
        assert_eq!(model.propagate_measurements_until_stable(0)?, 0);

        Ok(())
    }

    #[test]
    fn test_single_hop() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let level = builder.voltage_level(230.0);
        let a = builder.substation("A");
        let measured = builder.measured_node(a, level, 1.0, 4.0);
        let middle = builder.node(a, level);
        let far = builder.node(a, level);
        builder.switch(a, measured, middle);
        builder.switch(a, middle, far);
        let mut model = builder.build(None)?;

        assert_eq!(model.propagate_measurements_until_stable(10)?, 2);
        assert_eq!(
            model.node(middle)?.voltage.positive_sequence.measurement.angle_degrees,
            4.0
        );
        assert!(!model.node(middle)?.voltage.measurement_was_reported);
        assert_eq!(
            model.node(far)?.voltage.positive_sequence.measurement,
            Phasor::default()
        );

        Ok(())
    }
}
