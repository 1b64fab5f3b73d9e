// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains the
//! `NetworkBuilder`, which can declaratively build network models for use in
//! tests.

use crate::element_traits::{ElementInfo, NetworkElement};
use crate::elements::{
    Company, Division, Node, Substation, Switch, SwitchState, SwitchingDeviceKind,
    TransmissionLine,
};
use crate::{
    Error, NetworkModel, PhasorChannel, TopologyConfig, VoltageLevel, VoltagePhasorGroup,
};

/// Represents a substation added to the `NetworkBuilder`.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub(crate) struct SubstationHandle(usize);

/// A builder for creating network models easily, for use in tests.
///
/// All substations end up in a single division of a single company, which
/// also owns all transmission lines.  Every element gets a fresh id.
pub(crate) struct NetworkBuilder {
    voltage_levels: Vec<VoltageLevel>,
    substations: Vec<Substation>,
    lines: Vec<TransmissionLine>,
    next_id: u64,
}

impl NetworkBuilder {
    pub(crate) fn new() -> Self {
        NetworkBuilder {
            voltage_levels: Vec::new(),
            substations: Vec::new(),
            lines: Vec::new(),
            next_id: 1,
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adds a voltage level of `kv` kV and returns it.
    pub(crate) fn voltage_level(&mut self, kv: f64) -> VoltageLevel {
        let level = VoltageLevel::new(self.next_id(), kv);
        self.voltage_levels.push(level);
        level
    }

    /// Adds a substation with the given name and returns its handle.
    pub(crate) fn substation(&mut self, name: &str) -> SubstationHandle {
        let id = self.next_id();
        self.substations
            .push(Substation::new(ElementInfo::new(id).with_name(name)));
        SubstationHandle(self.substations.len() - 1)
    }

    pub(crate) fn substation_id(&self, handle: SubstationHandle) -> u64 {
        self.substations[handle.0].internal_id()
    }

    pub(crate) fn substation_mut(&mut self, handle: SubstationHandle) -> &mut Substation {
        &mut self.substations[handle.0]
    }

    /// Adds a node without measurements to a substation and returns its id.
    pub(crate) fn node(&mut self, substation: SubstationHandle, level: VoltageLevel) -> u64 {
        let id = self.next_id();
        self.substations[substation.0].add_node(Node::new(ElementInfo::new(id), level));
        id
    }

    /// Adds a node with a reported, estimator-eligible positive-sequence
    /// measurement of `per_unit` magnitude and `angle_degrees`, and returns
    /// its id.
    pub(crate) fn measured_node(
        &mut self,
        substation: SubstationHandle,
        level: VoltageLevel,
        per_unit: f64,
        angle_degrees: f64,
    ) -> u64 {
        let id = self.next_id();
        let voltage = VoltagePhasorGroup::positive_sequence(
            per_unit * level.line_to_neutral_volts(),
            angle_degrees,
        );
        self.substations[substation.0]
            .add_node(Node::new(ElementInfo::new(id), level).with_voltage(voltage));
        id
    }

    /// Adds a node with reported, estimator-eligible measurements on all
    /// three phases and returns its id.
    pub(crate) fn three_phase_node(
        &mut self,
        substation: SubstationHandle,
        level: VoltageLevel,
        per_unit: f64,
        angle_degrees: f64,
    ) -> u64 {
        let id = self.next_id();
        let magnitude = per_unit * level.line_to_neutral_volts();
        let mut voltage = VoltagePhasorGroup::positive_sequence(magnitude, angle_degrees);
        voltage.phase_a = PhasorChannel::measured(magnitude, angle_degrees);
        voltage.phase_b = PhasorChannel::measured(magnitude, angle_degrees - 120.0);
        voltage.phase_c = PhasorChannel::measured(magnitude, angle_degrees + 120.0);
        self.substations[substation.0]
            .add_node(Node::new(ElementInfo::new(id), level).with_voltage(voltage));
        id
    }

    /// Adds a closed switch between two nodes of a substation and returns its
    /// id.
    pub(crate) fn switch(&mut self, substation: SubstationHandle, from: u64, to: u64) -> u64 {
        let id = self.next_id();
        self.switch_with_id(substation, id, from, to, SwitchingDeviceKind::Switch);
        id
    }

    /// Adds a closed switching device with the given id and kind.
    pub(crate) fn switch_with_id(
        &mut self,
        substation: SubstationHandle,
        id: u64,
        from: u64,
        to: u64,
        kind: SwitchingDeviceKind,
    ) {
        let mut switch = Switch::new(ElementInfo::new(id), kind, from, to);
        switch.actual_state = SwitchState::Closed;
        self.substations[substation.0].add_switch(switch);
    }

    /// Adds a transmission line between nodes of two substations and returns
    /// its id.
    pub(crate) fn line(
        &mut self,
        from: SubstationHandle,
        from_node: u64,
        to: SubstationHandle,
        to_node: u64,
    ) -> u64 {
        let id = self.next_id();
        let line = TransmissionLine::new(
            ElementInfo::new(id).with_name(format!(
                "{}-{}",
                self.substations[from.0].name(),
                self.substations[to.0].name()
            )),
            (self.substation_id(from), from_node),
            (self.substation_id(to), to_node),
        );
        self.lines.push(line);
        id
    }

    /// Adds a prepared transmission line.
    pub(crate) fn add_line(&mut self, line: TransmissionLine) {
        self.lines.push(line);
    }

    /// Builds the network model from the elements added to the builder.
    pub(crate) fn build(&self, config: Option<TopologyConfig>) -> Result<NetworkModel, Error> {
        let mut division = Division::new(ElementInfo::new(1).with_name("Division"));
        division.set_substations(self.substations.clone());

        let mut company = Company::new(ElementInfo::new(1).with_name("Company"));
        company.set_divisions(vec![division]);
        company.set_transmission_lines(self.lines.clone());

        NetworkModel::try_new(
            vec![company],
            self.voltage_levels.clone(),
            config.unwrap_or_default(),
        )
    }
}
