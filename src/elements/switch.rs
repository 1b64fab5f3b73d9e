// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Switching devices and the rules for resolving whether they are open.

use crate::element_traits::{ElementInfo, NetworkElement, RetainWhenPruning};
use crate::element_type::ElementType;
use crate::{TopologyConfig, VoltagePhasorGroup};

/// The kind of a switching device.  Both kinds follow the same state rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwitchingDeviceKind {
    #[default]
    Switch,
    CircuitBreaker,
}

/// The state a switching device is designed to be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NormalState {
    Open,
    #[default]
    Closed,
}

/// A telemetered or inferred switching device state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwitchState {
    Open,
    Closed,
    #[default]
    Unknown,
}

/// Which state decides whether a switching device is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwitchMode {
    /// Use the normal state.  This is the device's default mode.
    UsingNormalState,
    /// Use the telemetered actual state.
    #[default]
    UsingActualState,
}

/// Whether the device is operated automatically or by hand.  Recorded for
/// downstream consumers; does not change how the device resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverrideMode {
    #[default]
    Automatic,
    Manual,
}

/// The element a switching device belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchParent {
    Substation(u64),
    TransmissionLine(u64),
}

/// A two-terminal switching device between a from node and a to node.
#[derive(Clone, Debug, PartialEq)]
pub struct Switch {
    info: ElementInfo,
    kind: SwitchingDeviceKind,
    from_node: u64,
    to_node: u64,
    parent: Option<SwitchParent>,
    pub normal_state: NormalState,
    pub actual_state: SwitchState,
    pub inferred_state: SwitchState,
    pub mode: SwitchMode,
    pub override_mode: OverrideMode,
}

impl Switch {
    /// Creates a normally closed switching device between the nodes with the
    /// given ids, resolving from its (still unknown) actual state.
    pub fn new(info: ElementInfo, kind: SwitchingDeviceKind, from_node: u64, to_node: u64) -> Self {
        Self {
            info,
            kind,
            from_node,
            to_node,
            parent: None,
            normal_state: NormalState::default(),
            actual_state: SwitchState::default(),
            inferred_state: SwitchState::default(),
            mode: SwitchMode::default(),
            override_mode: OverrideMode::default(),
        }
    }

    pub fn kind(&self) -> SwitchingDeviceKind {
        self.kind
    }

    pub fn from_node(&self) -> u64 {
        self.from_node
    }

    pub fn to_node(&self) -> u64 {
        self.to_node
    }

    pub fn parent(&self) -> Option<SwitchParent> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: SwitchParent) {
        self.parent = Some(parent);
    }

    /// Returns true if the device resolves from its normal state.
    pub fn is_in_default_mode(&self) -> bool {
        self.mode == SwitchMode::UsingNormalState
    }

    /// Returns true if the device is open.
    ///
    ///  - In pruning mode every device is open.
    ///  - In default mode the normal state decides.
    ///  - Otherwise the actual state decides, and an `Unknown` actual state
    ///    counts as closed.
    pub fn is_open(&self, config: &TopologyConfig) -> bool {
        if config.in_pruning_mode {
            return true;
        }
        if self.is_in_default_mode() {
            return self.normal_state == NormalState::Open;
        }
        match self.actual_state {
            SwitchState::Open => true,
            SwitchState::Closed => false,
            SwitchState::Unknown => {
                tracing::warn!(
                    "{}:{} has an unknown actual state and is considered closed.",
                    self.element_type(),
                    self.internal_id()
                );
                false
            }
        }
    }

    pub fn is_closed(&self, config: &TopologyConfig) -> bool {
        !self.is_open(config)
    }

    /// Copies measurements across the device if it is closed and exactly
    /// one of its terminals was reported by telemetry.
    ///
    /// `from` and `to` are the voltage records of the device's from and to
    /// nodes.  Returns true if any value of the unreported side changed.
    pub fn propagate_measurements(
        &self,
        config: &TopologyConfig,
        from: &mut VoltagePhasorGroup,
        to: &mut VoltagePhasorGroup,
    ) -> bool {
        if self.is_open(config) {
            return false;
        }

        let changed = match (from.measurement_was_reported, to.measurement_was_reported) {
            (true, false) => to.copy_measurements_from(from, config.phase_configuration),
            (false, true) => from.copy_measurements_from(to, config.phase_configuration),
            _ => false,
        };
        if changed {
            tracing::debug!(
                "Propagated measurements across {}:{} ({} <-> {}).",
                self.element_type(),
                self.internal_id(),
                self.from_node,
                self.to_node
            );
        }
        changed
    }
}

impl NetworkElement for Switch {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn element_type(&self) -> ElementType {
        match self.kind {
            SwitchingDeviceKind::Switch => ElementType::Switch,
            SwitchingDeviceKind::CircuitBreaker => ElementType::CircuitBreaker,
        }
    }
}

/// Switching devices carry no telemetry of their own.
impl RetainWhenPruning for Switch {
    fn retain_when_pruning(&self, config: &TopologyConfig) -> bool {
        !config.in_pruning_mode
    }
}
