// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Transmission Network Topology

This is a library for resolving the topology of an electric transmission
network into the measurement points and connected regions that a state
estimator works with.

## The network model

The main struct is [`NetworkModel`], instances of which can be created by
passing the companies that own the network, the voltage levels in use and a
[`TopologyConfig`] to the [`try_new`][NetworkModel::try_new] method.

Companies own divisions and transmission lines, divisions own substations, and
substations own the nodes, switching devices and transformers inside them.
All of these are available from the [`elements`] module, and implement the
[`NetworkElement`] trait.

## Validation

The [`try_new`][NetworkModel::try_new] method checks, among other things,
that:

- Element ids are unique within each element type.
- Every node is at one of the model's voltage levels.
- Switching devices and transformers connect distinct nodes of their own
  substation.
- Transmission lines connect existing substations through their nodes.

If any of the validation steps fail, the method will return an [`Error`], and
a [`NetworkModel`] instance otherwise.

## Processing passes

- [`propagate_measurements`][NetworkModel::propagate_measurements] copies
  voltage measurements across closed switching devices that were reported on
  one side only.
- [`resolve_observed_buses`][NetworkModel::resolve_observed_buses] clusters
  the directly observed nodes of each voltage level into [`ObservedBus`]es.
- [`observable_islands`][NetworkModel::observable_islands] and
  [`observable_islands_at_voltage_level`][NetworkModel::observable_islands_at_voltage_level]
  find the [`ObservableIsland`]s of substations connected by transmission
  lines.
- [`retained_substations`][NetworkModel::retained_substations] lists the
  substations that survive pruning.
*/

mod buses;
pub use buses::{ObservedBus, VoltageLevelGroup};

mod config;
pub use config::{CoherencyConfig, CoherencyMethod, PhaseConfiguration, TopologyConfig};

mod connectivity;
pub use connectivity::{ElectricalGraph, Link};

mod element_traits;
pub use element_traits::{ElementInfo, NetworkElement, RetainWhenPruning};

mod element_type;
pub use element_type::ElementType;

pub mod elements;

mod error;
pub use error::{Error, ErrorKind};

mod impedance;
pub use impedance::{ComplexMatrix3, Impedance, Matrix3};

mod islands;
pub use islands::{merge_islands, IslandReport, LineEdge, ObservableIsland, TransmissionGraph};

mod network;
pub use network::NetworkModel;

mod phasor;
pub use phasor::{Phasor, PhasorChannel, VoltagePhasorGroup};

mod voltage_level;
pub use voltage_level::VoltageLevel;
