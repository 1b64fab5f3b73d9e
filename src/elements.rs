// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The elements a transmission network model is made of.
//!
//! Elements form an ownership tree: a [`Company`] owns [`Division`]s and
//! [`TransmissionLine`]s, a `Division` owns [`Substation`]s, and substations
//! and lines own the [`Node`]s, [`Switch`]es and series devices inside them.
//! Children refer back to their parent by id only.  Assigning a child
//! collection through a parent's setter rewires every child's parent id.

mod branch;
mod company;
mod node;
mod substation;
mod switch;
mod transformer;

pub use branch::{LineSegment, SeriesCompensator, TransmissionLine};
pub use company::{Company, Division};
pub use node::{Node, NodeParent, ObservationState};
pub use substation::Substation;
pub use switch::{
    NormalState, OverrideMode, Switch, SwitchMode, SwitchParent, SwitchState, SwitchingDeviceKind,
};
pub use transformer::Transformer;
