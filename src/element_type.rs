// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `ElementType` enum, which tags every element of a
//! network model.

use crate::element_traits::NetworkElement;
use std::fmt::Display;

/// Represents the type of a network element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    NetworkModel,
    Company,
    Division,
    Substation,
    Node,
    Switch,
    CircuitBreaker,
    Transformer,
    LineSegment,
    SeriesCompensator,
    TransmissionLine,
}

impl Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementType::NetworkModel => write!(f, "NetworkModel"),
            ElementType::Company => write!(f, "Company"),
            ElementType::Division => write!(f, "Division"),
            ElementType::Substation => write!(f, "Substation"),
            ElementType::Node => write!(f, "Node"),
            ElementType::Switch => write!(f, "Switch"),
            ElementType::CircuitBreaker => write!(f, "CircuitBreaker"),
            ElementType::Transformer => write!(f, "Transformer"),
            ElementType::LineSegment => write!(f, "LineSegment"),
            ElementType::SeriesCompensator => write!(f, "SeriesCompensator"),
            ElementType::TransmissionLine => write!(f, "TransmissionLine"),
        }
    }
}

/// Predicates for checking the type of a `NetworkElement`.
pub(crate) trait TypePredicates: NetworkElement {
    fn is_switching_device(&self) -> bool {
        matches!(
            self.element_type(),
            ElementType::Switch | ElementType::CircuitBreaker
        )
    }
}

/// Implement the `TypePredicates` trait for all types that implement the
/// `NetworkElement` trait.
impl<T: NetworkElement> TypePredicates for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{LineSegment, Switch, SwitchingDeviceKind};
    use crate::ElementInfo;

    #[test]
    fn test_type_predicates() {
        let breaker = Switch::new(
            ElementInfo::new(1),
            SwitchingDeviceKind::CircuitBreaker,
            10,
            11,
        );
        assert!(breaker.is_switching_device());
        assert_eq!(breaker.element_type().to_string(), "CircuitBreaker");

        let segment = LineSegment::new(ElementInfo::new(2), Default::default());
        assert!(!segment.is_switching_device());
        assert_eq!(segment.element_type(), ElementType::LineSegment);
    }
}
