// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`NetworkModel`] instances from companies and voltage
//! levels.

use std::cell::OnceCell;

use crate::element_traits::{ElementInfo, NetworkElement};
use crate::element_type::TypePredicates;
use crate::elements::{Company, Node, Switch};
use crate::{Error, NetworkModel, TopologyConfig, VoltageLevel};

use super::{ElementLocation, LineLocation, LocationMap, SubstationLocation};

/// `NetworkModel` instantiation.
impl NetworkModel {
    /// Creates a new [`NetworkModel`] from the given companies and voltage
    /// levels.
    ///
    /// Returns an error if element ids are not unique per element type, or if
    /// the model is otherwise invalid.
    pub fn try_new<C: IntoIterator<Item = Company>, V: IntoIterator<Item = VoltageLevel>>(
        companies: C,
        voltage_levels: V,
        config: TopologyConfig,
    ) -> Result<Self, Error> {
        let mut model = Self {
            info: ElementInfo::default(),
            unique_id: OnceCell::new(),
            companies: companies.into_iter().collect(),
            voltage_levels: voltage_levels.into_iter().collect(),
            config,
            substation_locations: LocationMap::new(),
            line_locations: LocationMap::new(),
            node_locations: LocationMap::new(),
            switch_locations: LocationMap::new(),
        };
        model.index_elements()?;

        model.validate()?;

        Ok(model)
    }

    fn index_elements(&mut self) -> Result<(), Error> {
        let mut company_ids = LocationMap::new();
        let mut division_ids = LocationMap::new();

        for (ci, company) in self.companies.iter().enumerate() {
            insert_unique(&mut company_ids, company, ci)?;

            for (di, division) in company.divisions().iter().enumerate() {
                insert_unique(&mut division_ids, division, (ci, di))?;

                for (si, substation) in division.substations().iter().enumerate() {
                    let location = SubstationLocation {
                        company: ci,
                        division: di,
                        substation: si,
                    };
                    insert_unique(&mut self.substation_locations, substation, location)?;
                    index_terminals(
                        &mut self.node_locations,
                        &mut self.switch_locations,
                        substation.nodes(),
                        substation.switches(),
                        |i| ElementLocation::Substation(location, i),
                    )?;
                }
            }

            for (li, line) in company.transmission_lines().iter().enumerate() {
                let location = LineLocation {
                    company: ci,
                    line: li,
                };
                insert_unique(&mut self.line_locations, line, location)?;
                index_terminals(
                    &mut self.node_locations,
                    &mut self.switch_locations,
                    line.nodes(),
                    line.switches(),
                    |i| ElementLocation::TransmissionLine(location, i),
                )?;
            }
        }

        Ok(())
    }
}

fn index_terminals(
    node_locations: &mut LocationMap<ElementLocation>,
    switch_locations: &mut LocationMap<ElementLocation>,
    nodes: &[Node],
    switches: &[Switch],
    location: impl Fn(usize) -> ElementLocation,
) -> Result<(), Error> {
    for (i, node) in nodes.iter().enumerate() {
        insert_unique(node_locations, node, location(i))?;
    }
    for (i, switch) in switches.iter().enumerate() {
        insert_unique(switch_locations, switch, location(i))?;
    }
    Ok(())
}

/// Records the location of `element`, failing if another element of the same
/// type already has its id.
///
/// Switches and circuit breakers share one id space, reported as switching
/// devices.
fn insert_unique<L>(
    locations: &mut LocationMap<L>,
    element: &impl NetworkElement,
    location: L,
) -> Result<(), Error> {
    let id = element.internal_id();
    if locations.insert(id, location).is_some() {
        let element_type = if element.is_switching_device() {
            "SwitchingDevice".to_string()
        } else {
            element.element_type().to_string()
        };
        return Err(Error::invalid_model(format!(
            "Duplicate {element_type} ID found: {id}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Division, Substation, SwitchingDeviceKind, TransmissionLine};
    use crate::network::test_utils::NetworkBuilder;

    #[test]
    fn test_duplicate_ids() {
        let level = VoltageLevel::new(1, 500.0);
        let company = |substations: Vec<Substation>| {
            let mut division = Division::new(ElementInfo::new(1));
            division.set_substations(substations);
            let mut company = Company::new(ElementInfo::new(1));
            company.set_divisions(vec![division]);
            company
        };
        let substation = |id: u64, node_ids: &[u64]| {
            let mut substation = Substation::new(ElementInfo::new(id));
            substation.set_nodes(
                node_ids
                    .iter()
                    .map(|id| Node::new(ElementInfo::new(*id), level))
                    .collect(),
            );
            substation
        };

        assert!(NetworkModel::try_new(
            vec![company(vec![substation(1, &[1, 2]), substation(2, &[3])])],
            vec![level],
            TopologyConfig::default(),
        )
        .is_ok());

        assert!(NetworkModel::try_new(
            vec![company(vec![substation(1, &[1, 2]), substation(1, &[3])])],
            vec![level],
            TopologyConfig::default(),
        )
        .is_err_and(|e| e == Error::invalid_model("Duplicate Substation ID found: 1")));

        assert!(NetworkModel::try_new(
            vec![company(vec![substation(1, &[1, 2]), substation(2, &[2])])],
            vec![level],
            TopologyConfig::default(),
        )
        .is_err_and(|e| e == Error::invalid_model("Duplicate Node ID found: 2")));

        assert!(NetworkModel::try_new(
            vec![company(vec![]), company(vec![])],
            vec![level],
            TopologyConfig::default(),
        )
        .is_err_and(|e| e == Error::invalid_model("Duplicate Company ID found: 1")));

        // Ids only need to be unique per element type.
        assert!(NetworkModel::try_new(
            vec![company(vec![substation(1, &[1])])],
            vec![level],
            TopologyConfig::default(),
        )
        .is_ok());
    }

    #[test]
    fn test_duplicate_switching_devices() {
        let mut builder = NetworkBuilder::new();
        let level = builder.voltage_level(230.0);
        let sub = builder.substation("A");
        let n1 = builder.node(sub, level);
        let n2 = builder.node(sub, level);
        let breaker = builder.switch(sub, n1, n2);
        builder.switch_with_id(sub, breaker, n2, n1, SwitchingDeviceKind::CircuitBreaker);

        assert!(builder.build(None).is_err_and(|e| e
            == Error::invalid_model(format!(
                "Duplicate SwitchingDevice ID found: {breaker}"
            ))));
    }

    #[test]
    fn test_line_ids() {
        let mut builder = NetworkBuilder::new();
        let level = builder.voltage_level(230.0);
        let a = builder.substation("A");
        let b = builder.substation("B");
        let na = builder.node(a, level);
        let nb = builder.node(b, level);
        let line = builder.line(a, na, b, nb);
        builder.add_line(TransmissionLine::new(
            ElementInfo::new(line),
            (builder.substation_id(a), na),
            (builder.substation_id(b), nb),
        ));

        assert!(builder.build(None).is_err_and(|e| e
            == Error::invalid_model(format!("Duplicate TransmissionLine ID found: {line}"))));
    }
}
