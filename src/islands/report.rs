// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A human-readable summary of observable islands.

use std::fmt;

use crate::elements::Substation;
use crate::islands::{ObservableIsland, TransmissionGraph};
use crate::NetworkElement;

/// Formats a list of islands as text: the island count, then for each island
/// its substation names and the endpoints of its transmission lines.
pub struct IslandReport<'r, 'a> {
    islands: &'r [ObservableIsland<'a>],
    graph: &'r TransmissionGraph<'a>,
}

impl<'r, 'a> IslandReport<'r, 'a> {
    pub fn new(islands: &'r [ObservableIsland<'a>], graph: &'r TransmissionGraph<'a>) -> Self {
        Self { islands, graph }
    }

    /// Looks up a line endpoint, which need not be part of the island.
    fn endpoint_name(&self, substation_id: u64) -> String {
        match self.graph.substation(substation_id) {
            Ok(substation) => display_name(substation),
            Err(_) => format!("#{}", substation_id),
        }
    }
}

fn display_name(substation: &Substation) -> String {
    if substation.name().is_empty() {
        format!("#{}", substation.internal_id())
    } else {
        substation.name().to_string()
    }
}

impl fmt::Display for IslandReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Observable islands: {}", self.islands.len())?;
        for (index, island) in self.islands.iter().enumerate() {
            let names = island
                .substations()
                .iter()
                .map(|s| display_name(s))
                .collect::<Vec<_>>();
            writeln!(f, "Island {}:", index + 1)?;
            writeln!(f, "  Substations: {}", names.join(", "))?;
            writeln!(f, "  Transmission lines:")?;
            for line in island.transmission_lines() {
                writeln!(
                    f,
                    "    {} -> {}",
                    self.endpoint_name(line.from_substation()),
                    self.endpoint_name(line.to_substation())
                )?;
            }
        }
        Ok(())
    }
}
