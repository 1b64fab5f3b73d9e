// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Detection of observable islands: groups of substations connected by
//! transmission lines.

mod graph;
mod observable_island;
mod report;

pub use graph::{LineEdge, TransmissionGraph};
pub use observable_island::{merge_islands, ObservableIsland};
pub use report::IslandReport;

use crate::{Error, NetworkElement, NetworkModel, VoltageLevel};

impl NetworkModel {
    /// Returns the graph of the model's substations and transmission lines.
    pub fn transmission_graph(&self) -> Result<TransmissionGraph<'_>, Error> {
        TransmissionGraph::try_new(self)
    }

    /// Returns the connected components of the transmission graph, each with
    /// the transmission lines leaving its substations.
    ///
    /// Islands are rooted at substations in the model's order, so every
    /// substation appears in exactly one island.
    pub fn observable_islands(&self) -> Result<Vec<ObservableIsland<'_>>, Error> {
        let graph = self.transmission_graph()?;
        graph.observable_islands()
    }

    /// Like [`observable_islands`][Self::observable_islands], but substations
    /// are only connected through lines at `voltage_level`, and only those
    /// lines are included.
    pub fn observable_islands_at_voltage_level(
        &self,
        voltage_level: &VoltageLevel,
    ) -> Result<Vec<ObservableIsland<'_>>, Error> {
        let graph = self.transmission_graph()?;
        graph.observable_islands_at_voltage_level(voltage_level)
    }
}

impl<'a> TransmissionGraph<'a> {
    /// Returns one island per connected component of the graph.
    pub fn observable_islands(&self) -> Result<Vec<ObservableIsland<'a>>, Error> {
        self.collect_islands(|root| {
            let mut island = ObservableIsland::from_root(root, self)?;
            island.append_transmission_lines(self);
            Ok(island)
        })
    }

    /// Returns one island per component of the graph restricted to lines at
    /// `voltage_level`.
    pub fn observable_islands_at_voltage_level(
        &self,
        voltage_level: &VoltageLevel,
    ) -> Result<Vec<ObservableIsland<'a>>, Error> {
        self.collect_islands(|root| {
            let mut island = ObservableIsland::from_root_at_voltage_level(root, self, voltage_level)?;
            island.append_transmission_lines_at_voltage_level(self, voltage_level);
            Ok(island)
        })
    }

    fn collect_islands(
        &self,
        grow: impl Fn(u64) -> Result<ObservableIsland<'a>, Error>,
    ) -> Result<Vec<ObservableIsland<'a>>, Error> {
        let mut islands: Vec<ObservableIsland<'a>> = vec![];
        for substation in self.substations() {
            let root = substation.internal_id();
            if islands.iter().any(|i| i.contains_substation(root)) {
                continue;
            }
            let island = grow(root)?;
            tracing::debug!(
                "Found island rooted at substation {} with {} substation(s) and {} line(s).",
                root,
                island.substations().len(),
                island.transmission_lines().len()
            );
            islands.push(island);
        }
        Ok(islands)
    }
}
