// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Companies and divisions, the upper levels of the ownership tree.

use std::cell::OnceCell;

use uuid::Uuid;

use crate::element_traits::{ElementInfo, NetworkElement, RetainWhenPruning};
use crate::element_type::ElementType;
use crate::elements::{Substation, TransmissionLine};
use crate::TopologyConfig;

/// A utility company: owns divisions and the transmission lines between its
/// substations.
#[derive(Clone, Debug, Default)]
pub struct Company {
    info: ElementInfo,
    unique_id: OnceCell<Uuid>,
    divisions: Vec<Division>,
    transmission_lines: Vec<TransmissionLine>,
}

impl Company {
    pub fn new(info: ElementInfo) -> Self {
        Self {
            info,
            ..Default::default()
        }
    }

    /// Returns the process-wide unique id of the company, generating one on
    /// first access.
    pub fn unique_id(&self) -> Uuid {
        *self.unique_id.get_or_init(Uuid::new_v4)
    }

    /// Overrides the unique id of the company.
    pub fn set_unique_id(&mut self, unique_id: Uuid) {
        self.unique_id = OnceCell::from(unique_id);
    }

    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    pub(crate) fn divisions_mut(&mut self) -> &mut [Division] {
        &mut self.divisions
    }

    /// Replaces the divisions of the company, making it their parent.
    pub fn set_divisions(&mut self, mut divisions: Vec<Division>) {
        for division in &mut divisions {
            division.parent_company = Some(self.info.internal_id);
        }
        self.divisions = divisions;
    }

    /// Adds a division to the company, making it its parent.
    pub fn add_division(&mut self, mut division: Division) {
        division.parent_company = Some(self.info.internal_id);
        self.divisions.push(division);
    }

    pub fn transmission_lines(&self) -> &[TransmissionLine] {
        &self.transmission_lines
    }

    pub(crate) fn transmission_lines_mut(&mut self) -> &mut [TransmissionLine] {
        &mut self.transmission_lines
    }

    /// Replaces the transmission lines of the company, making it their
    /// parent.
    pub fn set_transmission_lines(&mut self, mut lines: Vec<TransmissionLine>) {
        for line in &mut lines {
            line.set_parent_company(self.info.internal_id);
        }
        self.transmission_lines = lines;
    }

    /// Adds a transmission line to the company, making it its parent.
    pub fn add_transmission_line(&mut self, mut line: TransmissionLine) {
        line.set_parent_company(self.info.internal_id);
        self.transmission_lines.push(line);
    }
}

impl NetworkElement for Company {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn element_type(&self) -> ElementType {
        ElementType::Company
    }
}

impl RetainWhenPruning for Company {
    fn retain_when_pruning(&self, config: &TopologyConfig) -> bool {
        !config.in_pruning_mode
            || self.divisions.iter().any(|d| d.retain_when_pruning(config))
            || self
                .transmission_lines
                .iter()
                .any(|l| l.retain_when_pruning(config))
    }
}

/// An operating division of a company: owns substations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Division {
    info: ElementInfo,
    parent_company: Option<u64>,
    substations: Vec<Substation>,
}

impl Division {
    pub fn new(info: ElementInfo) -> Self {
        Self {
            info,
            ..Default::default()
        }
    }

    /// Returns the id of the company that owns the division.
    pub fn parent_company(&self) -> Option<u64> {
        self.parent_company
    }

    pub fn substations(&self) -> &[Substation] {
        &self.substations
    }

    pub(crate) fn substations_mut(&mut self) -> &mut [Substation] {
        &mut self.substations
    }

    /// Replaces the substations of the division, making it their parent.
    pub fn set_substations(&mut self, mut substations: Vec<Substation>) {
        for substation in &mut substations {
            substation.set_parent_division(self.info.internal_id);
        }
        self.substations = substations;
    }

    /// Adds a substation to the division, making it its parent.
    pub fn add_substation(&mut self, mut substation: Substation) {
        substation.set_parent_division(self.info.internal_id);
        self.substations.push(substation);
    }
}

impl NetworkElement for Division {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn element_type(&self) -> ElementType {
        ElementType::Division
    }
}

impl RetainWhenPruning for Division {
    fn retain_when_pruning(&self, config: &TopologyConfig) -> bool {
        !config.in_pruning_mode
            || self
                .substations
                .iter()
                .any(|s| s.retain_when_pruning(config))
    }
}
