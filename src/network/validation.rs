// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating a [`NetworkModel`].

mod invariant_checks;
mod validate_references;

use crate::{Error, NetworkModel};

pub(crate) struct NetworkModelValidator<'a> {
    model: &'a NetworkModel,
}

impl NetworkModel {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let validator = NetworkModelValidator { model: self };

        validator.validate_voltage_levels()?;
        validator.validate_switches()?;
        validator.validate_transformers()?;
        validator.validate_transmission_lines()?;

        Ok(())
    }
}
