/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Per-element vectors shared by the rule-of-mixtures estimates

use super::errors::{PropertyError, Result};
use crate::composition::Composition;
use crate::elements::Element;
use ndarray::Array1;

/// Atomic fractions and molar volumes of a composition, aligned by element
#[derive(Debug, Clone)]
pub struct MixingBasis {
    pub elements: Vec<Element>,
    pub fractions: Array1<f64>,
    pub volumes: Array1<f64>,
}

impl MixingBasis {
    pub fn new(composition: &Composition) -> Result<Self> {
        let (elements, fractions): (Vec<Element>, Vec<f64>) =
            composition.atomic_fractions().into_iter().unzip();
        let volumes = per_element(&elements, "molar volume", Element::molar_volume)?;

        Ok(Self {
            elements,
            fractions: Array1::from(fractions),
            volumes,
        })
    }

    /// `sum(x_i * V_i)`, the molar volume of the mixture
    pub fn mixture_volume(&self) -> f64 {
        self.fractions.dot(&self.volumes)
    }
}

/// Collect one property per element, failing on the first gap
pub fn per_element(
    elements: &[Element],
    property: &'static str,
    lookup: fn(&Element) -> Option<f64>,
) -> Result<Array1<f64>> {
    elements
        .iter()
        .map(|e| {
            lookup(e).ok_or_else(|| PropertyError::MissingData {
                element: e.symbol().to_string(),
                property,
            })
        })
        .collect::<Result<Vec<f64>>>()
        .map(Array1::from)
}
