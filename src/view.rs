//! Payloads for the rendering collaborator.
//!
//! The core never formats HTML; it hands these serializable views to
//! whatever presentation layer sits in front of it.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::{Ingredient, IngredientType, Order};
use crate::validation::Violation;

/// One ingredient group of the design page (e.g. `wraps`).
#[derive(Debug, Clone, Serialize)]
pub struct IngredientGroup {
    pub id: &'static str,
    pub kind: IngredientType,
    pub ingredients: Vec<Ingredient>,
}

/// The design step: the catalog grouped by type, in presentation order.
#[derive(Debug, Clone, Serialize)]
pub struct DesignView {
    pub groups: Vec<IngredientGroup>,
}

impl DesignView {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let groups = IngredientType::ALL
            .into_iter()
            .map(|kind| IngredientGroup {
                id: kind.group_id(),
                kind,
                ingredients: catalog.of_type(kind).into_iter().cloned().collect(),
            })
            .collect();
        Self { groups }
    }
}

/// The order step: the current order plus any outstanding violations.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub order: Order,
    pub violations: Vec<Violation>,
}
