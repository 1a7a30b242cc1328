use serde::{Deserialize, Serialize};

/// The five ingredient groups a taco is assembled from.
///
/// Variants are ordered the way the design step presents them; the catalog
/// and the design view both rely on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngredientType {
    Wrap,
    Protein,
    Cheese,
    Veggie,
    Sauce,
}

impl IngredientType {
    /// All types, in presentation order.
    pub const ALL: [IngredientType; 5] = [
        IngredientType::Wrap,
        IngredientType::Protein,
        IngredientType::Cheese,
        IngredientType::Veggie,
        IngredientType::Sauce,
    ];

    /// The group id the rendering collaborator keys on (e.g. `wraps`).
    pub fn group_id(&self) -> &'static str {
        match self {
            IngredientType::Wrap => "wraps",
            IngredientType::Protein => "proteins",
            IngredientType::Cheese => "cheeses",
            IngredientType::Veggie => "veggies",
            IngredientType::Sauce => "sauces",
        }
    }
}

/// A single selectable ingredient from the catalog.
///
/// Ingredients are reference data: loaded once by the
/// [`Catalog`](crate::catalog::Catalog), never mutated by the workflow,
/// and shared across all sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Short stable code, case-sensitive (e.g. `FLTO`).
    pub id: String,
    /// Display name (e.g. "Flour Tortilla").
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IngredientType,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: IngredientType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}
