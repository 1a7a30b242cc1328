//! The fixed, read-only ingredient catalog.
//!
//! Reference data for the design step: ten ingredients, two per
//! [`IngredientType`], in a fixed presentation order. The catalog is built
//! once, shared process-wide without locking, and never mutated. Every
//! session reads the same [`Catalog::shared`] instance.

use std::sync::OnceLock;

use crate::model::{Ingredient, IngredientType};

/// Fixed lookup table of selectable ingredients.
#[derive(Debug)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
}

impl Catalog {
    /// The process-wide catalog instance.
    pub fn shared() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::standard)
    }

    /// The standard menu: two ingredients per type, in menu order.
    fn standard() -> Self {
        use IngredientType::*;
        Self {
            ingredients: vec![
                Ingredient::new("FLTO", "Flour Tortilla", Wrap),
                Ingredient::new("COTO", "Corn Tortilla", Wrap),
                Ingredient::new("GRBF", "Ground Beef", Protein),
                Ingredient::new("CARN", "Carnitas", Protein),
                Ingredient::new("CHED", "Cheddar", Cheese),
                Ingredient::new("JACK", "Monterrey Jack", Cheese),
                Ingredient::new("TMTO", "Diced Tomatoes", Veggie),
                Ingredient::new("LETC", "Lettuce", Veggie),
                Ingredient::new("SLSA", "Salsa", Sauce),
                Ingredient::new("SRCR", "Sour Cream", Sauce),
            ],
        }
    }

    /// All ingredients, grouped by type then menu order.
    pub fn list(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Looks up an ingredient by its short code. Ids are case-sensitive.
    pub fn find(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Ingredients of one type, in menu order.
    pub fn of_type(&self, kind: IngredientType) -> Vec<&Ingredient> {
        self.ingredients.iter().filter(|i| i.kind == kind).collect()
    }
}
