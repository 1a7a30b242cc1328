use serde::{Deserialize, Serialize};

use super::Ingredient;

/// One assembled taco: a name plus the resolved ingredient selection.
///
/// Built by [`build_taco`](crate::order_flow::builder::build_taco) from a
/// [`TacoSubmission`]; immutable once built and owned by the order it is
/// appended to. Ingredients keep submission order, duplicates included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taco {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

/// Payload of one design-form post: the chosen name and ingredient ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacoSubmission {
    pub name: String,
    pub ingredient_ids: Vec<String>,
}

impl TacoSubmission {
    pub fn new<I, S>(name: impl Into<String>, ingredient_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredient_ids: ingredient_ids.into_iter().map(Into::into).collect(),
        }
    }
}
