//! Composite-item builder: one design-form post in, one taco out.

use tracing::debug;

use crate::catalog::Catalog;
use crate::model::{Taco, TacoSubmission};

use super::BuildError;

/// Longest accepted taco name. Domain constant; the design form enforces the
/// same bound client-side.
pub const MAX_TACO_NAME_LEN: usize = 50;

/// Builds a [`Taco`] from one submission, resolving every ingredient id
/// against the catalog.
///
/// Pure over catalog + input: no side effects, no partial tacos. Duplicated
/// ids are allowed and the resolved sequence keeps submission order.
pub fn build_taco(catalog: &Catalog, submission: &TacoSubmission) -> Result<Taco, BuildError> {
    if submission.ingredient_ids.is_empty() {
        return Err(BuildError::NoIngredients);
    }
    if submission.name.is_empty() {
        return Err(BuildError::EmptyName);
    }
    if submission.name.chars().count() > MAX_TACO_NAME_LEN {
        return Err(BuildError::NameTooLong(submission.name.clone()));
    }

    let mut ingredients = Vec::with_capacity(submission.ingredient_ids.len());
    for id in &submission.ingredient_ids {
        match catalog.find(id) {
            Some(ingredient) => ingredients.push(ingredient.clone()),
            None => return Err(BuildError::UnknownIngredient(id.clone())),
        }
    }

    debug!(name = %submission.name, count = ingredients.len(), "Taco built");
    Ok(Taco {
        name: submission.name.clone(),
        ingredients,
    })
}
