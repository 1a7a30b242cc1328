//! Error types for the order workflow.

use thiserror::Error;

use crate::validation::{Field, Violation};

/// Ways a design-form submission can fail to build a taco.
///
/// Recoverable and field-scoped: [`BuildError::field`] and
/// [`BuildError::violation`] map each case onto the violation contract the
/// rendering collaborator understands.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    /// No ingredients were selected.
    #[error("At least one ingredient must be chosen")]
    NoIngredients,

    /// The taco name was left empty.
    #[error("Name is required")]
    EmptyName,

    /// The taco name exceeds the maximum length.
    #[error("Name is too long: {0}")]
    NameTooLong(String),

    /// An ingredient id did not resolve against the catalog. The whole
    /// build is rejected; no partial taco is constructed.
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),
}

impl BuildError {
    /// The design-form field this failure is attached to.
    pub fn field(&self) -> Field {
        match self {
            BuildError::NoIngredients | BuildError::UnknownIngredient(_) => Field::Ingredients,
            BuildError::EmptyName | BuildError::NameTooLong(_) => Field::Name,
        }
    }

    /// The failure as a (field, message) pair for re-presentation.
    pub fn violation(&self) -> Violation {
        Violation::new(self.field(), self.to_string())
    }
}

/// Errors surfaced by [`OrderFlowClient`](crate::clients::OrderFlowClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderFlowError {
    /// The design submission failed to build a taco.
    #[error(transparent)]
    Build(BuildError),

    /// Checkout was attempted on an order with no tacos. A policy error,
    /// distinct from field validation: the items are a precondition.
    #[error("Order contains no tacos")]
    EmptyOrder,

    /// The session id is not (or no longer) known to the actor.
    #[error("Session expired or unknown: {0}")]
    SessionExpired(String),

    /// The fulfillment collaborator refused a finalized order.
    #[error("Fulfillment failed: {0}")]
    Fulfillment(String),

    /// An error occurred while communicating with the session actor.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for OrderFlowError {
    fn from(msg: String) -> Self {
        OrderFlowError::ActorCommunication(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_errors_map_to_design_form_fields() {
        assert_eq!(BuildError::NoIngredients.field(), Field::Ingredients);
        assert_eq!(
            BuildError::UnknownIngredient("SPAM".into()).field(),
            Field::Ingredients
        );
        assert_eq!(BuildError::EmptyName.field(), Field::Name);
        assert_eq!(BuildError::NameTooLong("x".into()).field(), Field::Name);
    }

    #[test]
    fn build_error_violation_carries_the_message() {
        let violation = BuildError::EmptyName.violation();
        assert_eq!(violation.field, Field::Name);
        assert_eq!(violation.message, "Name is required");
    }
}
