use serde::{Deserialize, Serialize};

use super::Taco;

/// The session's accumulating order: tacos plus delivery/payment fields.
///
/// Created empty when a session opens, mutated only by taco appends and by
/// the checkout field merge, and reset to empty after a successful finalize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub tacos: Vec<Taco>,
    pub delivery_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub cc_number: String,
    pub cc_expiration: String,
    pub cc_cvv: String,
}

impl Order {
    pub fn is_empty(&self) -> bool {
        self.tacos.is_empty()
    }

    pub fn taco_count(&self) -> usize {
        self.tacos.len()
    }

    /// Copies the checkout form values into the order, preserving the
    /// accumulated tacos. Always applied before validation so a rejected
    /// order re-presents the customer's own values.
    pub fn merge_fields(&mut self, fields: OrderFields) {
        self.delivery_name = fields.delivery_name;
        self.street = fields.street;
        self.city = fields.city;
        self.state = fields.state;
        self.zip = fields.zip;
        self.cc_number = fields.cc_number;
        self.cc_expiration = fields.cc_expiration;
        self.cc_cvv = fields.cc_cvv;
    }

    /// The current field values as a form payload, for re-presentation.
    pub fn fields(&self) -> OrderFields {
        OrderFields {
            delivery_name: self.delivery_name.clone(),
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
            cc_number: self.cc_number.clone(),
            cc_expiration: self.cc_expiration.clone(),
            cc_cvv: self.cc_cvv.clone(),
        }
    }
}

/// Payload of one checkout-form post: the eight delivery/payment strings.
///
/// All fields are plain strings; the validation engine is total over
/// arbitrary input, so nothing is rejected at the type level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFields {
    pub delivery_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub cc_number: String,
    pub cc_expiration: String,
    pub cc_cvv: String,
}

impl OrderFields {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        delivery_name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        cc_number: impl Into<String>,
        cc_expiration: impl Into<String>,
        cc_cvv: impl Into<String>,
    ) -> Self {
        Self {
            delivery_name: delivery_name.into(),
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
            cc_number: cc_number.into(),
            cc_expiration: cc_expiration.into(),
            cc_cvv: cc_cvv.into(),
        }
    }
}
