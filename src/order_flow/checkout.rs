//! Checkout coordinator: merges the submitted fields and runs validation.

use crate::model::{Order, OrderFields};
use crate::validation::{validate_order_fields, Violation};

/// Merges the checkout form into the order and validates it.
///
/// The merge happens unconditionally so a rejected order re-presents the
/// customer's own field values; the accumulated tacos are untouched either
/// way. An empty violation set means the order is ready to finalize.
pub fn submit(order: &mut Order, fields: OrderFields) -> Vec<Violation> {
    order.merge_fields(fields);
    validate_order_fields(&order.fields())
}
