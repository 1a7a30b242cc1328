//! Field validation for the checkout form.
//!
//! The engine is a static rule table: one pure predicate per field, evaluated
//! in table order, never short-circuited, so the customer sees every problem
//! in a single round trip. All predicates are total over arbitrary strings;
//! malformed input produces violations, never a panic.

use serde::{Deserialize, Serialize};

use crate::model::OrderFields;

/// Banner added once whenever any field rule fails.
pub const GLOBAL_BANNER: &str = "Please correct the problems below and resubmit.";

/// The field a violation is attached to.
///
/// Wire names (via [`Field::as_str`]) are the contract with the rendering
/// collaborator and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// The synthetic banner slot, not tied to a single input.
    Global,
    DeliveryName,
    Street,
    City,
    State,
    Zip,
    CcNumber,
    CcExpiration,
    #[serde(rename = "ccCVV")]
    CcCvv,
    /// Taco name, from the design step.
    Name,
    /// Taco ingredient selection, from the design step.
    Ingredients,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Global => "global",
            Field::DeliveryName => "deliveryName",
            Field::Street => "street",
            Field::City => "city",
            Field::State => "state",
            Field::Zip => "zip",
            Field::CcNumber => "ccNumber",
            Field::CcExpiration => "ccExpiration",
            Field::CcCvv => "ccCVV",
            Field::Name => "name",
            Field::Ingredients => "ingredients",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field-or-global validation failure.
///
/// Transient: produced per validation call, handed to the rendering
/// collaborator, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub field: Field,
    pub message: String,
}

impl Violation {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

struct Rule {
    field: Field,
    message: &'static str,
    check: fn(&OrderFields) -> bool,
}

/// The rule table, in presentation order. The three payment rules are format
/// rules, not required rules: an empty card number fails the Luhn check and
/// reports the card message.
static RULES: [Rule; 8] = [
    Rule {
        field: Field::DeliveryName,
        message: "Name is required",
        check: |f| !f.delivery_name.is_empty(),
    },
    Rule {
        field: Field::Street,
        message: "Street is required",
        check: |f| !f.street.is_empty(),
    },
    Rule {
        field: Field::City,
        message: "City is required",
        check: |f| !f.city.is_empty(),
    },
    Rule {
        field: Field::State,
        message: "State is required",
        check: |f| !f.state.is_empty(),
    },
    Rule {
        field: Field::Zip,
        message: "Zip code is required",
        check: |f| is_digits(&f.zip),
    },
    Rule {
        field: Field::CcNumber,
        message: "Not a valid credit card number",
        check: |f| luhn_valid(&f.cc_number),
    },
    Rule {
        field: Field::CcExpiration,
        message: "Must be formatted MM/YY",
        check: |f| is_mm_yy(&f.cc_expiration),
    },
    Rule {
        field: Field::CcCvv,
        message: "Invalid CVV",
        check: |f| f.cc_cvv.len() == 3 && is_digits(&f.cc_cvv),
    },
];

/// Runs every rule against the submitted fields.
///
/// Returns the complete violation set in table order; when any rule fails the
/// [`GLOBAL_BANNER`] violation is prepended. An all-empty submission
/// therefore yields exactly 9 violations, a clean one exactly 0.
pub fn validate_order_fields(fields: &OrderFields) -> Vec<Violation> {
    let mut violations: Vec<Violation> = RULES
        .iter()
        .filter(|rule| !(rule.check)(fields))
        .map(|rule| Violation::new(rule.field, rule.message))
        .collect();

    if !violations.is_empty() {
        violations.insert(0, Violation::new(Field::Global, GLOBAL_BANNER));
    }

    violations
}

/// Non-empty and ASCII digits only. The postal-code shape deliberately
/// accepts any digit count; the upstream form never constrained length.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Standard mod-10 checksum over an all-digit string.
fn luhn_valid(s: &str) -> bool {
    if !is_digits(s) {
        return false;
    }
    let sum: u32 = s
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 == 0
}

/// Exactly `MM/YY` with MM in 01-12. No expiry-in-the-future check.
fn is_mm_yy(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'/' {
        return false;
    }
    if !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[3].is_ascii_digit()
        || !bytes[4].is_ascii_digit()
    {
        return false;
    }
    let month = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    (1..=12).contains(&month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> OrderFields {
        OrderFields::new(
            "Ima Hungry",
            "1234 Culinary Blvd.",
            "Foodsville",
            "CO",
            "81019",
            "4111111111111111",
            "10/19",
            "123",
        )
    }

    #[test]
    fn empty_submission_yields_nine_violations() {
        let violations = validate_order_fields(&OrderFields::default());
        assert_eq!(violations.len(), 9);

        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(messages[0], GLOBAL_BANNER);
        for expected in [
            "Name is required",
            "Street is required",
            "City is required",
            "State is required",
            "Zip code is required",
            "Not a valid credit card number",
            "Must be formatted MM/YY",
            "Invalid CVV",
        ] {
            assert!(messages.contains(&expected), "missing: {expected}");
        }
    }

    #[test]
    fn bad_payment_fields_yield_four_violations() {
        let mut fields = valid_fields();
        fields.cc_number = "1234432112344322".into();
        fields.cc_expiration = "14/91".into();
        fields.cc_cvv = "1234".into();

        let violations = validate_order_fields(&fields);
        assert_eq!(violations.len(), 4);
        assert_eq!(violations[0].field, Field::Global);
        assert_eq!(violations[1].field, Field::CcNumber);
        assert_eq!(violations[2].field, Field::CcExpiration);
        assert_eq!(violations[3].field, Field::CcCvv);
    }

    #[test]
    fn fully_valid_submission_is_clean() {
        assert!(validate_order_fields(&valid_fields()).is_empty());
    }

    #[test]
    fn terse_but_present_delivery_fields_pass() {
        // The form never constrained delivery-field content beyond presence;
        // a one-character street or single-digit zip is accepted.
        let fields = OrderFields::new("I", "1", "F", "C", "8", "4111111111111111", "10/19", "123");
        assert!(validate_order_fields(&fields).is_empty());
    }

    #[test]
    fn luhn_accepts_known_good_numbers() {
        assert!(luhn_valid("4111111111111111"));
        assert!(luhn_valid("4242424242424242"));
    }

    #[test]
    fn luhn_rejects_bad_checksums_and_non_digits() {
        assert!(!luhn_valid("1234432112344322"));
        assert!(!luhn_valid("4111111111111112"));
        assert!(!luhn_valid(""));
        assert!(!luhn_valid("4111-1111-1111-1111"));
    }

    #[test]
    fn expiration_must_be_mm_slash_yy() {
        assert!(is_mm_yy("01/23"));
        assert!(is_mm_yy("12/99"));
        assert!(!is_mm_yy("00/23"));
        assert!(!is_mm_yy("13/23"));
        assert!(!is_mm_yy("1/23"));
        assert!(!is_mm_yy("01-23"));
        assert!(!is_mm_yy("01/2023"));
        assert!(!is_mm_yy(""));
    }

    #[test]
    fn zip_requires_digits_only() {
        let mut fields = valid_fields();
        fields.zip = "8IO19".into();
        let violations = validate_order_fields(&fields);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[1].field, Field::Zip);
        assert_eq!(violations[1].message, "Zip code is required");
    }

    #[test]
    fn cvv_must_be_exactly_three_digits() {
        for bad in ["", "12", "1234", "12a"] {
            let mut fields = valid_fields();
            fields.cc_cvv = bad.into();
            let violations = validate_order_fields(&fields);
            assert_eq!(violations.len(), 2, "cvv {bad:?}");
            assert_eq!(violations[1].field, Field::CcCvv);
        }
    }

    #[test]
    fn field_wire_names_are_stable() {
        assert_eq!(Field::Global.as_str(), "global");
        assert_eq!(Field::DeliveryName.as_str(), "deliveryName");
        assert_eq!(Field::CcNumber.as_str(), "ccNumber");
        assert_eq!(Field::CcExpiration.as_str(), "ccExpiration");
        assert_eq!(Field::CcCvv.as_str(), "ccCVV");
    }
}
