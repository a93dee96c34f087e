//! Checkout form validation.
//!
//! Every submit re-checks every field and produces a fresh
//! [`ValidationErrors`]; messages from an earlier attempt never carry over.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use dreamfit_core::{DeliveryInfo, Email, EmailError, Field, PaymentMethod};
use regex::Regex;
use serde::Serialize;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid regex"));

static ZIP_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("Invalid regex"));

/// Field name to human-readable message, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    /// True when no field failed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Fields that failed, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Validate the delivery form and the selected payment method.
///
/// Presence checks use the trimmed value; format checks run on the value as
/// typed. The form is valid exactly when the returned mapping is empty.
#[must_use]
pub fn validate(info: &DeliveryInfo, payment_method: Option<PaymentMethod>) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&info.first_name) {
        errors.insert(Field::FirstName, "First name is required");
    }
    if is_blank(&info.last_name) {
        errors.insert(Field::LastName, "Last name is required");
    }
    match Email::parse(&info.email) {
        Ok(_) => {}
        Err(EmailError::Empty) => errors.insert(Field::Email, "Email is required"),
        Err(EmailError::Invalid) => errors.insert(Field::Email, "Email is invalid"),
    }
    if is_blank(&info.phone) {
        errors.insert(Field::Phone, "Phone number is required");
    } else if !PHONE_RE.is_match(&info.phone) {
        errors.insert(Field::Phone, "Phone number must be 10 digits");
    }
    if is_blank(&info.address) {
        errors.insert(Field::Address, "Address is required");
    }
    if is_blank(&info.zip_code) {
        errors.insert(Field::ZipCode, "Zip code is required");
    } else if !ZIP_CODE_RE.is_match(&info.zip_code) {
        errors.insert(Field::ZipCode, "Zip code must be 5 digits");
    }
    if payment_method.is_none() {
        errors.insert(Field::PaymentMethod, "Please select a payment method");
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_info() -> DeliveryInfo {
        DeliveryInfo {
            first_name: "Nimal".to_string(),
            last_name: "Perera".to_string(),
            email: "nimal@example.lk".to_string(),
            phone: "0771234567".to_string(),
            address: "12 Galle Road, Colombo".to_string(),
            zip_code: "00300".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&valid_info(), Some(PaymentMethod::Visa));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_form_flags_every_field() {
        let errors = validate(&DeliveryInfo::default(), None);
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
        assert_eq!(errors.get(Field::LastName), Some("Last name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(Field::Address), Some("Address is required"));
        assert_eq!(errors.get(Field::ZipCode), Some("Zip code is required"));
        assert_eq!(
            errors.get(Field::PaymentMethod),
            Some("Please select a payment method")
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let info = DeliveryInfo {
            first_name: "   ".to_string(),
            address: "\t\n".to_string(),
            ..valid_info()
        };
        let errors = validate(&info, Some(PaymentMethod::Mastercard));
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(fields, vec![Field::FirstName, Field::Address]);
    }

    #[test]
    fn test_each_required_field_blocks_alone() {
        for field in Field::DELIVERY {
            let mut info = valid_info();
            match field {
                Field::FirstName => info.first_name.clear(),
                Field::LastName => info.last_name.clear(),
                Field::Email => info.email.clear(),
                Field::Phone => info.phone.clear(),
                Field::Address => info.address.clear(),
                Field::ZipCode => info.zip_code.clear(),
                Field::PaymentMethod => {}
            }
            let errors = validate(&info, Some(PaymentMethod::Visa));
            assert_eq!(errors.len(), 1, "only {field} should fail");
            assert!(errors.get(field).is_some());
        }
    }

    #[test]
    fn test_email_shape() {
        for bad in ["nimal", "nimal@example", "nimal.example.lk", "@.", "nimal@ example.lk"] {
            let info = DeliveryInfo {
                email: bad.to_string(),
                ..valid_info()
            };
            let errors = validate(&info, Some(PaymentMethod::Visa));
            assert_eq!(errors.get(Field::Email), Some("Email is invalid"), "{bad}");
        }
    }

    #[test]
    fn test_phone_must_be_exactly_ten_digits() {
        for bad in ["077123456", "07712345678", "077-123-4567", "077123456a", " 0771234567"] {
            let info = DeliveryInfo {
                phone: bad.to_string(),
                ..valid_info()
            };
            let errors = validate(&info, Some(PaymentMethod::Visa));
            assert_eq!(
                errors.get(Field::Phone),
                Some("Phone number must be 10 digits"),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        let info = DeliveryInfo {
            phone: "٠١٢٣٤٥٦٧٨٩".to_string(),
            ..valid_info()
        };
        let errors = validate(&info, Some(PaymentMethod::Visa));
        assert!(errors.get(Field::Phone).is_some());
    }

    #[test]
    fn test_zip_code_must_be_exactly_five_digits() {
        for bad in ["0030", "003000", "00 30", "abcde"] {
            let info = DeliveryInfo {
                zip_code: bad.to_string(),
                ..valid_info()
            };
            let errors = validate(&info, Some(PaymentMethod::Visa));
            assert_eq!(
                errors.get(Field::ZipCode),
                Some("Zip code must be 5 digits"),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_missing_payment_method_blocks() {
        let errors = validate(&valid_info(), None);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::PaymentMethod]);
    }

    #[test]
    fn test_errors_replaced_not_merged() {
        let first = validate(&DeliveryInfo::default(), None);
        assert!(!first.is_empty());

        let second = validate(&valid_info(), Some(PaymentMethod::CashOnDelivery));
        assert!(second.is_empty());
    }

    #[test]
    fn test_serializes_keyed_by_field_name() {
        let errors = validate(
            &DeliveryInfo {
                zip_code: "1".to_string(),
                ..valid_info()
            },
            Some(PaymentMethod::Visa),
        );
        let json = serde_json::to_value(&errors).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({ "zipCode": "Zip code must be 5 digits" })
        );
    }
}
