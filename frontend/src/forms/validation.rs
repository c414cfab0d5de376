use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// A named input of one of the site's forms.
pub trait FormField: Copy + Ord + 'static {
    const ALL: &'static [Self];

    /// The `name` attribute of the input.
    fn name(&self) -> &'static str;

    /// Human label used in error messages.
    fn label(&self) -> &'static str;

    fn is_email(&self) -> bool {
        false
    }
}

pub type FieldValues<F> = BTreeMap<F, String>;

/// Present keys are invalid fields; an empty map means the form can be sent.
pub type ErrorMap<F> = BTreeMap<F, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    Name,
    Email,
    Address,
    City,
    ZipCode,
    Country,
}

impl FormField for CheckoutField {
    const ALL: &'static [Self] = &[
        CheckoutField::Name,
        CheckoutField::Email,
        CheckoutField::Address,
        CheckoutField::City,
        CheckoutField::ZipCode,
        CheckoutField::Country,
    ];

    fn name(&self) -> &'static str {
        match self {
            CheckoutField::Name => "name",
            CheckoutField::Email => "email",
            CheckoutField::Address => "address",
            CheckoutField::City => "city",
            CheckoutField::ZipCode => "zipCode",
            CheckoutField::Country => "country",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CheckoutField::Name => "Name",
            CheckoutField::Email => "Email",
            CheckoutField::Address => "Address",
            CheckoutField::City => "City",
            CheckoutField::ZipCode => "Zip code",
            CheckoutField::Country => "Country",
        }
    }

    fn is_email(&self) -> bool {
        matches!(self, CheckoutField::Email)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField for ContactField {
    const ALL: &'static [Self] = &[
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    fn is_email(&self) -> bool {
        matches!(self, ContactField::Email)
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn validate<F: FormField>(values: &FieldValues<F>) -> ErrorMap<F> {
    let mut errors = ErrorMap::new();
    for field in F::ALL {
        let value = values.get(field).map(String::as_str).unwrap_or("");
        if value.trim().is_empty() {
            errors.insert(*field, format!("{} is required", field.label()));
        } else if field.is_email() && !is_valid_email(value) {
            errors.insert(*field, "Email is invalid".to_string());
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkout_values(pairs: &[(CheckoutField, &str)]) -> FieldValues<CheckoutField> {
        pairs.iter().map(|(field, value)| (*field, value.to_string())).collect()
    }

    fn complete_checkout() -> FieldValues<CheckoutField> {
        checkout_values(&[
            (CheckoutField::Name, "Ada Lovelace"),
            (CheckoutField::Email, "ada@example.com"),
            (CheckoutField::Address, "12 Analytical Way"),
            (CheckoutField::City, "London"),
            (CheckoutField::ZipCode, "N1 9GU"),
            (CheckoutField::Country, "UK"),
        ])
    }

    #[test]
    fn empty_checkout_reports_every_field() {
        let errors = validate(&FieldValues::<CheckoutField>::new());
        assert_eq!(errors.len(), 6);
        assert_eq!(errors[&CheckoutField::Name], "Name is required");
        assert_eq!(errors[&CheckoutField::Email], "Email is required");
        assert_eq!(errors[&CheckoutField::ZipCode], "Zip code is required");
        assert_eq!(errors[&CheckoutField::Country], "Country is required");
    }

    #[test]
    fn complete_checkout_is_submittable() {
        assert!(validate(&complete_checkout()).is_empty());
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let mut values = complete_checkout();
        values.insert(CheckoutField::City, "   ".to_string());
        let errors = validate(&values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&CheckoutField::City], "City is required");
    }

    #[test]
    fn email_pattern() {
        assert!(!is_valid_email("not-an-email"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn malformed_email_is_flagged_as_invalid_not_missing() {
        let mut values = complete_checkout();
        values.insert(CheckoutField::Email, "not-an-email".to_string());
        let errors = validate(&values);
        assert_eq!(errors.get(&CheckoutField::Email).map(String::as_str), Some("Email is invalid"));
    }

    #[test]
    fn contact_form_requires_subject_and_message() {
        let values: FieldValues<ContactField> = [
            (ContactField::Name, "Sam".to_string()),
            (ContactField::Email, "sam@example.org".to_string()),
        ]
        .into_iter()
        .collect();
        let errors = validate(&values);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&ContactField::Subject], "Subject is required");
        assert_eq!(errors[&ContactField::Message], "Message is required");
    }

    #[test]
    fn validation_is_repeatable() {
        let values = checkout_values(&[(CheckoutField::Email, "x")]);
        assert_eq!(validate(&values), validate(&values));
    }
}
