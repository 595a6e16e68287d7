//! Form Validation
//!
//! Pure functions that check form input before anything touches the network.
//! Each validator returns a [`FieldErrors`] map; an empty map means the form
//! may be submitted.

use std::collections::BTreeMap;
use std::fmt;

/// A validated form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    Name,
    Phone,
    ProductName,
    Price,
    Unit,
    Quantity,
    Description,
    Image,
}

impl Field {
    /// Label used in "is required" messages
    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
            Field::Name => "Name",
            Field::Phone => "Phone",
            Field::ProductName => "Product name",
            Field::Price => "Price",
            Field::Unit => "Unit",
            Field::Quantity => "Quantity",
            Field::Description => "Description",
            Field::Image => "Product image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-field error messages, ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Drop the error for a field, typically because the user edited it
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// True iff `s` has the shape `local@domain.tld` with no whitespace.
pub fn validate_email(s: &str) -> bool {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return false;
    }
    s.match_indices('@').any(|(at, _)| {
        let domain = &s[at + 1..];
        at > 0
            && domain
                .match_indices('.')
                .any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
    })
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !validate_email(email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }
}

fn check_password(errors: &mut FieldErrors, password: &str, min_len: usize) {
    if password.trim().is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if password.chars().count() < min_len {
        errors.insert(
            Field::Password,
            format!("Password must be at least {min_len} characters"),
        );
    }
}

/// Validate the login form.
pub fn validate_login_fields(email: &str, password: &str, min_len: usize) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, email);
    check_password(&mut errors, password, min_len);
    errors
}

/// Validate the registration form. Phone is optional.
pub fn validate_register_fields(
    email: &str,
    password: &str,
    name: &str,
    phone: &str,
    min_len: usize,
) -> FieldErrors {
    let mut errors = validate_login_fields(email, password, min_len);
    if name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }
    let phone = phone.trim();
    if !phone.is_empty() && !is_plausible_phone(phone) {
        errors.insert(Field::Phone, "Please enter a valid phone number");
    }
    errors
}

fn is_plausible_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    allowed && (7..=15).contains(&digits)
}

/// Input of the "create product" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub product_name: String,
    pub price: String,
    pub unit: String,
    pub quantity: String,
    pub description: String,
    /// Location of the picked image
    pub image: Option<String>,
}

/// Validate the "create product" form. Every field is required.
pub fn validate_product_form(draft: &ProductDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let required = [
        (Field::ProductName, &draft.product_name),
        (Field::Price, &draft.price),
        (Field::Unit, &draft.unit),
        (Field::Quantity, &draft.quantity),
        (Field::Description, &draft.description),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.insert(field, format!("{} is required.", field.label()));
        }
    }
    if draft.image.as_deref().map_or(true, |uri| uri.trim().is_empty()) {
        errors.insert(Field::Image, "Product image is required.");
    }
    errors
}
