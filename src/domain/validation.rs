//! Business rules that turn a [`SignatureDraft`] into a [`SignatureRecord`].
//!
//! Every rule runs on every call so the caller can show all problems at once.
//! Values are trimmed and internal whitespace runs fold to one space.
//! The email rule is a plain suffix check: `@atlascopco.com` with an empty
//! local part is accepted.

use super::{
    error::{FieldError, ValidationError},
    phone::is_valid_mobile_number,
    record::{SignatureDraft, SignatureRecord},
    types::{Field, MobileFormat},
};

/// Organisational domain every signature email must end with.
pub const EMAIL_DOMAIN: &str = "@atlascopco.com";

pub const NAME_REQUIRED: &str = "Name is required";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const MOBILE_REQUIRED: &str = "Mobile number is required";
pub const MOBILE_FORMAT: &str = "Mobile number must be a valid Belgian (04xxxxxxxx or +32xxxxxxxxx) or German (+49(0) 123456789) number";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_DOMAIN_MISMATCH: &str = "Email must be a company address";

/// Tunable parts of the rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationRules {
    pub mobile_format: MobileFormat,
}

/// Check `draft` against the rules and return the trimmed record.
pub fn validate(
    draft: &SignatureDraft,
    rules: &ValidationRules,
) -> Result<SignatureRecord, ValidationError> {
    let name = collapse_whitespace(&draft.name);
    let title = collapse_whitespace(&draft.title);
    let email = collapse_whitespace(&draft.email);
    let mobile = collapse_whitespace(&draft.mobile);
    let phone = draft
        .phone
        .as_deref()
        .map(collapse_whitespace)
        .filter(|value| !value.is_empty());

    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(FieldError::new(Field::Name, NAME_REQUIRED));
    }

    if title.is_empty() {
        errors.push(FieldError::new(Field::Title, TITLE_REQUIRED));
    }

    if mobile.is_empty() {
        errors.push(FieldError::new(Field::Mobile, MOBILE_REQUIRED));
    } else if rules.mobile_format == MobileFormat::BelgianOrGerman
        && !is_valid_mobile_number(&mobile)
    {
        errors.push(FieldError::new(Field::Mobile, MOBILE_FORMAT));
    }

    if email.is_empty() {
        errors.push(FieldError::new(Field::Email, EMAIL_REQUIRED));
    } else if !has_company_domain(&email) {
        errors.push(FieldError::new(Field::Email, EMAIL_DOMAIN_MISMATCH));
    }

    if let Some(error) = ValidationError::from_errors(errors) {
        return Err(error);
    }

    Ok(SignatureRecord::new(name, title, email, mobile, phone))
}

/// Trim and fold every run of whitespace, line breaks included, into one
/// space so each value stays on a single line in every variant.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn has_company_domain(email: &str) -> bool {
    email.to_lowercase().ends_with(EMAIL_DOMAIN)
}
