//! Shared domain enumerations.

use std::fmt;

/// Form fields that make up a signature, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Title,
    Email,
    Mobile,
    Phone,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Title => "title",
            Field::Email => "email",
            Field::Mobile => "mobile",
            Field::Phone => "phone",
        }
    }

    /// Label shown next to the value in rendered signatures.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Title => "Title",
            Field::Email => "E-mail",
            Field::Mobile => "Mobile",
            Field::Phone => "Phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted shapes for the mobile number field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MobileFormat {
    /// Any non-empty value.
    #[default]
    Any,
    /// Belgian national/international or German international numbers only.
    BelgianOrGerman,
}

impl MobileFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            MobileFormat::Any => "any",
            MobileFormat::BelgianOrGerman => "belgian_or_german",
        }
    }
}
