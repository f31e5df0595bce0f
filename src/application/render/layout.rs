//! Format-independent arrangement of a signature.
//!
//! All three variants iterate the same [`SignatureLayout`], so they agree on
//! which values appear and in which order.

use crate::domain::{phone::sanitize_tel, record::SignatureRecord, types::Field};

use super::config::{CompanyDetails, RenderConfig};

/// One personal contact entry such as `E-mail: jane.doe@atlascopco.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLine {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    /// `mailto:` or `tel:` target for the markup variant.
    pub href: String,
}

impl ContactLine {
    fn email(address: &str) -> Self {
        Self {
            field: Field::Email,
            label: Field::Email.label(),
            value: address.to_string(),
            href: format!("mailto:{address}"),
        }
    }

    fn phone(field: Field, number: &str) -> Self {
        Self {
            field,
            label: field.label(),
            value: number.to_string(),
            href: format!("tel:{}", sanitize_tel(number)),
        }
    }

    pub fn is_email(&self) -> bool {
        self.field == Field::Email
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureLayout {
    pub closing: String,
    pub name: String,
    pub title: String,
    /// Email, mobile, then phone when present.
    pub contacts: Vec<ContactLine>,
    pub company: CompanyDetails,
}

impl SignatureLayout {
    pub fn build(record: &SignatureRecord, config: &RenderConfig) -> Self {
        let mut contacts = vec![
            ContactLine::email(record.email()),
            ContactLine::phone(Field::Mobile, record.mobile()),
        ];
        if let Some(phone) = record.phone() {
            contacts.push(ContactLine::phone(Field::Phone, phone));
        }

        Self {
            closing: config.closing.clone(),
            name: record.name().to_string(),
            title: record.title().to_string(),
            contacts,
            company: config.company.clone(),
        }
    }

    /// Copy with every displayed text run passed through `escape`. Link
    /// targets are left untouched.
    pub fn map_text(&self, escape: impl Fn(&str) -> String) -> Self {
        Self {
            closing: escape(&self.closing),
            name: escape(&self.name),
            title: escape(&self.title),
            contacts: self
                .contacts
                .iter()
                .map(|contact| ContactLine {
                    value: escape(&contact.value),
                    ..contact.clone()
                })
                .collect(),
            company: self.company.map_text(&escape),
        }
    }

    /// Field values in display order, for comparing variants.
    pub fn fields(&self) -> Vec<(Field, &str)> {
        let mut fields = vec![
            (Field::Name, self.name.as_str()),
            (Field::Title, self.title.as_str()),
        ];
        fields.extend(
            self.contacts
                .iter()
                .map(|contact| (contact.field, contact.value.as_str())),
        );
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        record::SignatureDraft,
        validation::{ValidationRules, validate},
    };

    fn record(phone: Option<&str>) -> SignatureRecord {
        let mut draft = SignatureDraft::new(
            "Jane Doe",
            "Engineer",
            "jane.doe@atlascopco.com",
            "+32 (0)470 12 34 56",
        );
        draft.phone = phone.map(str::to_string);
        validate(&draft, &ValidationRules::default()).expect("valid")
    }

    #[test]
    fn contacts_are_email_mobile_phone() {
        let layout =
            SignatureLayout::build(&record(Some("+49 201 2177")), &RenderConfig::default());
        let fields: Vec<Field> = layout.fields().into_iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Title, Field::Email, Field::Mobile, Field::Phone]
        );
    }

    #[test]
    fn phone_line_is_omitted_when_absent() {
        let layout = SignatureLayout::build(&record(None), &RenderConfig::default());
        assert!(layout.contacts.iter().all(|contact| contact.field != Field::Phone));
    }

    #[test]
    fn hrefs_use_sanitized_numbers() {
        let layout = SignatureLayout::build(&record(None), &RenderConfig::default());
        assert_eq!(layout.contacts[0].href, "mailto:jane.doe@atlascopco.com");
        assert_eq!(layout.contacts[1].href, "tel:+32470123456");
        assert_eq!(layout.contacts[1].value, "+32 (0)470 12 34 56");
    }

    #[test]
    fn map_text_leaves_links_alone() {
        let layout = SignatureLayout::build(&record(None), &RenderConfig::default());
        let upper = layout.map_text(|text| text.to_uppercase());
        assert_eq!(upper.name, "JANE DOE");
        assert_eq!(upper.contacts[0].value, "JANE.DOE@ATLASCOPCO.COM");
        assert_eq!(upper.contacts[0].href, "mailto:jane.doe@atlascopco.com");
        assert_eq!(upper.company.website_url, layout.company.website_url);
    }
}
