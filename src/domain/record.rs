//! Signature input model.
//!
//! A [`SignatureDraft`] is the raw snapshot of the form at submission time. A
//! [`SignatureRecord`] can only be obtained from
//! [`validate`](crate::domain::validation::validate) and therefore always
//! satisfies the completeness invariant.

/// Unvalidated form values captured for one generate/export action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureDraft {
    pub name: String,
    pub title: String,
    pub email: String,
    pub mobile: String,
    pub phone: Option<String>,
}

impl SignatureDraft {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            email: email.into(),
            mobile: mobile.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// A complete signature: name, title, company email and mobile are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRecord {
    name: String,
    title: String,
    email: String,
    mobile: String,
    phone: Option<String>,
}

impl SignatureRecord {
    pub(crate) fn new(
        name: String,
        title: String,
        email: String,
        mobile: String,
        phone: Option<String>,
    ) -> Self {
        Self {
            name,
            title,
            email,
            mobile,
            phone,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}
