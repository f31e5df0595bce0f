//! Generate and export actions over one form snapshot.

use tracing::{debug, info};

use crate::application::{
    error::AppError,
    export::{ExportOptions, ExportReport, export_signature},
    render::{RenderedSignature, SignatureFormat, SignatureRenderer},
};
use crate::domain::{
    record::{SignatureDraft, SignatureRecord},
    validation::{ValidationRules, validate},
};

/// Validates drafts and hands valid records to the renderer and exporter.
///
/// Each call works on the snapshot it is given; nothing is cached between
/// calls, so an export always reflects the current draft.
#[derive(Debug, Clone, Default)]
pub struct SignatureService {
    rules: ValidationRules,
    renderer: SignatureRenderer,
}

impl SignatureService {
    pub fn new(rules: ValidationRules, renderer: SignatureRenderer) -> Self {
        Self { rules, renderer }
    }

    pub fn validate(&self, draft: &SignatureDraft) -> Result<SignatureRecord, AppError> {
        validate(draft, &self.rules).map_err(|error| {
            debug!(
                target = "acsignature::validation",
                errors = error.errors().len(),
                "Signature draft rejected"
            );
            AppError::from(error)
        })
    }

    /// "Generate Signature": validate and return the markup preview.
    pub fn generate(&self, draft: &SignatureDraft) -> Result<String, AppError> {
        self.generate_format(draft, SignatureFormat::Html)
    }

    pub fn generate_format(
        &self,
        draft: &SignatureDraft,
        format: SignatureFormat,
    ) -> Result<String, AppError> {
        let record = self.validate(draft)?;
        let rendered = self.renderer.render_format(&record, format)?;
        info!(
            target = "acsignature::generate",
            %format,
            bytes = rendered.len(),
            "Signature generated"
        );
        Ok(rendered)
    }

    pub fn render(&self, draft: &SignatureDraft) -> Result<RenderedSignature, AppError> {
        let record = self.validate(draft)?;
        Ok(self.renderer.render(&record)?)
    }

    /// "Export to Outlook": validate, render all variants, write them out.
    pub fn export(
        &self,
        draft: &SignatureDraft,
        options: &ExportOptions,
    ) -> Result<ExportReport, AppError> {
        let record = self.validate(draft)?;
        let rendered = self.renderer.render(&record)?;
        let base_name = options.naming.base_name(record.email());
        Ok(export_signature(&rendered, &base_name, options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Field;

    #[test]
    fn generate_rejects_invalid_drafts() {
        let service = SignatureService::default();
        let draft = SignatureDraft::new("Jane", "", "jane@example.com", "0470123456");

        let error = service.generate(&draft).expect_err("invalid");
        let validation = error.as_validation().expect("validation error");
        assert!(validation.has_field(Field::Title));
        assert!(validation.has_field(Field::Email));
        assert!(!validation.has_field(Field::Name));
    }

    #[test]
    fn generate_returns_markup_preview() {
        let service = SignatureService::default();
        let draft = SignatureDraft::new("Jane", "Engineer", "jane@atlascopco.com", "0470123456");

        let preview = service.generate(&draft).expect("preview");
        assert!(preview.starts_with("<html>"));
        assert!(preview.contains("mailto:jane@atlascopco.com"));
    }
}
