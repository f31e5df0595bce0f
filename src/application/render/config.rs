//! Styling and letterhead injected into the renderer.

use crate::util::color::HexColor;

pub const DEFAULT_ACCENT_COLOR: HexColor = HexColor::from_rgb(0x00, 0x92, 0xBC);
pub const DEFAULT_TEXT_COLOR: HexColor = HexColor::from_rgb(0x2F, 0x36, 0x3A);
pub const DEFAULT_SEPARATOR_COLOR: HexColor = HexColor::from_rgb(0xE1, 0xD6, 0xCE);
pub const DEFAULT_MUTED_COLOR: HexColor = HexColor::from_rgb(0xA1, 0xA9, 0xB4);
pub const DEFAULT_NOTICE_COLOR: HexColor = HexColor::from_rgb(0xFF, 0x00, 0x00);
pub const DEFAULT_FONT_FAMILY: &str = "Calibri,Arial,sans-serif";
pub const DEFAULT_CLOSING: &str = "Best regards,";

/// Named colours and font shared by the markup and rich-text variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureStyle {
    /// Name, links and brand highlights.
    pub accent: HexColor,
    pub text: HexColor,
    /// Horizontal rules between letterhead blocks.
    pub separator: HexColor,
    /// Group footer.
    pub muted: HexColor,
    /// Relocation notice.
    pub notice: HexColor,
    /// CSS `font-family` list; the first entry is used for RTF.
    pub font_family: String,
}

impl SignatureStyle {
    pub fn primary_font(&self) -> &str {
        self.font_family
            .split(',')
            .map(str::trim)
            .find(|family| !family.is_empty())
            .unwrap_or("Calibri")
    }
}

impl Default for SignatureStyle {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT_COLOR,
            text: DEFAULT_TEXT_COLOR,
            separator: DEFAULT_SEPARATOR_COLOR,
            muted: DEFAULT_MUTED_COLOR,
            notice: DEFAULT_NOTICE_COLOR,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

/// Announcement of a head office move, shown under the current address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub headline: String,
    pub address: String,
}

/// Company block printed below the personal contact lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDetails {
    pub legal_name: String,
    pub head_office: String,
    pub relocation: Option<Relocation>,
    pub branch_office: String,
    pub managing_directors: String,
    pub vat_numbers: String,
    pub registry: String,
    pub peppol_id: String,
    pub privacy_url: String,
    pub website_url: String,
    pub website_label: String,
    pub tagline: String,
    pub group_label: String,
    pub group_logo_url: String,
}

impl CompanyDetails {
    /// Copy with every displayed text run passed through `f`.
    pub fn map_text(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            legal_name: f(&self.legal_name),
            head_office: f(&self.head_office),
            relocation: self.relocation.as_ref().map(|relocation| Relocation {
                headline: f(&relocation.headline),
                address: f(&relocation.address),
            }),
            branch_office: f(&self.branch_office),
            managing_directors: f(&self.managing_directors),
            vat_numbers: f(&self.vat_numbers),
            registry: f(&self.registry),
            peppol_id: f(&self.peppol_id),
            privacy_url: f(&self.privacy_url),
            website_url: self.website_url.clone(),
            website_label: f(&self.website_label),
            tagline: f(&self.tagline),
            group_label: f(&self.group_label),
            group_logo_url: self.group_logo_url.clone(),
        }
    }
}

impl Default for CompanyDetails {
    fn default() -> Self {
        Self {
            legal_name: "Atlas Copco Tools Central Europe GmbH".into(),
            head_office: "Langemarckstr. 35, D-45141 Essen".into(),
            relocation: Some(Relocation {
                headline: "New Address as of Dec 1, 2025".into(),
                address: "Wetterschacht 9, D-45139 Essen".into(),
            }),
            branch_office:
                "Branch Office Belgium (Atlas Copco Tools Belgium): Bremakker 45, B-3740 Bilzen"
                    .into(),
            managing_directors: "Claus Schiedeck, Peter Edmonds".into(),
            vat_numbers: "DE811155641 (Germany) / BE0473470658 (Belgium)".into(),
            registry: "HRB 5096 \u{2013} Local Court Essen (Head Office) / R.C.B. 646980 - Brussels (Belgian Branch)".into(),
            peppol_id: "0208:0473470658".into(),
            privacy_url: "https://www.atlascopco.com/nl-be/itba/privacy-policy".into(),
            website_url: "https://www.atlascopco.com".into(),
            website_label: "atlascopco.com".into(),
            tagline: "Level up your experience at".into(),
            group_label: "Part of Atlas Copco Group".into(),
            group_logo_url:
                "https://groupapp.atlascopco.com/mail-signature/Signature/AtlasCopco/ACBlueSquare.png"
                    .into(),
        }
    }
}

/// Everything the renderer needs besides the record itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub style: SignatureStyle,
    pub closing: String,
    pub company: CompanyDetails,
}

impl RenderConfig {
    pub fn new(style: SignatureStyle, closing: impl Into<String>) -> Self {
        Self {
            style,
            closing: closing.into(),
            company: CompanyDetails::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(SignatureStyle::default(), DEFAULT_CLOSING)
    }
}

impl From<&crate::config::RenderSettings> for RenderConfig {
    fn from(settings: &crate::config::RenderSettings) -> Self {
        Self::new(settings.style.clone(), settings.closing.clone())
    }
}
