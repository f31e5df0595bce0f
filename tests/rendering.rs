use acsignature::{
    application::render::{RenderedSignature, SignatureRenderer},
    domain::{
        record::SignatureDraft,
        types::Field,
        validation::{ValidationRules, validate},
    },
};
use insta::assert_snapshot;
use regex::Regex;

fn render(draft: &SignatureDraft) -> RenderedSignature {
    let record = validate(draft, &ValidationRules::default()).expect("valid draft");
    SignatureRenderer::default().render(&record).expect("render")
}

fn jane_doe() -> SignatureDraft {
    SignatureDraft::new(
        "Jane Doe",
        "Service Engineer",
        "jane.doe@atlascopco.com",
        "+32 470 12 34 56",
    )
}

/// Decode the named and numeric character references an HTML escaper may emit.
fn unescape_html(value: &str) -> String {
    let entity =
        Regex::new(r"&(?:#([0-9]+)|#[xX]([0-9a-fA-F]+)|(lt|gt|amp|quot|apos));").expect("regex");
    entity
        .replace_all(value, |captures: &regex::Captures<'_>| {
            let code = if let Some(decimal) = captures.get(1) {
                decimal.as_str().parse::<u32>().expect("decimal reference")
            } else if let Some(hex) = captures.get(2) {
                u32::from_str_radix(hex.as_str(), 16).expect("hex reference")
            } else {
                match &captures[3] {
                    "lt" => u32::from('<'),
                    "gt" => u32::from('>'),
                    "amp" => u32::from('&'),
                    "quot" => u32::from('"'),
                    _ => u32::from('\''),
                }
            };
            char::from_u32(code).expect("valid code point").to_string()
        })
        .into_owned()
}

fn fields_from_html(html: &str) -> Vec<(Field, String)> {
    let name = Regex::new(r#"class="signature-name"[^>]*>([^<]*)</div>"#).expect("regex");
    let title = Regex::new(r#"class="signature-title"[^>]*>([^<]*)</div>"#).expect("regex");
    let contact =
        Regex::new(r#"class="signature-(email|mobile|phone)"[^>]*>[^<]*<a [^>]*>([^<]*)</a>"#)
            .expect("regex");

    let mut fields = vec![
        (Field::Name, unescape_html(&name.captures(html).expect("name")[1])),
        (Field::Title, unescape_html(&title.captures(html).expect("title")[1])),
    ];
    for captures in contact.captures_iter(html) {
        let field = match &captures[1] {
            "email" => Field::Email,
            "mobile" => Field::Mobile,
            _ => Field::Phone,
        };
        fields.push((field, unescape_html(&captures[2])));
    }
    fields
}

/// Undo the control-character escapes and `\uN?` sequences of the rich-text variant.
fn decode_rtf(value: &str) -> String {
    let mut units: Vec<u16> = Vec::new();
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            let mut buf = [0u16; 2];
            units.extend_from_slice(ch.encode_utf16(&mut buf));
            continue;
        }
        match chars.next() {
            Some('u') => {
                let mut digits = String::new();
                while let Some(&next) = chars.peek() {
                    if next == '-' || next.is_ascii_digit() {
                        digits.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let code: i16 = digits.parse().expect("unicode escape");
                units.push(code as u16);
                assert_eq!(chars.next(), Some('?'), "missing fallback character");
            }
            Some(other) => units.push(other as u16),
            None => panic!("dangling backslash"),
        }
    }
    String::from_utf16(&units).expect("utf-16")
}

fn fields_from_rtf(rtf: &str) -> Vec<(Field, String)> {
    let name = Regex::new(r"(?m)^\\b\\cf1 (.*)\\b0\\cf2\\line$").expect("regex");
    let title = Regex::new(r"(?m)^\\b (.*)\\b0\\line$").expect("regex");
    let contact = Regex::new(r"(?m)^(E-mail|Mobile|Phone): (.*)\\line$").expect("regex");

    let mut fields = vec![
        (Field::Name, decode_rtf(&name.captures(rtf).expect("name")[1])),
        (Field::Title, decode_rtf(&title.captures(rtf).expect("title")[1])),
    ];
    for captures in contact.captures_iter(rtf) {
        let field = match &captures[1] {
            "E-mail" => Field::Email,
            "Mobile" => Field::Mobile,
            _ => Field::Phone,
        };
        fields.push((field, decode_rtf(&captures[2])));
    }
    fields
}

fn fields_from_text(text: &str) -> Vec<(Field, String)> {
    let lines: Vec<&str> = text.lines().collect();
    let mut fields = vec![
        (Field::Name, lines[1].to_string()),
        (Field::Title, lines[2].to_string()),
    ];
    for line in lines {
        for (field, prefix) in [
            (Field::Email, "E-mail: "),
            (Field::Mobile, "Mobile: "),
            (Field::Phone, "Phone: "),
        ] {
            if let Some(value) = line.strip_prefix(prefix) {
                fields.push((field, value.to_string()));
            }
        }
    }
    fields
}

fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn expected(draft: &SignatureDraft) -> Vec<(Field, String)> {
    let mut fields = vec![
        (Field::Name, single_line(&draft.name)),
        (Field::Title, single_line(&draft.title)),
        (Field::Email, single_line(&draft.email)),
        (Field::Mobile, single_line(&draft.mobile)),
    ];
    if let Some(phone) = draft.phone.as_deref() {
        fields.push((Field::Phone, single_line(phone)));
    }
    fields
}

#[test]
fn every_variant_carries_the_submitted_values() {
    let drafts = [
        jane_doe(),
        jane_doe().with_phone("+49 201 2177 0"),
        SignatureDraft::new(
            "  Zoë O'Brien & <Co>  ",
            "R&D {Lead} \\ Ops",
            "zoe.obrien@AtlasCopco.com",
            "0470 12 34 56",
        )
        .with_phone("(02) 123-45-67"),
        SignatureDraft::new(
            "Łukasz Żółć",
            "Ingénieur \"Sénior\"",
            "l@atlascopco.com",
            "+4915112345678",
        ),
    ];

    for draft in &drafts {
        let rendered = render(draft);
        let expected = expected(draft);
        assert_eq!(fields_from_html(rendered.html()), expected, "html for {draft:?}");
        assert_eq!(fields_from_rtf(rendered.rtf()), expected, "rtf for {draft:?}");
        assert_eq!(fields_from_text(rendered.text()), expected, "text for {draft:?}");
    }
}

#[test]
fn embedded_line_breaks_cannot_add_contact_lines() {
    let draft = SignatureDraft::new(
        "Jane Doe",
        "Engineer\nPhone: +1 555",
        "jane.doe@atlascopco.com",
        "+32 470 12 34 56",
    );
    let rendered = render(&draft);

    assert_eq!(fields_from_text(rendered.text()), expected(&draft));
    assert_eq!(fields_from_html(rendered.html()), expected(&draft));
    assert_eq!(fields_from_rtf(rendered.rtf()), expected(&draft));
    assert!(
        rendered
            .text()
            .lines()
            .all(|line| !line.starts_with("Phone: "))
    );
    assert!(rendered.text().contains("\nEngineer Phone: +1 555\n"));
}

#[test]
fn rendering_is_deterministic() {
    let draft = jane_doe().with_phone("+32 89 12 34 56");
    assert_eq!(render(&draft), render(&draft));
}

#[test]
fn variants_omit_the_phone_line_when_absent() {
    let rendered = render(&jane_doe());

    assert!(rendered.html().contains("Jane Doe"));
    assert!(rendered.html().contains("mailto:jane.doe@atlascopco.com"));
    assert!(rendered.html().contains("tel:+32470123456"));
    assert!(!rendered.html().contains("signature-phone"));

    assert!(rendered.rtf().starts_with("{\\rtf1"));
    assert!(rendered.rtf().ends_with('}'));
    assert!(!rendered.rtf().contains("Phone:"));

    assert!(!rendered.text().contains("Phone:"));
}

#[test]
fn markup_links_dial_sanitised_numbers() {
    let rendered = render(&jane_doe().with_phone("+49 (0) 201-2177 0"));

    assert!(rendered.html().contains(r#"href="tel:+4920121770""#));
    assert!(rendered.html().contains(">+49 (0) 201-2177 0</a>"));
}

#[test]
fn plain_text_signature_layout() {
    let rendered = render(&jane_doe().with_phone("+32 89 12 34 56"));

    assert_snapshot!(rendered.text(), @r"
    Best regards,
    Jane Doe
    Service Engineer

    ----------------------------------------
    Atlas Copco Tools Central Europe GmbH
    Head Office: Atlas Copco Tools Central Europe GmbH, Langemarckstr. 35, D-45141 Essen
    Head Office: New Address as of Dec 1, 2025: Wetterschacht 9, D-45139 Essen
    Branch Office Belgium (Atlas Copco Tools Belgium): Bremakker 45, B-3740 Bilzen
    Managing Director: Claus Schiedeck, Peter Edmonds

    E-mail: jane.doe@atlascopco.com
    Mobile: +32 470 12 34 56
    Phone: +32 89 12 34 56
    VAT Reg.No.: DE811155641 (Germany) / BE0473470658 (Belgium)
    Company Reg. Office: HRB 5096 – Local Court Essen (Head Office) / R.C.B. 646980 - Brussels (Belgian Branch)
    Peppol ID (Belgium): 0208:0473470658

    Privacy Policy: https://www.atlascopco.com/nl-be/itba/privacy-policy
    ----------------------------------------
    Level up your experience at atlascopco.com
    ----------------------------------------
    Part of Atlas Copco Group
    ");
}
