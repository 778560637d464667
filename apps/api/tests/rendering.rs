//! PDF output tests.
//!
//! The backend stamps CreationDate/ModDate and a document ID at save time,
//! so determinism is asserted on metadata-normalized bytes: volatile
//! segments are scrubbed before hashing.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use scribe::compose::DocumentType;
use scribe::generate::templates::fallback_body;
use scribe::layout::default_page_config;
use scribe::render::render_document;

fn footer_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date")
}

fn render_template_pdf(document_type: DocumentType, requirements: &str) -> Vec<u8> {
    let body = fallback_body(document_type, requirements);
    render_document(
        document_type.title(),
        &body,
        footer_date(),
        &default_page_config(),
    )
    .expect("template-mode render must succeed")
}

/// Overwrites the value of volatile metadata entries (dates, document ID,
/// producer) so two renders of the same input hash identically.
fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() && data[cursor] != terminator {
                    data[cursor] = b'0';
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/ID [", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    Sha256::digest(&normalized).into()
}

#[test]
fn renders_non_empty_output_for_all_types() {
    for document_type in DocumentType::ALL {
        let bytes = render_template_pdf(document_type, "sample requirements");
        assert!(
            bytes.starts_with(b"%PDF-"),
            "{:?} output must carry the PDF header",
            document_type
        );
    }
}

#[test]
fn template_pipeline_is_idempotent() {
    let requirements = "John Smith, 8 years experience, Python/React";
    let bytes_a = render_template_pdf(DocumentType::Resume, requirements);
    let bytes_b = render_template_pdf(DocumentType::Resume, requirements);

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn different_requirements_produce_different_pdfs() {
    let bytes_a = render_template_pdf(DocumentType::Letter, "complaint about noise");
    let bytes_b = render_template_pdf(DocumentType::Letter, "request for references");
    assert_ne!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "different inputs must not collide after normalization"
    );
}

#[test]
fn empty_body_renders_a_parseable_single_page() {
    let bytes = render_document("Resume", "", footer_date(), &default_page_config())
        .expect("empty body renders");
    assert!(bytes.starts_with(b"%PDF-"));
    // A well-formed file also carries the end-of-file marker.
    let tail = &bytes[bytes.len().saturating_sub(32)..];
    let tail_str = String::from_utf8_lossy(tail);
    assert!(tail_str.contains("%%EOF"), "PDF must end with %%EOF");
}
