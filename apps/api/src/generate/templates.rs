//! Fallback templates — deterministic document bodies used when no model
//! call is possible.
//!
//! Each template carries a `{requirements}` slot that is substituted with
//! the raw requirements text. Output ends with a note line identifying
//! template-mode generation.

use crate::compose::DocumentType;

/// Trailer appended to every template-mode body.
const TEMPLATE_MODE_NOTE: &str = "\n\n---\nNote: this document was generated in template mode. \
    Configure an API credential for model-generated content.";

const COVER_LETTER_TEMPLATE: &str = "Dear Hiring Manager,

I am writing to express my strong interest in the position you have available. The following summarizes my background:

{requirements}

I am confident that my experience makes me a strong candidate for this role, and I would welcome the opportunity to discuss how my qualifications align with your needs. I am available for an interview at your convenience.

Thank you for your time and consideration.

Sincerely,
[Your Name]";

const RESUME_TEMPLATE: &str = "[YOUR NAME]
[Email] | [Phone] | [City, State]

PROFESSIONAL SUMMARY

Experienced professional with a background matching the requirements outlined: {requirements}

CORE COMPETENCIES

- Technical skills relevant to the role
- Project planning and delivery
- Communication and collaboration

PROFESSIONAL EXPERIENCE

[Most Recent Position] | [Company] | [Dates]

Led projects and initiatives aligned with the background above, collaborating with cross-functional teams to deliver results.

[Previous Position] | [Company] | [Dates]

Contributed to key projects and applied the skills described above to solve business problems.

EDUCATION

[Degree] in [Field] | [University] | [Year]";

const PROPOSAL_TEMPLATE: &str = "BUSINESS PROPOSAL

EXECUTIVE SUMMARY

This proposal outlines a solution addressing the requirements specified: {requirements}

PROBLEM STATEMENT

The current situation presents opportunities for improvement that can be addressed through structured planning and implementation.

PROPOSED SOLUTION

Our recommended approach includes a thorough analysis of current processes, a solution tailored to the stated requirements, and ongoing support after delivery.

IMPLEMENTATION PLAN

Phase 1: Assessment and planning.
Phase 2: Development and testing.
Phase 3: Deployment and support.

EXPECTED OUTCOMES

Improved efficiency, a measurable return on investment, and a solution that scales with future growth.

CONCLUSION

We are committed to delivering a solution that meets the needs described above and look forward to discussing this proposal in detail.";

const LETTER_TEMPLATE: &str = "[Date]

[Recipient Name]
[Company/Organization]
[Address]

Dear [Recipient],

I hope this letter finds you well. I am writing to address the matter outlined below:

{requirements}

I would appreciate your attention to this matter and look forward to your response. Should you require any additional information, please do not hesitate to contact me.

Thank you for your time and consideration.

Sincerely,

[Your Name]";

/// Returns the deterministic template body for a document type, with the
/// raw requirements text substituted into the `{requirements}` slot.
pub fn fallback_body(document_type: DocumentType, requirements: &str) -> String {
    let template = match document_type {
        DocumentType::CoverLetter => COVER_LETTER_TEMPLATE,
        DocumentType::Resume => RESUME_TEMPLATE,
        DocumentType::Proposal => PROPOSAL_TEMPLATE,
        DocumentType::Letter => LETTER_TEMPLATE,
    };

    let mut body = template.replace("{requirements}", requirements);
    body.push_str(TEMPLATE_MODE_NOTE);
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_embeds_requirements() {
        let requirements = "ten years of embedded firmware work";
        for document_type in DocumentType::ALL {
            let body = fallback_body(document_type, requirements);
            assert!(
                body.contains(requirements),
                "{:?} template must substitute requirements",
                document_type
            );
        }
    }

    #[test]
    fn test_templates_are_deterministic() {
        let a = fallback_body(DocumentType::Proposal, "migrate the billing stack");
        let b = fallback_body(DocumentType::Proposal, "migrate the billing stack");
        assert_eq!(a, b, "same inputs must produce byte-identical output");
    }

    #[test]
    fn test_templates_differ_per_type() {
        let requirements = "same requirements";
        let bodies: Vec<String> = DocumentType::ALL
            .iter()
            .map(|&t| fallback_body(t, requirements))
            .collect();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                assert_ne!(bodies[i], bodies[j], "templates must differ per type");
            }
        }
    }

    #[test]
    fn test_template_mode_note_appended() {
        let body = fallback_body(DocumentType::Letter, "noise complaint for apartment 4B");
        assert!(body.contains("template mode"));
        assert!(body.ends_with("model-generated content."));
    }

    #[test]
    fn test_no_unsubstituted_placeholder_remains() {
        for document_type in DocumentType::ALL {
            let body = fallback_body(document_type, "anything");
            assert!(
                !body.contains("{requirements}"),
                "{:?} left the placeholder unsubstituted",
                document_type
            );
        }
    }

    #[test]
    fn test_resume_scenario_contains_name_and_years() {
        let body = fallback_body(
            DocumentType::Resume,
            "John Smith, 8 years experience, Python/React",
        );
        assert!(body.contains("John Smith"));
        assert!(body.contains("8 years"));
    }
}
