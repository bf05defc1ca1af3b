//! Prompt templates for the supported letter types.
//!
//! Slot filling is literal substring substitution — no escaping, not
//! injection-safe. The subject field fills only the `Subject:` slot; the
//! free-text details field fills `Details:`.

/// The fixed set of letter types the service can draft.
///
/// Form values are matched verbatim; anything unrecognized is `Unknown`,
/// which resolves to the empty template and therefore an empty prompt. The
/// silent degradation is intentional: an unknown type does not reject the
/// request, the near-empty prompt simply fails downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterType {
    Rti,
    PoliceComplaint,
    LeaveApplication,
    Unknown,
}

impl LetterType {
    pub fn parse(value: &str) -> Self {
        match value {
            "RTI" => LetterType::Rti,
            "Police Complaint" => LetterType::PoliceComplaint,
            "Leave Application" => LetterType::LeaveApplication,
            _ => LetterType::Unknown,
        }
    }

    /// The prompt template for this letter type. Empty for `Unknown`.
    fn template(self) -> &'static str {
        match self {
            LetterType::Rti => RTI_TEMPLATE,
            LetterType::PoliceComplaint => POLICE_COMPLAINT_TEMPLATE,
            LetterType::LeaveApplication => LEAVE_APPLICATION_TEMPLATE,
            LetterType::Unknown => "",
        }
    }
}

const RTI_TEMPLATE: &str = r#"
You are an expert in drafting formal Indian government letters.
Draft a Right to Information (RTI) request letter using this information:

Name: {name}
Address: {address}
Subject: {subject}
Details: {body}

Use formal tone, proper formatting, and government norms.
"#;

const POLICE_COMPLAINT_TEMPLATE: &str = r#"
You are an expert in drafting formal Indian government letters.
Draft a police complaint letter using this information:

Name: {name}
Address: {address}
Subject: {subject}
Details: {body}

Use a polite but firm tone and proper format.
"#;

const LEAVE_APPLICATION_TEMPLATE: &str = r#"
You are an expert in drafting formal Indian government letters.
Draft a leave application using this information:

Name: {name}
Address: {address}
Subject: {subject}
Details: {body}

Use a polite and precise tone.
"#;

/// Fills the template for `letter_type` with the four user-supplied fields.
///
/// Returns exactly the empty string for an unknown letter type (substitution
/// against the empty template is a no-op).
pub fn build_prompt(
    letter_type: LetterType,
    name: &str,
    address: &str,
    subject: &str,
    body: &str,
) -> String {
    letter_type
        .template()
        .replace("{name}", name)
        .replace("{address}", address)
        .replace("{subject}", subject)
        .replace("{body}", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDERS: [&str; 4] = ["{name}", "{address}", "{subject}", "{body}"];

    #[test]
    fn test_known_types_fill_all_slots() {
        for letter_type in [
            LetterType::Rti,
            LetterType::PoliceComplaint,
            LetterType::LeaveApplication,
        ] {
            let prompt = build_prompt(
                letter_type,
                "Jane Doe",
                "12 MG Road",
                "Water Supply Issue",
                "No water for 3 days",
            );

            assert!(prompt.contains("Name: Jane Doe"), "{letter_type:?}");
            assert!(prompt.contains("Address: 12 MG Road"), "{letter_type:?}");
            assert!(
                prompt.contains("Subject: Water Supply Issue"),
                "{letter_type:?}"
            );
            assert!(
                prompt.contains("Details: No water for 3 days"),
                "{letter_type:?}"
            );

            for placeholder in PLACEHOLDERS {
                assert!(
                    !prompt.contains(placeholder),
                    "{letter_type:?} left {placeholder} unfilled"
                );
            }
        }
    }

    #[test]
    fn test_unknown_type_yields_empty_prompt() {
        assert_eq!(LetterType::parse("Tax Appeal"), LetterType::Unknown);
        let prompt = build_prompt(LetterType::Unknown, "Jane", "Road", "Subject", "Body");
        assert_eq!(prompt, "");
    }

    #[test]
    fn test_parse_known_form_values() {
        assert_eq!(LetterType::parse("RTI"), LetterType::Rti);
        assert_eq!(
            LetterType::parse("Police Complaint"),
            LetterType::PoliceComplaint
        );
        assert_eq!(
            LetterType::parse("Leave Application"),
            LetterType::LeaveApplication
        );
        // Matching is verbatim, not case-insensitive
        assert_eq!(LetterType::parse("rti"), LetterType::Unknown);
    }

    #[test]
    fn test_substitution_is_literal() {
        // No escaping: field values land in the prompt byte-for-byte
        let prompt = build_prompt(
            LetterType::Rti,
            "A & B <Pvt> Ltd",
            "Plot #7, \"East\" Lane",
            "100% refund",
            "line1\nline2",
        );
        assert!(prompt.contains("Name: A & B <Pvt> Ltd"));
        assert!(prompt.contains("Address: Plot #7, \"East\" Lane"));
        assert!(prompt.contains("Details: line1\nline2"));
    }
}
