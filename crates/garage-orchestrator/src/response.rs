//! Assistant message text for the respond state.

use std::fmt::Write;

use garage_core::models::PartsDependency;
use garage_taxonomy::DiagnosisCandidate;

pub const CLARIFICATION_MESSAGE: &str =
    "I couldn't determine a diagnosis. Could you provide more details about the issue?";

pub const OUT_OF_SCOPE_MESSAGE: &str =
    "This doesn't look like a vehicle service issue. Could you describe the problem with your vehicle?";

pub const ERROR_MESSAGE: &str = "Sorry, an error occurred while diagnosing the issue.";

pub fn diagnosis_message(
    diagnosis: &DiagnosisCandidate,
    parts: Option<&PartsDependency>,
    similar_cases: usize,
) -> String {
    let mut text = format!(
        "**Diagnosis:** {} → {} → {}\n**Confidence:** {}%\n**Reasoning:** {}",
        diagnosis.system(),
        diagnosis.component(),
        diagnosis.failure_mode(),
        diagnosis.confidence().percent(),
        diagnosis.reasoning(),
    );

    if let Some(parts) = parts {
        if !parts.mandatory.is_empty() {
            let _ = write!(text, "\n\n**Required Parts:** {}", parts.mandatory.join(", "));
        }
        if !parts.recommended.is_empty() {
            let _ = write!(text, "\n**Also Recommended:** {}", parts.recommended.join(", "));
        }
        if let Some(note) = parts.labor_note.as_deref().filter(|n| !n.is_empty()) {
            let _ = write!(text, "\n*{note}*");
        }
    }

    if similar_cases > 0 {
        let _ = write!(text, "\n\n**Similar past cases:** {similar_cases} found");
    }
    text
}
