//! Submission context builder for analysis.
//!
//! Flattens a submission payload into the plain-text block the analysis
//! prompt reads: assessment identity, the intake demographics, and the
//! numbered answers with their weights.

use nexacare_core::models::submission::SubmissionPayload;

/// Build the user-message block for an analysis run.
///
/// Missing demographics render as blank rather than dropping their lines,
/// so the block's shape is stable across submissions.
pub fn build_submission_block(payload: &SubmissionPayload) -> String {
    let user = &payload.user_info;

    let mut block = String::from("Assessment Data for Analysis:\n\n");
    block.push_str(&format!(
        "ASSESSMENT: {} (ID: {})\n\n",
        payload.assessment_name, payload.assessment_id
    ));

    block.push_str("USER INFORMATION:\n");
    block.push_str(&format!(
        "- Name: {}\n",
        user.full_name.as_deref().unwrap_or("")
    ));
    block.push_str(&format!(
        "- Age: {} years old\n",
        user.age.map(|a| a.to_string()).unwrap_or_default()
    ));
    block.push_str(&format!(
        "- Gender: {}\n",
        user.gender.as_deref().unwrap_or("")
    ));
    block.push_str(&format!(
        "- Location: {}\n",
        user.place_of_residence.as_deref().unwrap_or("")
    ));
    block.push_str(&format!(
        "- Contact: {}\n",
        user.email_address.as_deref().unwrap_or("")
    ));

    block.push_str("\nRESPONSES:\n");
    for (index, answer) in payload.answers.iter().enumerate() {
        block.push_str(&format!("\n{}. {}\n", index + 1, answer.question));
        block.push_str(&format!("   Answer: {}\n", answer.answer));
        if answer.weight > 0 {
            block.push_str(&format!("   Weight: {}\n", answer.weight));
        }
    }

    block.push_str(&format!(
        "\n\nAssessment completed on: {}\n\n",
        payload.timestamp.strftime("%-m/%-d/%Y")
    ));
    block.push_str("Please provide a comprehensive health assessment analysis based on this data.");

    block
}
