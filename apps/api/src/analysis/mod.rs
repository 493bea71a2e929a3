//! Analysis Requester — builds the evaluation prompt, calls the completion
//! model, and parses the reply into a structured result.

use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::CompletionModel;

pub mod prompts;

use prompts::{ANALYSIS_PROMPT_INSTRUCTIONS, DEFAULT_JOB_DESCRIPTION};

/// Outcome of one analysis call.
///
/// The model's JSON passes through unvalidated; a completion that is not JSON
/// at all degrades to `Unparsed` instead of failing the request.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Parsed(Value),
    Unparsed {
        #[serde(rename = "rawResponse")]
        raw_response: String,
        error: String,
    },
}

/// Picks the job description to evaluate against: the caller's text when it
/// has any content, the built-in default otherwise.
pub fn resolve_job_description(supplied: Option<&str>) -> &str {
    match supplied {
        Some(jd) if !jd.trim().is_empty() => jd,
        _ => DEFAULT_JOB_DESCRIPTION,
    }
}

/// Sends the resume and job description to the completion model and parses
/// the reply. Transport and API errors propagate; a malformed-JSON completion
/// is recovered as `AnalysisOutcome::Unparsed`.
pub async fn analyze_resume(
    model: &dyn CompletionModel,
    resume_text: &str,
    job_description: &str,
) -> Result<AnalysisOutcome, AppError> {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return Err(AppError::Input(
            "Resume text and job description are required".to_string(),
        ));
    }

    // Concatenation, not substitution: resume text that happens to contain
    // placeholder-like tokens must reach the model untouched.
    let prompt = format!(
        "{ANALYSIS_PROMPT_INSTRUCTIONS}\nRESUME:\n{resume_text}\n\nJOB DESCRIPTION:\n{job_description}\n"
    );

    let completion = model.complete(&prompt).await?;
    let sanitized = strip_json_fences(&completion);

    match serde_json::from_str::<Value>(sanitized) {
        Ok(parsed) => Ok(AnalysisOutcome::Parsed(parsed)),
        Err(e) => {
            tracing::warn!("LLM returned non-JSON analysis: {e}");
            Ok(AnalysisOutcome::Unparsed {
                raw_response: sanitized.to_string(),
                error: "Invalid JSON response from AI".to_string(),
            })
        }
    }
}

/// Strips a leading ```json (or bare ```) fence and the matching closing
/// fence from a completion. Unfenced text passes through unchanged.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let body = match text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    {
        Some(body) => body.trim_start(),
        None => return text,
    };
    body.strip_suffix("```").map(|s| s.trim()).unwrap_or(body)
}
