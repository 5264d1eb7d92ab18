//! Plan generation and follow-up orchestration
//!
//! One request/response cycle per user action: build the prompt, call the
//! model, update the session. Model failures never tear down state. A failed
//! generation leaves the previous report in place, and a failed follow-up
//! still lands in the transcript as an error reply.

use crate::error::{AppError, AppResult};
use crate::external::GeminiClient;
use crate::services::prompt::{self, MAX_PLAN_CHARS_FOR_CHAT};
use crate::services::session::PlanSession;
use shared::{AdvisoryReport, ChatMessage, ChatRole, FarmProfile};

/// Advisory service driving the generative model
#[derive(Clone)]
pub struct AdvisoryService {
    gemini: GeminiClient,
}

impl AdvisoryService {
    /// Create a new AdvisoryService
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }

    /// Name of the model answering prompts.
    pub fn model_name(&self) -> &str {
        self.gemini.model_name()
    }

    /// Generate a resilience plan and store it in the session.
    ///
    /// The session is only touched after the model call succeeds; a failure
    /// leaves any previous report and transcript as they were.
    pub async fn generate_plan(
        &self,
        session: &mut PlanSession,
        profile: &FarmProfile,
    ) -> AppResult<AdvisoryReport> {
        let prompt_text = prompt::build_plan_prompt(profile);
        let raw = self.gemini.generate(&prompt_text).await?;

        let (rundown, full_report) = prompt::split_rundown(&raw);
        let report = AdvisoryReport::new(rundown, full_report);
        session.store_report(report.clone());

        tracing::info!(
            county = %profile.county,
            crop = %profile.planted_crop,
            "Resilience plan generated"
        );
        Ok(report)
    }

    /// Answer a follow-up question against the stored plan.
    ///
    /// The transcript always gains exactly two entries: the question, and
    /// either the model's reply or an error-flavoured reply when the call
    /// fails.
    pub async fn answer_followup(
        &self,
        session: &mut PlanSession,
        question: &str,
    ) -> AppResult<ChatMessage> {
        let report = session.current_report_text().ok_or_else(|| {
            AppError::InvalidStateTransition(
                "Generate a resilience plan before asking follow-up questions".to_string(),
            )
        })?;

        let prompt_text = prompt::build_chat_prompt(&report, question, MAX_PLAN_CHARS_FOR_CHAT);

        let reply = match self.gemini.generate(&prompt_text).await {
            Ok(text) if text.is_empty() => "Could not generate a reply.".to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Follow-up call failed: {}", e);
                format!("Error: {}", e)
            }
        };

        session.append_turn(ChatRole::User, question);
        Ok(session.append_turn(ChatRole::Assistant, reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Points at a closed local port so every model call fails fast.
    fn service() -> AdvisoryService {
        AdvisoryService::new(GeminiClient::new(
            "test-key",
            "http://127.0.0.1:1",
            "gemini-pro",
        ))
    }

    #[tokio::test]
    async fn test_followup_requires_a_plan() {
        let mut session = PlanSession::new();
        let err = service()
            .answer_followup(&mut session, "What now?")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidStateTransition(_)));
        assert!(session.messages().is_empty());
    }

    #[tokio::test]
    async fn test_failed_generation_leaves_previous_report() {
        let mut session = PlanSession::new();
        session.store_report(AdvisoryReport::new("SUM", "REST"));

        let result = service()
            .generate_plan(&mut session, &FarmProfile::default())
            .await;
        assert!(result.is_err());
        assert_eq!(session.current_report_text().unwrap(), "SUM\n\nREST");
    }

    #[tokio::test]
    async fn test_failed_generation_with_no_prior_report() {
        let mut session = PlanSession::new();
        let result = service()
            .generate_plan(&mut session, &FarmProfile::default())
            .await;
        assert!(result.is_err());
        assert!(session.report().is_none());
    }

    #[tokio::test]
    async fn test_failed_followup_still_lands_in_transcript() {
        let mut session = PlanSession::new();
        session.store_report(AdvisoryReport::new("SUM", "REST"));

        let reply = service()
            .answer_followup(&mut session, "Will maize survive?")
            .await
            .unwrap();
        assert_eq!(reply.role, ChatRole::Assistant);
        assert!(reply.content.starts_with("Error:"));

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].role, ChatRole::User);
        assert_eq!(session.messages()[0].content, "Will maize survive?");
        assert_eq!(session.current_report_text().unwrap(), "SUM\n\nREST");
    }
}
