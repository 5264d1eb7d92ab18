//! Per-session plan and conversation state
//!
//! Every end-user session owns an independent report and transcript.
//! Sessions are memory-resident only and die with the process.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::{AdvisoryReport, ChatMessage, ChatRole};

/// One user's plan and follow-up transcript
#[derive(Debug)]
pub struct PlanSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    report: Option<AdvisoryReport>,
    messages: Vec<ChatMessage>,
}

impl PlanSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            report: None,
            messages: Vec::new(),
        }
    }

    /// Replace the stored report and reset the transcript. A new report
    /// always starts a fresh follow-up thread.
    pub fn store_report(&mut self, report: AdvisoryReport) {
        self.report = Some(report);
        self.messages.clear();
    }

    /// The stored report, if any.
    pub fn report(&self) -> Option<&AdvisoryReport> {
        self.report.as_ref()
    }

    /// Plan text used as chat context, when a report exists.
    pub fn current_report_text(&self) -> Option<String> {
        self.report.as_ref().map(AdvisoryReport::combined_text)
    }

    /// Append one transcript entry and return a copy of it.
    pub fn append_turn(&mut self, role: ChatRole, content: impl Into<String>) -> ChatMessage {
        let message = ChatMessage::new(role, content);
        self.messages.push(message.clone());
        message
    }

    /// The transcript, in insertion order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

impl Default for PlanSession {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory session registry
///
/// Each session is wrapped in its own async mutex so one session's actions
/// run one at a time while distinct sessions stay independent.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Mutex<PlanSession>>>>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and return its id.
    pub fn create(&self) -> AppResult<Uuid> {
        let session = PlanSession::new();
        let id = session.id;
        self.sessions
            .write()
            .map_err(|_| AppError::Internal("Session registry lock poisoned".to_string()))?
            .insert(id, Arc::new(Mutex::new(session)));
        Ok(id)
    }

    /// Fetch a session handle.
    pub fn get(&self, id: Uuid) -> AppResult<Arc<Mutex<PlanSession>>> {
        self.sessions
            .read()
            .map_err(|_| AppError::Internal("Session registry lock poisoned".to_string()))?
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Session".to_string()))
    }

    /// Drop a session and everything it holds.
    pub fn remove(&self, id: Uuid) -> AppResult<()> {
        self.sessions
            .write()
            .map_err(|_| AppError::Internal("Session registry lock poisoned".to_string()))?
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Session".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_report_composes_plan_text() {
        let mut session = PlanSession::new();
        session.store_report(AdvisoryReport::new("SUM", "REST"));
        assert_eq!(session.current_report_text().unwrap(), "SUM\n\nREST");
    }

    #[test]
    fn test_store_report_without_rundown() {
        let mut session = PlanSession::new();
        session.store_report(AdvisoryReport::new("", "REST"));
        assert_eq!(session.current_report_text().unwrap(), "REST");
    }

    #[test]
    fn test_new_report_clears_transcript() {
        let mut session = PlanSession::new();
        session.store_report(AdvisoryReport::new("SUM", "REST"));
        session.append_turn(ChatRole::User, "q");
        session.append_turn(ChatRole::Assistant, "a");
        assert_eq!(session.messages().len(), 2);

        session.store_report(AdvisoryReport::new("SUM2", "REST2"));
        assert!(session.messages().is_empty());
        assert_eq!(session.current_report_text().unwrap(), "SUM2\n\nREST2");
    }

    #[test]
    fn test_append_turn_preserves_order() {
        let mut session = PlanSession::new();
        session.append_turn(ChatRole::User, "first");
        session.append_turn(ChatRole::Assistant, "second");
        session.append_turn(ChatRole::User, "third");

        let roles: Vec<_> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant, ChatRole::User]);
        assert_eq!(session.messages()[2].content, "third");
    }

    #[test]
    fn test_fresh_session_has_no_report() {
        let session = PlanSession::new();
        assert!(session.report().is_none());
        assert!(session.current_report_text().is_none());
        assert!(session.messages().is_empty());
    }

    #[tokio::test]
    async fn test_store_create_and_get() {
        let store = SessionStore::new();
        let id = store.create().unwrap();
        let session = store.get(id).unwrap();
        assert_eq!(session.lock().await.id, id);
    }

    #[test]
    fn test_store_get_unknown_session() {
        let store = SessionStore::new();
        assert!(matches!(
            store.get(Uuid::new_v4()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_store_remove() {
        let store = SessionStore::new();
        let id = store.create().unwrap();
        store.remove(id).unwrap();
        assert!(store.get(id).is_err());
        assert!(store.remove(id).is_err());
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let first = store.create().unwrap();
        let second = store.create().unwrap();

        store
            .get(first)
            .unwrap()
            .lock()
            .await
            .store_report(AdvisoryReport::new("SUM", "REST"));

        assert!(store.get(second).unwrap().lock().await.report().is_none());
    }
}
