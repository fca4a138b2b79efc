//! In-memory session timeline.
//!
//! Every session-level action (profile submission, career selection,
//! milestone toggles) appends an event here so the surface can explain
//! what happened and when. The timeline lives and dies with the session;
//! nothing is written to disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kinds of events recorded during a guidance session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEventKind {
    ProfileSubmitted,
    CareerSelected,
    MilestoneCompleted,
    MilestoneReopened,
}

impl SessionEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEventKind::ProfileSubmitted => "profile_submitted",
            SessionEventKind::CareerSelected => "career_selected",
            SessionEventKind::MilestoneCompleted => "milestone_completed",
            SessionEventKind::MilestoneReopened => "milestone_reopened",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "profile_submitted" => Some(SessionEventKind::ProfileSubmitted),
            "career_selected" => Some(SessionEventKind::CareerSelected),
            "milestone_completed" => Some(SessionEventKind::MilestoneCompleted),
            "milestone_reopened" => Some(SessionEventKind::MilestoneReopened),
            _ => None,
        }
    }
}

/// A single timeline entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEvent {
    pub id: String,
    pub at: DateTime<Utc>,
    pub kind: SessionEventKind,
    pub detail: String,
    /// Optional structured context (career id, milestone key, ...).
    pub metadata: Option<serde_json::Value>,
}

impl SessionEvent {
    pub fn new(kind: SessionEventKind, detail: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            at: Utc::now(),
            kind,
            detail: detail.to_string(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Ordered event log for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionTimeline {
    events: Vec<SessionEvent>,
}

impl SessionTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    pub fn events_of_kind(&self, kind: SessionEventKind) -> Vec<&SessionEvent> {
        self.events.iter().filter(|e| e.kind == kind).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
