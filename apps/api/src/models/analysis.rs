//! Wire types for the analyze endpoint.

use serde::{Deserialize, Serialize};

/// Optional job metadata attached to an analyze request.
/// Accepted for forward compatibility and logging; scoring never reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub company_site: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub resume: String,
    pub job_description: String,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Coarse match band derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLabel {
    Low,
    Medium,
    High,
}

/// One row of the per-category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub issues: u32,
    /// 0 to 100.
    pub progress: u32,
}

/// Status of a single checklist row. Wire literals: "ok", "err", "na".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistStatus {
    Ok,
    Err,
    /// Not applicable. No static row uses it today, but it is part of the
    /// response contract.
    Na,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    pub status: ChecklistStatus,
    pub text: String,
}

/// Full analyze result. Categories and checklist are empty only for the
/// degenerate zero-score case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub score: u32,
    pub label: MatchLabel,
    pub categories: Vec<Category>,
    pub checklist: Vec<ChecklistItem>,
    pub structured: String,
}
