//! Match scoring backends behind the `MatchScorer` trait.
//!
//! Default: `KeywordMatchScorer`, a pure token-overlap scorer (fast,
//! deterministic, no I/O). `AppState` holds an `Arc<dyn MatchScorer>` so a
//! different backend can be wired at startup without touching handler code.

use async_trait::async_trait;

use crate::analysis::advisory::{
    categories_for, checklist, structured_summary, DEGENERATE_ADVISORY,
};
use crate::analysis::rubric::{aggregate, label_for};
use crate::analysis::tokenizer::tokenize;
use crate::errors::AppError;
use crate::models::analysis::{AnalyzeResponse, MatchLabel, Meta};

/// The match scorer seam. Implementations must be deterministic: identical
/// inputs produce identical results.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn analyze(
        &self,
        resume: &str,
        job_description: &str,
        meta: Option<&Meta>,
    ) -> Result<AnalyzeResponse, AppError>;
}

/// Scores by unique-token overlap between resume and job description.
pub struct KeywordMatchScorer;

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    async fn analyze(
        &self,
        resume: &str,
        job_description: &str,
        _meta: Option<&Meta>,
    ) -> Result<AnalyzeResponse, AppError> {
        Ok(compute_keyword_match(resume, job_description))
    }
}

/// Core keyword match computation.
///
/// Empty or whitespace-only input short-circuits to the degenerate
/// zero-score result before any tokenization.
pub fn compute_keyword_match(resume: &str, job_description: &str) -> AnalyzeResponse {
    if resume.trim().is_empty() || job_description.trim().is_empty() {
        return degenerate_result();
    }

    let resume_tokens = tokenize(resume);
    let jd_tokens = tokenize(job_description);

    let overlap = jd_tokens
        .iter()
        .filter(|token| resume_tokens.contains(*token))
        .count();
    let denom = jd_tokens.len().max(1);
    // Ties round to even, matching the rubric aggregation.
    let base = ((overlap as f64 / denom as f64) * 100.0).round_ties_even();

    let score = aggregate(base);

    AnalyzeResponse {
        score,
        label: label_for(score),
        categories: categories_for(score),
        checklist: checklist(),
        structured: structured_summary(score),
    }
}

fn degenerate_result() -> AnalyzeResponse {
    AnalyzeResponse {
        score: 0,
        label: MatchLabel::Low,
        categories: Vec::new(),
        checklist: Vec::new(),
        structured: DEGENERATE_ADVISORY.to_string(),
    }
}
