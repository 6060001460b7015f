//! Advisory content attached to a scored result: the per-category breakdown,
//! the static checklist, and the structured summary template.

use crate::models::analysis::{Category, ChecklistItem, ChecklistStatus};

/// Returned in place of a summary when either input is empty.
pub const DEGENERATE_ADVISORY: &str = "Provide both Resume and Job Description to score.";

/// Derives the five fixed categories from the final score.
/// Order and names are part of the response contract.
pub fn categories_for(score: u32) -> Vec<Category> {
    vec![
        Category {
            name: "Searchability".to_string(),
            issues: if score > 85 { 0 } else { 2 },
            progress: score.min(100),
        },
        Category {
            name: "Hard Skills".to_string(),
            issues: if score > 90 { 1 } else { 3 },
            progress: score.saturating_sub(5).max(30),
        },
        Category {
            name: "Soft Skills".to_string(),
            issues: 2,
            progress: score.saturating_sub(15).max(25),
        },
        Category {
            name: "Recruiter Tips".to_string(),
            issues: 1,
            progress: score.saturating_sub(10).max(20),
        },
        Category {
            name: "Formatting".to_string(),
            issues: if score > 95 { 0 } else { 1 },
            progress: score.saturating_sub(5).max(40),
        },
    ]
}

// Static advisory rows. Content never varies with the input.
const CHECKLIST: &[(&str, ChecklistStatus, &str)] = &[
    (
        "ATS Tip",
        ChecklistStatus::Err,
        "Use standard headings and avoid complex tables/columns.",
    ),
    (
        "Contact Information",
        ChecklistStatus::Ok,
        "Email detected; add location if missing.",
    ),
    (
        "Summary",
        ChecklistStatus::Err,
        "Tailor summary with 2–3 JD keywords.",
    ),
    (
        "Section Headings",
        ChecklistStatus::Ok,
        "Headings appear parseable.",
    ),
    (
        "Job Title Match",
        ChecklistStatus::Err,
        "Mirror JD title where accurate.",
    ),
    (
        "Date Formatting",
        ChecklistStatus::Ok,
        "Use consistent date formats.",
    ),
    (
        "Experience",
        ChecklistStatus::Err,
        "Quantify achievements with metrics.",
    ),
    (
        "Skills Coverage",
        ChecklistStatus::Err,
        "Add missing keywords you truly possess.",
    ),
];

/// The eight static checklist rows, identical for every scored request.
pub fn checklist() -> Vec<ChecklistItem> {
    CHECKLIST
        .iter()
        .map(|(name, status, text)| ChecklistItem {
            name: (*name).to_string(),
            status: *status,
            text: (*text).to_string(),
        })
        .collect()
}

/// Multi-line summary. Only the score varies; the bullets are static copy.
pub fn structured_summary(score: u32) -> String {
    format!(
        "Match Score: {score}%\n\
         Key Strengths:\n- Core keywords partially matched\n- Parseable structure\n- Some role alignment\n\
         Gaps to Address:\n- Missing high-impact hard skills\n- Summary not tailored\n- Insufficient quantification\n- Title phrasing misaligned\n\
         Suggested Edits:\n- Add missing skills you actually have\n- Rewrite summary with JD terms\n- Quantify outcomes (%, time, cost)\n- Align job title phrasing\n\
         Optional ATS Tips:\n- Prefer clean PDF/DOCX\n- Avoid graphics and multi-column layouts\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_categories_in_fixed_order() {
        let names: Vec<String> = categories_for(50).into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "Searchability",
                "Hard Skills",
                "Soft Skills",
                "Recruiter Tips",
                "Formatting"
            ]
        );
    }

    #[test]
    fn test_perfect_score_category_row() {
        let categories = categories_for(100);
        assert_eq!(categories[0].issues, 0);
        assert_eq!(categories[0].progress, 100);
        assert_eq!(categories[1].issues, 1);
        assert_eq!(categories[1].progress, 95);
        assert_eq!(categories[4].issues, 0);
        assert_eq!(categories[4].progress, 95);
    }

    #[test]
    fn test_low_score_progress_floors() {
        let categories = categories_for(0);
        let progress: Vec<u32> = categories.iter().map(|c| c.progress).collect();
        assert_eq!(progress, [0, 30, 25, 20, 40]);
    }

    #[test]
    fn test_mid_score_issue_counts() {
        let categories = categories_for(60);
        let issues: Vec<u32> = categories.iter().map(|c| c.issues).collect();
        assert_eq!(issues, [2, 3, 2, 1, 1]);
    }

    #[test]
    fn test_checklist_is_eight_static_rows() {
        let rows = checklist();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].name, "ATS Tip");
        assert_eq!(rows[0].status, ChecklistStatus::Err);
        assert_eq!(rows[7].name, "Skills Coverage");
        assert_eq!(rows, checklist());
    }

    #[test]
    fn test_summary_sections_in_order() {
        let summary = structured_summary(73);
        assert!(summary.starts_with("Match Score: 73%\n"));
        let sections = [
            "Key Strengths:",
            "Gaps to Address:",
            "Suggested Edits:",
            "Optional ATS Tips:",
        ];
        let mut last = 0;
        for section in sections {
            let at = summary.find(section).expect(section);
            assert!(at > last, "{section} out of order");
            last = at;
        }
    }
}
