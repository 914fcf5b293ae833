use crate::errors::AppError;
use crate::models::resume::{ResumeDraft, ResumePayload};

pub const DEFAULT_VERSION: i32 = 1;

/// Checks the required identifying fields and substitutes defaults for
/// every optional field that was left out.
///
/// FAIL conditions:
/// - `title`, `userId` or `careerId` absent or blank
/// - `aiScore` outside 0..=100
pub fn validate_payload(payload: ResumePayload) -> Result<ResumeDraft, AppError> {
    let title = non_blank(payload.title);
    let user_id = non_blank(payload.user_id);
    let career_id = non_blank(payload.career_id);

    let missing: Vec<&str> = [
        ("title", title.is_none()),
        ("userId", user_id.is_none()),
        ("careerId", career_id.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, absent)| absent.then_some(name))
    .collect();

    let (Some(title), Some(user_id), Some(career_id)) = (title, user_id, career_id) else {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    };

    if let Some(score) = payload.ai_score {
        if !(0..=100).contains(&score) {
            return Err(AppError::Validation(format!(
                "aiScore must be between 0 and 100, got {score}"
            )));
        }
    }

    Ok(ResumeDraft {
        title,
        user_id,
        career_id,
        summary: payload.summary.unwrap_or_default(),
        personal_info: payload.personal_info.unwrap_or_default(),
        skills: payload.skills.unwrap_or_default(),
        experiences: payload.experiences.unwrap_or_default(),
        education: payload.education.unwrap_or_default(),
        projects: payload.projects.unwrap_or_default(),
        certifications: payload.certifications.unwrap_or_default(),
        ai_feedback: payload.ai_feedback,
        ai_score: payload.ai_score,
        strengths: payload.strengths.unwrap_or_default(),
        improvements: payload.improvements.unwrap_or_default(),
        version: payload.version.unwrap_or(DEFAULT_VERSION),
        is_active: payload.is_active.unwrap_or(true),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: Option<&str>, user: Option<&str>, career: Option<&str>) -> ResumePayload {
        ResumePayload {
            title: title.map(String::from),
            user_id: user.map(String::from),
            career_id: career.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let draft = validate_payload(payload(Some("R1"), Some("u1"), Some("c1"))).unwrap();
        assert_eq!(draft.title, "R1");
        assert!(draft.skills.is_empty());
        assert!(draft.is_active);
        assert_eq!(draft.version, DEFAULT_VERSION);
        assert_eq!(draft.ai_score, None);
    }

    #[test]
    fn test_missing_title_rejected() {
        let err = validate_payload(payload(None, Some("u1"), Some("c1"))).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("title"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let err = validate_payload(payload(Some("R1"), Some("   "), None)).unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("userId"));
                assert!(msg.contains("careerId"));
                assert!(!msg.contains("title"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let mut p = payload(Some("R1"), Some("u1"), Some("c1"));
        p.ai_score = Some(140);
        assert!(matches!(validate_payload(p), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_explicit_values_kept() {
        let mut p = payload(Some("R1"), Some("u1"), Some("c1"));
        p.is_active = Some(false);
        p.version = Some(3);
        p.summary = Some("ML engineer".into());
        let draft = validate_payload(p).unwrap();
        assert!(!draft.is_active);
        assert_eq!(draft.version, 3);
        assert_eq!(draft.summary, "ML engineer");
    }
}
