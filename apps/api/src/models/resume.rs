use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Section records
// ────────────────────────────────────────────────────────────────────────────
//
// Every field is optional on input so partially filled editor state
// deserializes; missing values fall back to empty.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

impl PersonalInfo {
    pub fn has_links(&self) -> bool {
        [&self.linkedin, &self.github, &self.website]
            .iter()
            .any(|link| link.as_deref().is_some_and(|l| !l.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    /// Editors send either a label ("expert") or a number (3).
    #[serde(deserialize_with = "label_or_number")]
    pub level: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: Option<String>,
    pub link: Option<String>,
}

fn label_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LabelOrNumber {
        Label(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<LabelOrNumber>::deserialize(deserializer)?.map(|level| match level {
            LabelOrNumber::Label(label) => label,
            LabelOrNumber::Number(n) => n.to_string(),
        }),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Wire shapes
// ────────────────────────────────────────────────────────────────────────────

/// A persisted resume as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub title: String,
    pub user_id: String,
    pub career_id: String,
    pub summary: String,
    pub personal_info: PersonalInfo,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub ai_feedback: Option<String>,
    pub ai_score: Option<i32>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub version: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for create and update. The three identifying fields are
/// optional here so their absence can be reported as a validation error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumePayload {
    pub title: Option<String>,
    pub user_id: Option<String>,
    pub career_id: Option<String>,
    pub summary: Option<String>,
    pub personal_info: Option<PersonalInfo>,
    pub skills: Option<Vec<Skill>>,
    pub experiences: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub projects: Option<Vec<Project>>,
    pub certifications: Option<Vec<Certification>>,
    pub ai_feedback: Option<String>,
    pub ai_score: Option<i32>,
    pub strengths: Option<Vec<String>>,
    pub improvements: Option<Vec<String>>,
    pub version: Option<i32>,
    pub is_active: Option<bool>,
}

/// A validated payload with defaults applied, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDraft {
    pub title: String,
    pub user_id: String,
    pub career_id: String,
    pub summary: String,
    pub personal_info: PersonalInfo,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub ai_feedback: Option<String>,
    pub ai_score: Option<i32>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub version: i32,
    pub is_active: bool,
}

impl ResumeDraft {
    /// Builds the stored record for a fresh insert or a full replacement.
    pub fn into_resume(
        self,
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Resume {
        Resume {
            id,
            title: self.title,
            user_id: self.user_id,
            career_id: self.career_id,
            summary: self.summary,
            personal_info: self.personal_info,
            skills: self.skills,
            experiences: self.experiences,
            education: self.education,
            projects: self.projects,
            certifications: self.certifications,
            ai_feedback: self.ai_feedback,
            ai_score: self.ai_score,
            strengths: self.strengths,
            improvements: self.improvements,
            version: self.version,
            is_active: self.is_active,
            created_at,
            updated_at,
        }
    }
}

/// Output of a resume scorer, written back onto the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub score: i32,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Database row
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub title: String,
    pub user_id: String,
    pub career_id: String,
    pub summary: String,
    pub personal_info: Json<PersonalInfo>,
    pub skills: Json<Vec<Skill>>,
    pub experiences: Json<Vec<Experience>>,
    pub education: Json<Vec<Education>>,
    pub projects: Json<Vec<Project>>,
    pub certifications: Json<Vec<Certification>>,
    pub ai_feedback: Option<String>,
    pub ai_score: Option<i32>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub version: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResumeRow> for Resume {
    fn from(row: ResumeRow) -> Self {
        Resume {
            id: row.id,
            title: row.title,
            user_id: row.user_id,
            career_id: row.career_id,
            summary: row.summary,
            personal_info: row.personal_info.0,
            skills: row.skills.0,
            experiences: row.experiences.0,
            education: row.education.0,
            projects: row.projects.0,
            certifications: row.certifications.0,
            ai_feedback: row.ai_feedback,
            ai_score: row.ai_score,
            strengths: row.strengths,
            improvements: row.improvements,
            version: row.version,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_accepts_partial_sections() {
        let payload: ResumePayload = serde_json::from_value(json!({
            "title": "R1",
            "personalInfo": { "fullName": "Ada" },
            "experiences": [{ "company": "Acme", "current": true }]
        }))
        .unwrap();

        let info = payload.personal_info.unwrap();
        assert_eq!(info.full_name, "Ada");
        assert_eq!(info.email, "");
        let exp = &payload.experiences.unwrap()[0];
        assert!(exp.current);
        assert!(exp.achievements.is_empty());
        assert!(payload.user_id.is_none());
    }

    #[test]
    fn test_resume_serializes_camel_case() {
        let draft = ResumeDraft {
            title: "R1".into(),
            user_id: "u1".into(),
            career_id: "c1".into(),
            summary: String::new(),
            personal_info: PersonalInfo::default(),
            skills: vec![],
            experiences: vec![],
            education: vec![],
            projects: vec![],
            certifications: vec![],
            ai_feedback: None,
            ai_score: None,
            strengths: vec![],
            improvements: vec![],
            version: 1,
            is_active: true,
        };
        let now = Utc::now();
        let value = serde_json::to_value(draft.into_resume(Uuid::new_v4(), now, now)).unwrap();
        assert_eq!(value["userId"], "u1");
        assert_eq!(value["careerId"], "c1");
        assert_eq!(value["isActive"], true);
        assert!(value["aiScore"].is_null());
        assert!(value.get("personalInfo").is_some());
    }

    #[test]
    fn test_numeric_skill_level_accepted() {
        let skills: Vec<Skill> = serde_json::from_value(json!([
            { "name": "Python", "level": 3 },
            { "name": "SQL", "level": "advanced" },
            { "name": "Rust", "level": null },
            { "name": "Go" }
        ]))
        .unwrap();

        assert_eq!(skills[0].level.as_deref(), Some("3"));
        assert_eq!(skills[1].level.as_deref(), Some("advanced"));
        assert_eq!(skills[2].level, None);
        assert_eq!(skills[3].level, None);
    }

    #[test]
    fn test_has_links_ignores_blank() {
        let mut info = PersonalInfo {
            github: Some("  ".into()),
            ..Default::default()
        };
        assert!(!info.has_links());
        info.linkedin = Some("https://linkedin.com/in/ada".into());
        assert!(info.has_links());
    }
}
