//! Resume scoring: pluggable, trait-based analyzer producing the `aiScore`,
//! `aiFeedback`, `strengths` and `improvements` annotations.
//!
//! Default: `HeuristicResumeScorer` (presence-based point table, deterministic).
//! `AppState` holds an `Arc<dyn ResumeScorer>` so a different backend can be
//! swapped in at startup without touching handlers.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeAnalysis};

pub const MAX_SCORE: i32 = 100;
const SUMMARY_MIN_CHARS: usize = 50;
const SKILLS_TARGET: usize = 5;

#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn analyze(&self, resume: &Resume) -> Result<ResumeAnalysis, AppError>;
}

/// Presence-based scorer. Each signal adds a fixed number of points and
/// contributes either a strength or an improvement line.
///
/// | signal                                   | points |
/// |------------------------------------------|--------|
/// | name, email, phone (each)                | 5      |
/// | any profile link                         | 5      |
/// | summary ≥ 50 chars (5 if shorter)        | 15     |
/// | at least one experience                  | 20     |
/// | quantified experience line               | 5      |
/// | ≥ 5 skills (10 if at least one)          | 15     |
/// | education                                | 15     |
/// | project                                  | 10     |
/// | certification                            | 5      |
pub struct HeuristicResumeScorer;

#[async_trait]
impl ResumeScorer for HeuristicResumeScorer {
    async fn analyze(&self, resume: &Resume) -> Result<ResumeAnalysis, AppError> {
        Ok(score_resume(resume))
    }
}

#[derive(Default)]
struct Tally {
    score: i32,
    strengths: Vec<String>,
    improvements: Vec<String>,
}

impl Tally {
    fn check(&mut self, passed: bool, points: i32, strength: &str, improvement: &str) {
        if passed {
            self.score += points;
            self.strengths.push(strength.to_string());
        } else {
            self.improvements.push(improvement.to_string());
        }
    }

    /// Some credit, but the signal still shows up as an improvement.
    fn partial(&mut self, points: i32, improvement: String) {
        self.score += points;
        self.improvements.push(improvement);
    }
}

pub fn score_resume(resume: &Resume) -> ResumeAnalysis {
    let info = &resume.personal_info;
    let mut tally = Tally::default();

    tally.check(
        !info.full_name.trim().is_empty(),
        5,
        "Full name is present",
        "Add your full name to the header",
    );
    tally.check(
        !info.email.trim().is_empty(),
        5,
        "Contact email is present",
        "Add a contact email",
    );
    tally.check(
        !info.phone.trim().is_empty(),
        5,
        "Phone number is present",
        "Add a phone number",
    );
    tally.check(
        info.has_links(),
        5,
        "Profile links (LinkedIn, GitHub or portfolio) included",
        "Link your LinkedIn, GitHub or portfolio",
    );

    let summary_len = resume.summary.trim().chars().count();
    if summary_len > 0 && summary_len < SUMMARY_MIN_CHARS {
        tally.partial(
            5,
            format!("Expand your summary to at least {SUMMARY_MIN_CHARS} characters"),
        );
    } else {
        tally.check(
            summary_len >= SUMMARY_MIN_CHARS,
            15,
            "Professional summary is well developed",
            "Write a short professional summary",
        );
    }

    let has_experience = !resume.experiences.is_empty();
    tally.check(
        has_experience,
        20,
        "Work experience listed",
        "Add relevant work or internship experience",
    );
    if has_experience {
        let quantified = resume.experiences.iter().any(|exp| {
            is_quantified(&exp.description) || exp.achievements.iter().any(|a| is_quantified(a))
        });
        tally.check(
            quantified,
            5,
            "Experience includes measurable results",
            "Quantify achievements with numbers, percentages or amounts",
        );
    }

    let skill_count = resume.skills.len();
    if skill_count > 0 && skill_count < SKILLS_TARGET {
        tally.partial(10, format!("List at least {SKILLS_TARGET} relevant skills"));
    } else {
        tally.check(
            skill_count >= SKILLS_TARGET,
            15,
            "Broad skills section",
            "Add a skills section",
        );
    }

    tally.check(
        !resume.education.is_empty(),
        15,
        "Education history included",
        "Add your education",
    );
    tally.check(
        !resume.projects.is_empty(),
        10,
        "Projects showcase hands-on work",
        "Add projects that demonstrate your skills",
    );
    tally.check(
        !resume.certifications.is_empty(),
        5,
        "Certifications included",
        "Consider adding relevant certifications",
    );

    let score = tally.score.clamp(0, MAX_SCORE);
    ResumeAnalysis {
        score,
        feedback: feedback_for(score).to_string(),
        strengths: tally.strengths,
        improvements: tally.improvements,
    }
}

fn feedback_for(score: i32) -> &'static str {
    match score {
        s if s >= 80 => "Strong resume. Tailor the summary and skills to each role you apply for.",
        s if s >= 50 => "Solid foundation with a few gaps. Work through the improvements below.",
        _ => "This resume needs more content before it is ready to send out.",
    }
}

/// A line counts as quantified if it carries a number, percentage or amount.
pub fn is_quantified(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        || text.contains('%')
        || text.contains('$')
        || text.contains('€')
        || text.contains('£')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        Certification, Education, Experience, PersonalInfo, Project, ResumeDraft, Skill,
    };
    use chrono::Utc;
    use uuid::Uuid;

    fn empty_resume() -> Resume {
        let now = Utc::now();
        ResumeDraft {
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
        }
        .into_resume(Uuid::new_v4(), now, now)
    }

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let analysis = score_resume(&empty_resume());
        assert_eq!(analysis.score, 0);
        assert!(analysis.strengths.is_empty());
        assert!(analysis.improvements.len() >= 8);
        assert!(analysis.feedback.contains("needs more content"));
    }

    #[test]
    fn test_complete_resume_scores_full() {
        let mut r = empty_resume();
        r.personal_info = PersonalInfo {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            location: "London".into(),
            github: Some("https://github.com/ada".into()),
            ..Default::default()
        };
        r.summary =
            "Machine learning engineer focused on production NLP systems and evaluation.".into();
        r.experiences = vec![Experience {
            company: "Acme".into(),
            position: "ML Engineer".into(),
            achievements: vec!["Cut inference latency by 40%".into()],
            ..Default::default()
        }];
        r.skills = ["Python", "PyTorch", "SQL", "Docker", "Kubernetes"]
            .into_iter()
            .map(skill)
            .collect();
        r.education = vec![Education::default()];
        r.projects = vec![Project::default()];
        r.certifications = vec![Certification::default()];

        let analysis = score_resume(&r);
        assert_eq!(analysis.score, MAX_SCORE);
        assert!(analysis.improvements.is_empty(), "{:?}", analysis.improvements);
        assert!(analysis.feedback.starts_with("Strong"));
    }

    #[test]
    fn test_partial_credit() {
        let mut r = empty_resume();
        r.summary = "Short.".into();
        r.skills = vec![skill("Python")];
        r.experiences = vec![Experience {
            description: "Helped the team with models".into(),
            ..Default::default()
        }];

        // 5 (short summary) + 10 (few skills) + 20 (experience), no quantified bonus
        let analysis = score_resume(&r);
        assert_eq!(analysis.score, 35);
        assert!(analysis
            .improvements
            .iter()
            .any(|i| i.starts_with("Quantify")));
    }

    #[test]
    fn test_quantified_detection() {
        assert!(is_quantified("Reduced cost by $2k"));
        assert!(is_quantified("Improved recall ~15%"));
        assert!(is_quantified("Served 3 teams"));
        assert!(!is_quantified("Improved the pipeline significantly"));
    }

    #[tokio::test]
    async fn test_trait_delegates_to_heuristic() {
        let scorer: &dyn ResumeScorer = &HeuristicResumeScorer;
        let analysis = scorer.analyze(&empty_resume()).await.unwrap();
        assert_eq!(analysis, score_resume(&empty_resume()));
    }
}
