use crate::models::resume::Resume;

/// Renders a resume as a Markdown document. Empty sections are skipped.
pub fn render_resume_to_md(resume: &Resume) -> String {
    let info = &resume.personal_info;
    let heading = if info.full_name.trim().is_empty() {
        resume.title.as_str()
    } else {
        info.full_name.as_str()
    };
    let mut md = format!("# {heading}\n\n");

    let contact: Vec<&str> = [
        Some(info.email.as_str()),
        Some(info.phone.as_str()),
        Some(info.location.as_str()),
        info.linkedin.as_deref(),
        info.github.as_deref(),
        info.website.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .collect();
    if !contact.is_empty() {
        md.push_str(&contact.join(" | "));
        md.push_str("\n\n");
    }

    if !resume.summary.trim().is_empty() {
        md.push_str("## Summary\n\n");
        md.push_str(resume.summary.trim());
        md.push_str("\n\n");
    }

    if !resume.experiences.is_empty() {
        md.push_str("## Experience\n\n");
        for exp in &resume.experiences {
            md.push_str(&format!("### {} — {}\n", exp.position, exp.company));
            let end = if exp.current {
                Some("Present")
            } else {
                exp.end_date.as_deref()
            };
            if let Some(range) = date_range(exp.start_date.as_deref(), end) {
                md.push_str(&format!("*{range}*\n"));
            }
            if !exp.description.trim().is_empty() {
                md.push_str(&format!("\n{}\n", exp.description.trim()));
            }
            for achievement in &exp.achievements {
                md.push_str(&format!("- {achievement}\n"));
            }
            md.push('\n');
        }
    }

    if !resume.education.is_empty() {
        md.push_str("## Education\n\n");
        for edu in &resume.education {
            let degree = match edu.field.as_deref() {
                Some(field) if !field.is_empty() => format!("{} in {}", edu.degree, field),
                _ => edu.degree.clone(),
            };
            md.push_str(&format!("### {degree} — {}\n", edu.institution));
            if let Some(range) = date_range(edu.start_date.as_deref(), edu.end_date.as_deref()) {
                md.push_str(&format!("*{range}*\n"));
            }
            if let Some(gpa) = edu.gpa.as_deref().filter(|g| !g.is_empty()) {
                md.push_str(&format!("- **GPA:** {gpa}\n"));
            }
            md.push('\n');
        }
    }

    if !resume.projects.is_empty() {
        md.push_str("## Projects\n\n");
        for project in &resume.projects {
            md.push_str(&format!("### {}\n", project.name));
            if !project.description.trim().is_empty() {
                md.push_str(&format!("{}\n", project.description.trim()));
            }
            if !project.technologies.is_empty() {
                md.push_str(&format!(
                    "- **Tech:** {}\n",
                    project.technologies.join(", ")
                ));
            }
            if let Some(link) = project.link.as_deref().filter(|l| !l.is_empty()) {
                md.push_str(&format!("- **Link:** {link}\n"));
            }
            md.push('\n');
        }
    }

    if !resume.skills.is_empty() {
        md.push_str("## Skills\n\n");
        let names: Vec<&str> = resume.skills.iter().map(|s| s.name.as_str()).collect();
        md.push_str(&names.join(", "));
        md.push_str("\n\n");
    }

    if !resume.certifications.is_empty() {
        md.push_str("## Certifications\n\n");
        for cert in &resume.certifications {
            match cert.date.as_deref().filter(|d| !d.is_empty()) {
                Some(date) => md.push_str(&format!("- {} ({}, {date})\n", cert.name, cert.issuer)),
                None => md.push_str(&format!("- {} ({})\n", cert.name, cert.issuer)),
            }
        }
        md.push('\n');
    }

    md
}

fn date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    match (start.filter(|s| !s.is_empty()), end.filter(|e| !e.is_empty())) {
        (Some(s), Some(e)) => Some(format!("{s} – {e}")),
        (Some(s), None) => Some(s.to_string()),
        (None, Some(e)) => Some(e.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, PersonalInfo, ResumeDraft, Skill};
    use chrono::Utc;
    use uuid::Uuid;

    fn resume() -> Resume {
        let now = Utc::now();
        ResumeDraft {
            title: "ML Resume".into(),
            user_id: "u1".into(),
            career_id: "ml-engineer".into(),
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

    #[test]
    fn test_empty_resume_uses_title_only() {
        let md = render_resume_to_md(&resume());
        assert_eq!(md, "# ML Resume\n\n");
    }

    #[test]
    fn test_sections_rendered() {
        let mut r = resume();
        r.personal_info.full_name = "Ada Lovelace".into();
        r.personal_info.email = "ada@example.com".into();
        r.summary = "Builds models.".into();
        r.experiences = vec![Experience {
            company: "Acme".into(),
            position: "ML Engineer".into(),
            start_date: Some("2022-01".into()),
            current: true,
            achievements: vec!["Shipped 3 models".into()],
            ..Default::default()
        }];
        r.skills = vec![
            Skill {
                name: "Python".into(),
                ..Default::default()
            },
            Skill {
                name: "SQL".into(),
                ..Default::default()
            },
        ];

        let md = render_resume_to_md(&r);
        assert!(md.starts_with("# Ada Lovelace\n\nada@example.com\n\n"));
        assert!(md.contains("## Summary\n\nBuilds models."));
        assert!(md.contains("### ML Engineer — Acme\n*2022-01 – Present*\n"));
        assert!(md.contains("- Shipped 3 models\n"));
        assert!(md.contains("## Skills\n\nPython, SQL\n"));
        assert!(!md.contains("## Education"));
    }
}
