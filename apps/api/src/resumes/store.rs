//! Resume persistence.
//!
//! `ResumeStore` is the seam handlers talk to. `PgResumeStore` is the
//! production backend; `MemoryResumeStore` backs local runs without a
//! database and the router tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeAnalysis, ResumeDraft, ResumeRow};

/// One read or one write per call. No transactions, no version checks:
/// concurrent updates to the same id resolve as last write wins.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn create(&self, draft: ResumeDraft) -> Result<Resume, AppError>;

    /// All resumes, optionally restricted to one user, newest first.
    async fn list(&self, user_id: Option<&str>) -> Result<Vec<Resume>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<Resume>, AppError>;

    /// Replaces every content field. Returns `None` if the id is unknown.
    async fn update(&self, id: Uuid, draft: ResumeDraft) -> Result<Option<Resume>, AppError>;

    /// Returns `false` if the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    async fn record_analysis(
        &self,
        id: Uuid,
        analysis: &ResumeAnalysis,
    ) -> Result<Option<Resume>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn create(&self, draft: ResumeDraft) -> Result<Resume, AppError> {
        let id = Uuid::new_v4();
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes
                (id, title, user_id, career_id, summary, personal_info, skills,
                 experiences, education, projects, certifications, ai_feedback,
                 ai_score, strengths, improvements, version, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.user_id)
        .bind(&draft.career_id)
        .bind(&draft.summary)
        .bind(Json(&draft.personal_info))
        .bind(Json(&draft.skills))
        .bind(Json(&draft.experiences))
        .bind(Json(&draft.education))
        .bind(Json(&draft.projects))
        .bind(Json(&draft.certifications))
        .bind(&draft.ai_feedback)
        .bind(draft.ai_score)
        .bind(&draft.strengths)
        .bind(&draft.improvements)
        .bind(draft.version)
        .bind(draft.is_active)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted resume {id} for user {}", draft.user_id);
        Ok(row.into())
    }

    async fn list(&self, user_id: Option<&str>) -> Result<Vec<Resume>, AppError> {
        let rows = sqlx::query_as::<_, ResumeRow>(
            r#"
            SELECT * FROM resumes
            WHERE ($1::TEXT IS NULL OR user_id = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Resume::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Resume>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Resume::from))
    }

    async fn update(&self, id: Uuid, draft: ResumeDraft) -> Result<Option<Resume>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes SET
                title = $2, user_id = $3, career_id = $4, summary = $5,
                personal_info = $6, skills = $7, experiences = $8, education = $9,
                projects = $10, certifications = $11, ai_feedback = $12, ai_score = $13,
                strengths = $14, improvements = $15, version = $16, is_active = $17,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.user_id)
        .bind(&draft.career_id)
        .bind(&draft.summary)
        .bind(Json(&draft.personal_info))
        .bind(Json(&draft.skills))
        .bind(Json(&draft.experiences))
        .bind(Json(&draft.education))
        .bind(Json(&draft.projects))
        .bind(Json(&draft.certifications))
        .bind(&draft.ai_feedback)
        .bind(draft.ai_score)
        .bind(&draft.strengths)
        .bind(&draft.improvements)
        .bind(draft.version)
        .bind(draft.is_active)
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            info!("Updated resume {id}");
        }
        Ok(row.map(Resume::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn record_analysis(
        &self,
        id: Uuid,
        analysis: &ResumeAnalysis,
    ) -> Result<Option<Resume>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes SET
                ai_score = $2, ai_feedback = $3, strengths = $4, improvements = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(analysis.score)
        .bind(&analysis.feedback)
        .bind(&analysis.strengths)
        .bind(&analysis.improvements)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Resume::from))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryResumeStore {
    // Insertion order breaks ties between equal `created_at` values.
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    order: Vec<Uuid>,
    records: HashMap<Uuid, Resume>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn create(&self, draft: ResumeDraft) -> Result<Resume, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let resume = draft.into_resume(id, now, now);

        let mut inner = self.inner.write().await;
        inner.order.push(id);
        inner.records.insert(id, resume.clone());

        info!("Inserted resume {id} for user {}", resume.user_id);
        Ok(resume)
    }

    async fn list(&self, user_id: Option<&str>) -> Result<Vec<Resume>, AppError> {
        let inner = self.inner.read().await;
        let mut resumes: Vec<Resume> = inner
            .order
            .iter()
            .rev()
            .filter_map(|id| inner.records.get(id))
            .filter(|r| user_id.map_or(true, |u| r.user_id == u))
            .cloned()
            .collect();
        resumes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(resumes)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Resume>, AppError> {
        Ok(self.inner.read().await.records.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, draft: ResumeDraft) -> Result<Option<Resume>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(existing) = inner.records.get_mut(&id) else {
            return Ok(None);
        };
        *existing = draft.into_resume(id, existing.created_at, Utc::now());

        info!("Updated resume {id}");
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        if inner.records.remove(&id).is_none() {
            return Ok(false);
        }
        inner.order.retain(|existing| *existing != id);
        Ok(true)
    }

    async fn record_analysis(
        &self,
        id: Uuid,
        analysis: &ResumeAnalysis,
    ) -> Result<Option<Resume>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(existing) = inner.records.get_mut(&id) else {
            return Ok(None);
        };
        existing.ai_score = Some(analysis.score);
        existing.ai_feedback = Some(analysis.feedback.clone());
        existing.strengths = analysis.strengths.clone();
        existing.improvements = analysis.improvements.clone();
        existing.updated_at = Utc::now();
        Ok(Some(existing.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumePayload;
    use crate::resumes::validation::validate_payload;

    fn draft(title: &str, user: &str) -> ResumeDraft {
        validate_payload(ResumePayload {
            title: Some(title.into()),
            user_id: Some(user.into()),
            career_id: Some("ml-engineer".into()),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_filters_and_orders_newest_first() {
        let store = MemoryResumeStore::new();
        let first = store.create(draft("A", "u1")).await.unwrap();
        store.create(draft("B", "u2")).await.unwrap();
        let third = store.create(draft("C", "u1")).await.unwrap();

        let listed = store.list(Some("u1")).await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![third.id, first.id]);

        assert_eq!(store.list(None).await.unwrap().len(), 3);
        assert!(store.list(Some("nobody")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_and_keeps_created_at() {
        let store = MemoryResumeStore::new();
        let created = store.create(draft("A", "u1")).await.unwrap();

        let mut next = draft("A v2", "u1");
        next.summary = "second".into();
        let updated = store.update(created.id, next).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.title, "A v2");
        assert_eq!(updated.summary, "second");
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store = MemoryResumeStore::new();
        let id = Uuid::new_v4();
        assert!(store.get(id).await.unwrap().is_none());
        assert!(store.update(id, draft("A", "u1")).await.unwrap().is_none());
        assert!(!store.delete(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_from_listing() {
        let store = MemoryResumeStore::new();
        let created = store.create(draft("A", "u1")).await.unwrap();
        assert!(store.delete(created.id).await.unwrap());
        assert!(store.get(created.id).await.unwrap().is_none());
        assert!(store.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_analysis_only_touches_annotations() {
        let store = MemoryResumeStore::new();
        let mut d = draft("A", "u1");
        d.summary = "keep me".into();
        let created = store.create(d).await.unwrap();

        let analysis = ResumeAnalysis {
            score: 42,
            feedback: "needs work".into(),
            strengths: vec!["s".into()],
            improvements: vec!["i".into()],
        };
        let updated = store
            .record_analysis(created.id, &analysis)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.ai_score, Some(42));
        assert_eq!(updated.ai_feedback.as_deref(), Some("needs work"));
        assert_eq!(updated.summary, "keep me");
    }
}
