use anyhow::Result;
use async_trait::async_trait;

use crate::models::user::MockUser;

/// Resolves a session token to a user.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find_user(&self, token: &str) -> Result<Option<MockUser>>;
}

/// Fixed table of stand-in users keyed by id. The cookie value is the id.
pub struct MockSessionStore {
    users: Vec<MockUser>,
}

impl MockSessionStore {
    pub fn new(users: Vec<MockUser>) -> Self {
        Self { users }
    }

    pub fn with_default_users() -> Self {
        Self::new(vec![
            MockUser {
                id: "user_1".to_string(),
                name: "Demo Learner".to_string(),
                email: "learner@mlprephub.dev".to_string(),
                role: "student".to_string(),
            },
            MockUser {
                id: "user_2".to_string(),
                name: "Demo Mentor".to_string(),
                email: "mentor@mlprephub.dev".to_string(),
                role: "mentor".to_string(),
            },
        ])
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn find_user(&self, token: &str) -> Result<Option<MockUser>> {
        Ok(self.users.iter().find(|u| u.id == token).cloned())
    }
}
