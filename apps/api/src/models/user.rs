use serde::{Deserialize, Serialize};

/// Stand-in identity returned by `/api/auth/me`. No credentials are attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}
