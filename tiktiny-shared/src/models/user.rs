use serde::{Deserialize, Serialize};

/// Role assigned to an account by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    /// May upload videos.
    Creator,
    /// Any other role: may browse, like, comment and rate.
    Viewer,
}

impl UserRole {
    /// Interpret the role string sent by the server.
    #[must_use]
    pub fn from_server(value: &str) -> Self {
        if value == "creator" {
            Self::Creator
        } else {
            Self::Viewer
        }
    }
}

/// Account returned by the login and register endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Raw role string; see [`User::role`].
    pub role: String,
    #[serde(default, alias = "displayName")]
    pub display_name: Option<String>,
}

impl User {
    #[must_use]
    pub fn role(&self) -> UserRole {
        UserRole::from_server(&self.role)
    }

    #[must_use]
    pub fn is_creator(&self) -> bool {
        self.role() == UserRole::Creator
    }

    /// Name shown in the header, falling back to the email address.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}
