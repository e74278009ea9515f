use serde::{Deserialize, Serialize};

/// A directory entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Sequential id, never reused
    pub id: i64,
    pub first: String,
    pub last: String,
    pub email: String,
    /// Free-text classification such as "student" or "professor"
    pub role: Option<String>,
    /// Cleared by deactivation, never set back
    pub active: bool,
}

impl User {
    pub fn new(id: i64, new_user: NewUser) -> Self {
        Self {
            id,
            first: new_user.first,
            last: new_user.last,
            email: new_user.email,
            role: new_user.role,
            active: true,
        }
    }
}

/// Request body for create and update; every field is optional
#[derive(Debug, Default, Deserialize)]
pub struct UserFields {
    pub first: Option<String>,
    pub last: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Validated fields for a new user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub first: String,
    pub last: String,
    pub email: String,
    pub role: Option<String>,
}

/// Validated partial update; `None` leaves the field untouched
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub first: Option<String>,
    pub last: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.last.is_none() && self.email.is_none() && self.role.is_none()
    }

    pub fn apply(self, user: &mut User) {
        if let Some(first) = self.first {
            user.first = first;
        }
        if let Some(last) = self.last {
            user.last = last;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = Some(role);
        }
    }
}

/// Records present when a store is first initialized
pub fn seed_users() -> Vec<User> {
    vec![
        seed(0, "Joe", "Bloggs", "joe@bloggs.com", "student"),
        seed(1, "Ben", "Bitdiddle", "ben@cuny.edu", "student"),
        seed(2, "Alissa P", "Hacker", "missalissa@cuny.edu", "professor"),
    ]
}

fn seed(id: i64, first: &str, last: &str, email: &str, role: &str) -> User {
    User {
        id,
        first: first.to_string(),
        last: last.to_string(),
        email: email.to_string(),
        role: Some(role.to_string()),
        active: true,
    }
}
