use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    pub username: String,
}

/// Simulated login. Any pair of non-blank credentials is accepted.
pub fn login_user(credentials: &Credentials) -> Option<User> {
    let username = credentials.username.trim();
    let password = credentials.password.trim();
    if username.is_empty() || password.is_empty() {
        return None;
    }

    Some(User {
        username: username.to_string(),
    })
}
