//! Login response.

use serde::{Deserialize, Serialize};

use crate::constants::LOGIN_SUCCESS_MESSAGE;

/// Result of a login attempt. Carries the username only, never the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginOut {
    /// Username that logged in
    #[cfg_attr(feature = "openapi", schema(example = "ada"))]
    pub username: String,
    /// Outcome message
    #[serde(default = "default_message")]
    #[cfg_attr(feature = "openapi", schema(example = "Login successful"))]
    pub message: String,
}

fn default_message() -> String {
    LOGIN_SUCCESS_MESSAGE.to_string()
}

impl LoginOut {
    /// Successful login for `username` with the default message
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            message: default_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_message() {
        let out = LoginOut::new("ada");
        assert_eq!(out.username, "ada");
        assert_eq!(out.message, "Login successful");
    }

    #[test]
    fn missing_message_deserializes_to_default() {
        let out: LoginOut = serde_json::from_str(r#"{"username":"ada"}"#).unwrap();
        assert_eq!(out, LoginOut::new("ada"));
    }
}
