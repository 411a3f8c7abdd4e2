use serde::{Deserialize, Serialize};

use super::repo::User;

/// Create/update body. Absent fields fall back to empty strings and are
/// written as-is, so a partial PUT clears whatever the caller omitted.
#[derive(Debug, Deserialize)]
pub struct UserBody {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub data: User,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub success: bool,
    pub data: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl UserResponse {
    pub fn new(data: User) -> Self {
        Self { success: true, data }
    }
}

impl UserListResponse {
    pub fn new(data: Vec<User>) -> Self {
        Self { success: true, data }
    }
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_body_fields_default_to_empty() {
        let body: UserBody = serde_json::from_str(r#"{"email":"new@x.com"}"#).unwrap();
        assert_eq!(body.email, "new@x.com");
        assert_eq!(body.username, "");
        assert_eq!(body.password, "");
    }

    #[test]
    fn empty_body_deserializes() {
        let body: UserBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.email, "");
    }

    #[test]
    fn message_response_shape() {
        let json = serde_json::to_value(MessageResponse::new("User deleted successfully")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "User deleted successfully");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn list_response_keeps_order() {
        let json = serde_json::to_value(UserListResponse::new(vec![])).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["data"].as_array().unwrap().is_empty());
    }
}
