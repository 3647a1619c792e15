#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "isPublic")]
    pub is_public: Option<bool>,
}

/// Plan usage counters reported alongside the authenticated user.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccountOperation {
    pub name: String,

    pub limit: i64,

    pub usage: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overage: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserResponse {
    pub user: User,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<AccountOperation>,
}
