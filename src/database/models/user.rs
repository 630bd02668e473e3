use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    // Stored and compared as plaintext
    pub password: String,
}

impl Resource for User {
    const TABLE: &'static str = "users";
    const ID_COLUMN: &'static str = "user_id";
    const LABEL: &'static str = "User";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Username {
    pub username: String,
}
