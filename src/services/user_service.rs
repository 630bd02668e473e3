use sqlx::PgPool;

use crate::database::models::{User, Username};
use crate::database::{Assignments, DatabaseError, QueryBuilder, Repository};

pub struct UserService {
    pool: PgPool,
    users: Repository<User>,
}

impl UserService {
    pub fn new(pool: &PgPool) -> Self {
        Self {
            pool: pool.clone(),
            users: Repository::new(pool),
        }
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, DatabaseError> {
        self.users.select_all().await
    }

    pub async fn get_all_usernames(&self) -> Result<Vec<Username>, DatabaseError> {
        QueryBuilder::new("users")?
            .select(&["username"])
            .order_by("user_id")
            .fetch_all(&self.pool)
            .await
    }

    /// Usernames are unique by convention only; the first match wins.
    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, DatabaseError> {
        QueryBuilder::new("users")?
            .where_eq("username", username)
            .order_by("user_id")
            .first(&self.pool)
            .await
    }

    pub async fn insert_user(&self, new_user: &Assignments) -> Result<User, DatabaseError> {
        self.users.insert(new_user).await
    }

    pub async fn update_user(
        &self,
        user_id: i32,
        fields: &Assignments,
    ) -> Result<u64, DatabaseError> {
        self.users.update_by_id(user_id, fields).await
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<u64, DatabaseError> {
        self.users.delete_by_id(user_id).await
    }
}
