use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::Resource;
use crate::database::query_builder::{Assignments, QueryBuilder};

/// Id-keyed CRUD over the table behind `T`
pub struct Repository<T> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T: Resource> Repository<T> {
    pub fn new(pool: &PgPool) -> Self {
        Self {
            pool: pool.clone(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Every row, oldest first
    pub async fn select_all(&self) -> Result<Vec<T>, DatabaseError> {
        QueryBuilder::new(T::TABLE)?
            .order_by(T::ID_COLUMN)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn select_by_id(&self, id: i32) -> Result<Option<T>, DatabaseError> {
        QueryBuilder::new(T::TABLE)?
            .where_eq(T::ID_COLUMN, id)
            .first(&self.pool)
            .await
    }

    pub async fn insert(&self, values: &Assignments) -> Result<T, DatabaseError> {
        QueryBuilder::new(T::TABLE)?.insert(&self.pool, values).await
    }

    pub async fn update_by_id(&self, id: i32, values: &Assignments) -> Result<u64, DatabaseError> {
        QueryBuilder::new(T::TABLE)?
            .where_eq(T::ID_COLUMN, id)
            .update(&self.pool, values)
            .await
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<u64, DatabaseError> {
        QueryBuilder::new(T::TABLE)?
            .where_eq(T::ID_COLUMN, id)
            .delete(&self.pool)
            .await
    }
}
