use serde_json::Value;
use sqlx::{self, postgres::{PgArguments, PgRow}, FromRow, PgPool};

use crate::database::manager::{DatabaseError, DatabaseManager};

/// Storage type of a writable column; decides how JSON input is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
}

/// A typed bind parameter
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Int(Option<i64>),
    Text(Option<String>),
}

impl Param {
    /// Coerce a request body value for a column of the given kind.
    ///
    /// Values that cannot be represented are passed through as text so the
    /// store rejects them, the same as any other bad input.
    pub fn from_json(value: &Value, kind: ColumnKind) -> Self {
        match (kind, value) {
            (ColumnKind::Text, Value::Null) => Param::Text(None),
            (ColumnKind::Integer, Value::Null) => Param::Int(None),
            (ColumnKind::Text, Value::String(s)) => Param::Text(Some(s.clone())),
            (ColumnKind::Text, other) => Param::Text(Some(other.to_string())),
            (ColumnKind::Integer, Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    Param::Int(Some(i))
                } else {
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                            Param::Int(Some(f as i64))
                        }
                        _ => Param::Text(Some(n.to_string())),
                    }
                }
            }
            (ColumnKind::Integer, Value::String(s)) => match s.trim().parse::<i64>() {
                Ok(i) => Param::Int(Some(i)),
                Err(_) => Param::Text(Some(s.clone())),
            },
            (ColumnKind::Integer, other) => Param::Text(Some(other.to_string())),
        }
    }
}

impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::Int(Some(i64::from(v)))
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Text(Some(v.to_string()))
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Text(Some(v))
    }
}

/// Column/value pairs for insert and update statements
pub type Assignments = Vec<(&'static str, Param)>;

#[derive(Debug, Clone, PartialEq)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<Param>,
}

#[derive(Debug, Clone)]
struct Join {
    table: String,
    left: String,
    right: String,
}

/// Small knex-style builder over a single table
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table_name: String,
    select_columns: Vec<String>,
    joins: Vec<Join>,
    conditions: Vec<(String, Param)>,
    order_by: Vec<String>,
}

impl QueryBuilder {
    pub fn new(table_name: impl Into<String>) -> Result<Self, DatabaseError> {
        let name = table_name.into();
        validate_identifier(&name)?;
        Ok(Self {
            table_name: name,
            select_columns: Vec::new(),
            joins: Vec::new(),
            conditions: Vec::new(),
            order_by: Vec::new(),
        })
    }

    pub fn select(mut self, columns: &[&str]) -> Self {
        self.select_columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn inner_join(mut self, table: &str, left: &str, right: &str) -> Self {
        self.joins.push(Join {
            table: table.to_string(),
            left: left.to_string(),
            right: right.to_string(),
        });
        self
    }

    pub fn where_eq(mut self, column: &str, value: impl Into<Param>) -> Self {
        self.conditions.push((column.to_string(), value.into()));
        self
    }

    pub fn order_by(mut self, column: &str) -> Self {
        self.order_by.push(column.to_string());
        self
    }

    pub fn to_select_sql(&self) -> Result<SqlResult, DatabaseError> {
        let columns = if self.select_columns.is_empty() {
            "*".to_string()
        } else {
            self.select_columns
                .iter()
                .map(|c| quote_qualified(c))
                .collect::<Result<Vec<_>, _>>()?
                .join(", ")
        };

        let mut query = format!("SELECT {} FROM {}", columns, quote_qualified(&self.table_name)?);
        for join in &self.joins {
            query.push_str(&format!(
                " INNER JOIN {} ON {} = {}",
                quote_qualified(&join.table)?,
                quote_qualified(&join.left)?,
                quote_qualified(&join.right)?
            ));
        }

        let mut params = Vec::new();
        query.push_str(&self.where_sql(&mut params)?);

        if !self.order_by.is_empty() {
            let order = self
                .order_by
                .iter()
                .map(|c| quote_qualified(c))
                .collect::<Result<Vec<_>, _>>()?
                .join(", ");
            query.push_str(&format!(" ORDER BY {}", order));
        }

        Ok(SqlResult { query, params })
    }

    pub fn to_insert_sql(&self, values: &Assignments) -> Result<SqlResult, DatabaseError> {
        if values.is_empty() {
            return Err(DatabaseError::QueryError(format!(
                "insert into {} without values",
                self.table_name
            )));
        }

        let mut columns = Vec::with_capacity(values.len());
        let mut placeholders = Vec::with_capacity(values.len());
        let mut params = Vec::with_capacity(values.len());
        for (i, (column, value)) in values.iter().enumerate() {
            columns.push(quote_qualified(column)?);
            placeholders.push(format!("${}", i + 1));
            params.push(value.clone());
        }

        let query = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            quote_qualified(&self.table_name)?,
            columns.join(", "),
            placeholders.join(", ")
        );
        Ok(SqlResult { query, params })
    }

    pub fn to_update_sql(&self, values: &Assignments) -> Result<SqlResult, DatabaseError> {
        if values.is_empty() {
            return Err(DatabaseError::QueryError(format!(
                "update of {} without values",
                self.table_name
            )));
        }

        let mut params = Vec::with_capacity(values.len() + self.conditions.len());
        let mut sets = Vec::with_capacity(values.len());
        for (column, value) in values {
            params.push(value.clone());
            sets.push(format!("{} = ${}", quote_qualified(column)?, params.len()));
        }

        let mut query = format!(
            "UPDATE {} SET {}",
            quote_qualified(&self.table_name)?,
            sets.join(", ")
        );
        query.push_str(&self.where_sql(&mut params)?);
        Ok(SqlResult { query, params })
    }

    pub fn to_delete_sql(&self) -> Result<SqlResult, DatabaseError> {
        let mut params = Vec::new();
        let mut query = format!("DELETE FROM {}", quote_qualified(&self.table_name)?);
        query.push_str(&self.where_sql(&mut params)?);
        Ok(SqlResult { query, params })
    }

    fn where_sql(&self, params: &mut Vec<Param>) -> Result<String, DatabaseError> {
        if self.conditions.is_empty() {
            return Ok(String::new());
        }
        let mut clauses = Vec::with_capacity(self.conditions.len());
        for (column, value) in &self.conditions {
            params.push(value.clone());
            clauses.push(format!("{} = ${}", quote_qualified(column)?, params.len()));
        }
        Ok(format!(" WHERE {}", clauses.join(" AND ")))
    }

    pub async fn fetch_all<T>(self, pool: &PgPool) -> Result<Vec<T>, DatabaseError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql_result = self.to_select_sql()?;
        tracing::debug!("{}", sql_result.query);
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        Ok(q.fetch_all(pool).await?)
    }

    /// First matching row, if any
    pub async fn first<T>(self, pool: &PgPool) -> Result<Option<T>, DatabaseError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut sql_result = self.to_select_sql()?;
        sql_result.query.push_str(" LIMIT 1");
        tracing::debug!("{}", sql_result.query);
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        Ok(q.fetch_optional(pool).await?)
    }

    /// Insert one row and return it as stored
    pub async fn insert<T>(self, pool: &PgPool, values: &Assignments) -> Result<T, DatabaseError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql_result = self.to_insert_sql(values)?;
        tracing::debug!("{}", sql_result.query);
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        Ok(q.fetch_one(pool).await?)
    }

    /// Apply a partial update; returns the number of rows affected
    pub async fn update(self, pool: &PgPool, values: &Assignments) -> Result<u64, DatabaseError> {
        let sql_result = self.to_update_sql(values)?;
        execute(pool, &sql_result).await
    }

    /// Delete matching rows; returns the number of rows affected
    pub async fn delete(self, pool: &PgPool) -> Result<u64, DatabaseError> {
        let sql_result = self.to_delete_sql()?;
        execute(pool, &sql_result).await
    }
}

async fn execute(pool: &PgPool, sql_result: &SqlResult) -> Result<u64, DatabaseError> {
    tracing::debug!("{}", sql_result.query);
    let mut q = sqlx::query(&sql_result.query);
    for p in sql_result.params.iter() {
        q = bind_param_query(q, p);
    }
    let result = q.execute(pool).await?;
    Ok(result.rows_affected())
}

fn validate_identifier(name: &str) -> Result<(), DatabaseError> {
    let valid = !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if valid {
        Ok(())
    } else {
        Err(DatabaseError::InvalidIdentifier(name.to_string()))
    }
}

/// Quote `table` or `table.column`
fn quote_qualified(name: &str) -> Result<String, DatabaseError> {
    validate_identifier(name)?;
    Ok(name
        .split('.')
        .map(DatabaseManager::quote_identifier)
        .collect::<Vec<_>>()
        .join("."))
}

fn bind_param_query<'q>(
    q: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    p: &'q Param,
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    match p {
        Param::Int(v) => q.bind(*v),
        Param::Text(v) => q.bind(v.as_deref()),
    }
}

fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    p: &'q Param,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, PgRow>,
{
    match p {
        Param::Int(v) => q.bind(*v),
        Param::Text(v) => q.bind(v.as_deref()),
    }
}
