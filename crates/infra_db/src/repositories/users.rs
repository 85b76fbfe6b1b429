//! User repository implementation

use async_trait::async_trait;
use core_kernel::UserId;
use domain_split::{NewUser, StoreError, User, UserStore};
use sqlx::PgPool;
use uuid::Uuid;

use super::store_err;

/// Database row for a user
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::from(row.id),
            name: row.name,
            email: row.email,
            password: row.password,
        }
    }
}

/// Fetches a single user by id; shared by the repositories that resolve
/// users eagerly into their results.
pub(crate) async fn fetch_user(pool: &PgPool, id: Uuid) -> Result<Option<User>, StoreError> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, password FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(store_err)?;

    Ok(row.map(User::from))
}

/// PostgreSQL-backed user store
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let id = UserId::new_v7();

        // The unique index on email turns duplicate registrations into a
        // conflict instead of a second row.
        sqlx::query("INSERT INTO users (id, name, email, password) VALUES ($1, $2, $3, $4)")
            .bind(id.as_uuid())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(User {
            id,
            name: user.name,
            email: user.email,
            password: user.password,
        })
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        fetch_user(&self.pool, *id.as_uuid()).await
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.map(User::from))
    }

    async fn get_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, StoreError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password FROM users WHERE id = ANY($1) ORDER BY name",
        )
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
