//! Group repository implementation

use async_trait::async_trait;
use core_kernel::{GroupId, UserId};
use domain_split::{Group, GroupStore, NewGroup, StoreError, User};
use sqlx::PgPool;
use uuid::Uuid;

use super::store_err;
use super::users::UserRow;

#[derive(Debug, sqlx::FromRow)]
struct GroupRow {
    id: Uuid,
    name: String,
}

/// PostgreSQL-backed group store
#[derive(Debug, Clone)]
pub struct PgGroupStore {
    pool: PgPool,
}

impl PgGroupStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_members(&self, group_id: Uuid) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT u.id, u.name, u.email, u.password
            FROM users u
            JOIN memberships m ON m.user_id = u.id
            WHERE m.group_id = $1
            ORDER BY u.name
            "#,
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}

#[async_trait]
impl GroupStore for PgGroupStore {
    async fn create(&self, group: NewGroup) -> Result<Group, StoreError> {
        let id = GroupId::new_v7();

        // Group row and memberships commit together or not at all.
        let mut tx = self.pool.begin().await.map_err(store_err)?;

        sqlx::query("INSERT INTO groups (id, name) VALUES ($1, $2)")
            .bind(id.as_uuid())
            .bind(&group.name)
            .execute(&mut *tx)
            .await
            .map_err(store_err)?;

        for member_id in &group.member_ids {
            sqlx::query("INSERT INTO memberships (user_id, group_id) VALUES ($1, $2)")
                .bind(member_id.as_uuid())
                .bind(id.as_uuid())
                .execute(&mut *tx)
                .await
                .map_err(store_err)?;
        }

        tx.commit().await.map_err(store_err)?;

        let members = self.fetch_members(*id.as_uuid()).await?;
        Ok(Group {
            id,
            name: group.name,
            members,
        })
    }

    async fn get_by_id(&self, id: GroupId) -> Result<Option<Group>, StoreError> {
        let row = sqlx::query_as::<_, GroupRow>("SELECT id, name FROM groups WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_err)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let members = self.fetch_members(row.id).await?;
        Ok(Some(Group {
            id: GroupId::from(row.id),
            name: row.name,
            members,
        }))
    }

    async fn add_member(&self, group_id: GroupId, user_id: UserId) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO memberships (user_id, group_id) VALUES ($1, $2)")
            .bind(user_id.as_uuid())
            .bind(group_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(())
    }
}
