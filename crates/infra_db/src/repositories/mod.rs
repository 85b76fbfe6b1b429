//! Repository implementations of the domain store ports

mod bills;
mod groups;
mod transactions;
mod users;

pub use bills::PgBillStore;
pub use groups::PgGroupStore;
pub use transactions::PgTransactionStore;
pub use users::PgUserStore;

use domain_split::StoreError;

use crate::error::DatabaseError;

impl From<DatabaseError> for StoreError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::DuplicateEntry(message)
            | DatabaseError::ForeignKeyViolation(message)
            | DatabaseError::ConstraintViolation(message) => StoreError::Conflict(message),
            DatabaseError::ConnectionFailed(message) => StoreError::Connection(message),
            DatabaseError::PoolExhausted => {
                StoreError::Connection("connection pool exhausted".to_string())
            }
            other => StoreError::Internal(other.to_string()),
        }
    }
}

/// Maps a raw SQLx error through the database taxonomy into a store error
pub(crate) fn store_err(error: sqlx::Error) -> StoreError {
    DatabaseError::from(error).into()
}
