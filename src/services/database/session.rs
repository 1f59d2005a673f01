use sqlx::{Any, AnyConnection, AnyPool, Transaction};

use super::DatabaseError;
use color_eyre::eyre::eyre;

/// Opens scoped sessions against one engine's pool.
#[derive(Debug, Clone)]
pub struct SessionFactory {
    pool: AnyPool,
}

impl SessionFactory {
    pub(super) fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Waits at most the pool's acquire timeout for a free connection.
    pub async fn open(&self) -> Result<Session, DatabaseError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::Connectivity(eyre!(e)))?;
        Ok(Session { tx })
    }
}

/// One pooled connection inside one transaction.
///
/// Nothing is persisted until [`Session::commit`]. Dropping a session on any
/// other path (error, early return, cancelled future) rolls the transaction
/// back and hands the connection back to the pool.
#[derive(Debug)]
pub struct Session {
    tx: Transaction<'static, Any>,
}

impl Session {
    pub fn connection(&mut self) -> &mut AnyConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }

    pub async fn rollback(self) -> Result<(), sqlx::Error> {
        self.tx.rollback().await
    }
}
