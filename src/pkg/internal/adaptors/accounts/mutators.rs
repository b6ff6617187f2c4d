use std::marker::PhantomData;

use sqlx::PgConnection;

use crate::pkg::internal::adaptors::accounts::spec::AccountKind;
use crate::prelude::Result;

pub struct AccountMutator<'a, K: AccountKind> {
    pool: &'a mut PgConnection,
    kind: PhantomData<K>,
}

impl<'a, K: AccountKind> AccountMutator<'a, K> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        AccountMutator {
            pool,
            kind: PhantomData,
        }
    }

    /// Stores the email exactly as submitted.
    pub async fn create(&mut self, name: &str, email: &str, password_hash: &str) -> Result<K::Entry> {
        let query = format!(
            "INSERT INTO {} ({}, {}, password) VALUES ($1, $2, $3) RETURNING *",
            K::TABLE,
            K::NAME_COLUMN,
            K::EMAIL_COLUMN
        );
        let row = sqlx::query_as::<_, K::Entry>(&query)
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .fetch_one(&mut *self.pool)
            .await?;
        Ok(row)
    }
}
