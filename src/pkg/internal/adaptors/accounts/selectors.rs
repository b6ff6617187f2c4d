use std::marker::PhantomData;

use sqlx::PgConnection;

use crate::pkg::internal::adaptors::accounts::spec::AccountKind;
use crate::prelude::Result;

pub struct AccountSelector<'a, K: AccountKind> {
    pool: &'a mut PgConnection,
    kind: PhantomData<K>,
}

impl<'a, K: AccountKind> AccountSelector<'a, K> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        AccountSelector {
            pool,
            kind: PhantomData,
        }
    }

    /// Case-insensitive match; lowercasing happens on the store side only.
    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<K::Entry>> {
        let query = format!(
            "SELECT * FROM {} WHERE lower({}) = lower($1)",
            K::TABLE,
            K::EMAIL_COLUMN
        );
        let row = sqlx::query_as::<_, K::Entry>(&query)
            .bind(email)
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }
}
