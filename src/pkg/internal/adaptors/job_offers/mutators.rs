use sqlx::PgConnection;

use crate::pkg::internal::adaptors::job_offers::spec::NewJobOffer;
use crate::prelude::Result;

pub struct JobOfferMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobOfferMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobOfferMutator { pool }
    }

    pub async fn create(&mut self, offer: &NewJobOffer) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO job_offers (job_title, company_name, description, email_address, phone_number)
            VALUES ($1, $2, $3, $4, $5) RETURNING id
            "#,
        )
        .bind(&offer.job_title)
        .bind(&offer.company_name)
        .bind(&offer.description)
        .bind(&offer.email_address)
        .bind(&offer.phone_number)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(id)
    }
}
