use sqlx::PgConnection;

use crate::pkg::internal::adaptors::job_offers::spec::JobOfferEntry;
use crate::prelude::Result;

pub struct JobOfferSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobOfferSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobOfferSelector { pool }
    }

    /// Every row, in whatever order the store returns them.
    pub async fn get_all(&mut self) -> Result<Vec<JobOfferEntry>> {
        let rows = sqlx::query_as::<_, JobOfferEntry>(
            "SELECT id, job_title, company_name, description, email_address, phone_number FROM job_offers",
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
