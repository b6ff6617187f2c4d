use sqlx::PgConnection;

use crate::{
    pkg::internal::adaptors::job_offers::{
        mutators::JobOfferMutator,
        selectors::JobOfferSelector,
        spec::{JobOfferEntry, NewJobOffer},
    },
    prelude::Result,
};

pub async fn create(conn: &mut PgConnection, offer: NewJobOffer) -> Result<i32> {
    let id = JobOfferMutator::new(conn).create(&offer).await?;
    tracing::info!("added job offer {} ({})", id, &offer.job_title);
    Ok(id)
}

pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<JobOfferEntry>> {
    JobOfferSelector::new(conn).get_all().await
}
