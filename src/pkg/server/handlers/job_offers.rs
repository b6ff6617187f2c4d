use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::job_offers::spec::{JobOfferEntry, NewJobOffer},
            job_offers,
        },
        server::state::AppState,
    },
    prelude::{Error, Result, ResultExt},
};

const MISSING_FIELDS: &str = "All fields are required";

/// Takes strings and numbers as text. Zero, `false`, `null` and
/// arrays or objects count as missing.
fn text_field<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    })
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobOfferInput {
    #[serde(default, deserialize_with = "text_field")]
    #[validate(required, length(min = 1))]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    #[validate(required, length(min = 1))]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    #[validate(required, length(min = 1))]
    pub phone_number: Option<String>,
}

impl CreateJobOfferInput {
    pub fn into_job_offer(self) -> Result<NewJobOffer> {
        self.validate().map_err(|e| {
            tracing::debug!("invalid job offer: {}", e);
            Error::Validation(MISSING_FIELDS)
        })?;
        match (
            self.job_title,
            self.company_name,
            self.description,
            self.email,
            self.phone_number,
        ) {
            (
                Some(job_title),
                Some(company_name),
                Some(description),
                Some(email_address),
                Some(phone_number),
            ) => Ok(NewJobOffer {
                job_title,
                company_name,
                description,
                email_address,
                phone_number,
            }),
            _ => Err(Error::Validation(MISSING_FIELDS)),
        }
    }
}

#[derive(Serialize)]
pub struct CreatedJobOffer {
    pub message: &'static str,
    pub id: i32,
}

async fn insert(state: &AppState, offer: NewJobOffer) -> Result<i32> {
    let mut conn = state.db_pool.acquire().await?;
    job_offers::create(&mut conn, offer).await
}

async fn fetch_all(state: &AppState) -> Result<Vec<JobOfferEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    job_offers::list_all(&mut conn).await
}

pub async fn create(
    State(state): State<AppState>,
    input: std::result::Result<Json<CreateJobOfferInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedJobOffer>)> {
    let Json(input) = input.map_err(|e| {
        tracing::debug!("unreadable body: {}", e);
        Error::Validation(MISSING_FIELDS)
    })?;
    let offer = input.into_job_offer()?;
    tracing::debug!("job offer submission: {:?}", &offer);
    let id = insert(&state, offer)
        .await
        .or_internal("An error occurred while adding the job offer")?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedJobOffer {
            message: "Job offer added successfully",
            id,
        }),
    ))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobOfferEntry>>> {
    let offers = fetch_all(&state)
        .await
        .or_internal("An error occurred while fetching job offers")?;
    Ok(Json(offers))
}
