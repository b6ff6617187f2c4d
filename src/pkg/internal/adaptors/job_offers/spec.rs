use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct JobOfferEntry {
    pub id: i32,
    pub job_title: String,
    pub company_name: String,
    pub description: String,
    pub email_address: String,
    pub phone_number: String,
}

#[derive(Debug, Clone)]
pub struct NewJobOffer {
    pub job_title: String,
    pub company_name: String,
    pub description: String,
    pub email_address: String,
    pub phone_number: String,
}
