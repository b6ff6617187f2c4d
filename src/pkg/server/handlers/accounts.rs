use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::{
    pkg::{
        internal::{
            accounts::{self, Credentials, Registration, SignedIn},
            adaptors::accounts::spec::{AccountKind, Company, CompanyEntry, Individual, IndividualEntry},
        },
        server::state::AppState,
    },
    prelude::{Error, Result, ResultExt},
};

const MISSING_FIELDS: &str = "Missing required fields";
const MISSING_CREDENTIALS: &str = "Username and password are required";
const REGISTRATION_FAILED: &str = "Internal Server Error";
const SIGNIN_FAILED: &str = "An error occurred while processing the request.";

#[derive(Deserialize, Validate)]
pub struct IndividualInput {
    #[validate(required, length(min = 1))]
    pub full_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct CompanyInput {
    #[validate(required, length(min = 1))]
    pub company_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub company_email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct SigninInput {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

fn missing(message: &'static str) -> impl FnOnce(ValidationErrors) -> Error {
    move |e| {
        tracing::debug!("invalid payload: {}", e);
        Error::Validation(message)
    }
}

fn registration(
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<Registration> {
    match (name, email, password) {
        (Some(name), Some(email), Some(password)) => Ok(Registration {
            name,
            email,
            password,
        }),
        _ => Err(Error::Validation(MISSING_FIELDS)),
    }
}

impl IndividualInput {
    pub fn into_registration(self) -> Result<Registration> {
        tracing::debug!(
            "individual registration: full_name={:?} email={:?}",
            &self.full_name,
            &self.email
        );
        self.validate().map_err(missing(MISSING_FIELDS))?;
        registration(self.full_name, self.email, self.password)
    }
}

impl CompanyInput {
    pub fn into_registration(self) -> Result<Registration> {
        tracing::debug!(
            "company registration: company_name={:?} company_email={:?}",
            &self.company_name,
            &self.company_email
        );
        self.validate().map_err(missing(MISSING_FIELDS))?;
        registration(self.company_name, self.company_email, self.password)
    }
}

impl SigninInput {
    pub fn into_credentials(self) -> Result<Credentials> {
        tracing::debug!("sign-in attempt: username={:?}", &self.username);
        self.validate().map_err(missing(MISSING_CREDENTIALS))?;
        match (self.username, self.password) {
            (Some(username), Some(password)) => Ok(Credentials { username, password }),
            _ => Err(Error::Validation(MISSING_CREDENTIALS)),
        }
    }
}

/// Malformed bodies are reported like missing fields.
fn payload<T>(payload: std::result::Result<Json<T>, JsonRejection>, message: &'static str) -> Result<T> {
    payload.map(|Json(input)| input).map_err(|e| {
        tracing::debug!("unreadable body: {}", e);
        Error::Validation(message)
    })
}

async fn register<K: AccountKind>(state: &AppState, registration: Registration) -> Result<K::Entry> {
    let mut conn = state.db_pool.acquire().await?;
    accounts::register::<K>(&mut conn, registration).await
}

async fn sign_in<K: AccountKind>(state: &AppState, credentials: Credentials) -> Result<Json<SignedIn>> {
    let mut conn = state.db_pool.acquire().await?;
    Ok(Json(accounts::sign_in::<K>(&mut conn, credentials).await?))
}

pub async fn register_individual(
    State(state): State<AppState>,
    input: std::result::Result<Json<IndividualInput>, JsonRejection>,
) -> Result<(StatusCode, Json<IndividualEntry>)> {
    let registration = payload(input, MISSING_FIELDS)?.into_registration()?;
    let entry = register::<Individual>(&state, registration)
        .await
        .or_internal(REGISTRATION_FAILED)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn register_company(
    State(state): State<AppState>,
    input: std::result::Result<Json<CompanyInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyEntry>)> {
    let registration = payload(input, MISSING_FIELDS)?.into_registration()?;
    let entry = register::<Company>(&state, registration)
        .await
        .or_internal(REGISTRATION_FAILED)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn individual_signin(
    State(state): State<AppState>,
    input: std::result::Result<Json<SigninInput>, JsonRejection>,
) -> Result<Json<SignedIn>> {
    let credentials = payload(input, MISSING_CREDENTIALS)?.into_credentials()?;
    sign_in::<Individual>(&state, credentials)
        .await
        .or_internal(SIGNIN_FAILED)
}

pub async fn company_signin(
    State(state): State<AppState>,
    input: std::result::Result<Json<SigninInput>, JsonRejection>,
) -> Result<Json<SignedIn>> {
    let credentials = payload(input, MISSING_CREDENTIALS)?.into_credentials()?;
    sign_in::<Company>(&state, credentials)
        .await
        .or_internal(SIGNIN_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_input_requires_all_fields() {
        let input: IndividualInput =
            serde_json::from_str(r#"{"full_name":"Ann Lee","email":"Ann@x.com"}"#).unwrap();
        assert!(matches!(
            input.into_registration(),
            Err(Error::Validation(MISSING_FIELDS))
        ));
    }

    #[test]
    fn test_empty_field_is_missing() {
        let input: CompanyInput = serde_json::from_str(
            r#"{"company_name":"","company_email":"hr@acme.io","password":"secret"}"#,
        )
        .unwrap();
        assert!(input.into_registration().is_err());
    }

    #[test]
    fn test_registration_keeps_email_case() {
        let input: IndividualInput = serde_json::from_str(
            r#"{"full_name":"Ann Lee","email":"Ann@x.com","password":"secret"}"#,
        )
        .unwrap();
        let registration = input.into_registration().unwrap();
        assert_eq!(registration.email, "Ann@x.com");
        assert_eq!(registration.name, "Ann Lee");
    }

    #[test]
    fn test_signin_requires_password() {
        let input: SigninInput = serde_json::from_str(r#"{"username":"ann@x.com"}"#).unwrap();
        assert!(matches!(
            input.into_credentials(),
            Err(Error::Validation(MISSING_CREDENTIALS))
        ));
    }
}
