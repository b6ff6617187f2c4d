use serde::Serialize;
use sqlx::PgConnection;

use crate::{
    pkg::internal::{
        adaptors::accounts::{
            mutators::AccountMutator, selectors::AccountSelector, spec::AccountKind,
        },
        password,
    },
    prelude::{Error, Result},
};

#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SignedIn {
    #[serde(rename = "firstName")]
    pub first_name: String,
}

/// Hashes the password and stores a new account, returning the stored row.
pub async fn register<K: AccountKind>(
    conn: &mut PgConnection,
    registration: Registration,
) -> Result<K::Entry> {
    let hashed = password::hash(&registration.password).await?;
    let entry = AccountMutator::<K>::new(conn)
        .create(&registration.name, &registration.email, &hashed)
        .await?;
    tracing::info!("registered {} account", K::LABEL);
    tracing::debug!("{} account email {}", K::LABEL, &registration.email);
    Ok(entry)
}

/// Checks credentials without issuing any session.
pub async fn sign_in<K: AccountKind>(
    conn: &mut PgConnection,
    credentials: Credentials,
) -> Result<SignedIn> {
    let username = &credentials.username;
    let Some(entry) = AccountSelector::<K>::new(conn)
        .get_by_email(username)
        .await?
    else {
        tracing::info!("{} sign-in: user not found", K::LABEL);
        tracing::debug!("unknown {} username {}", K::LABEL, username);
        return Err(Error::NotFound);
    };
    if !password::verify(&credentials.password, K::password_hash(&entry)).await? {
        tracing::info!("{} sign-in: incorrect password", K::LABEL);
        tracing::debug!("rejected {} username {}", K::LABEL, username);
        return Err(Error::Unauthorized);
    }
    tracing::info!("successful {} sign-in", K::LABEL);
    tracing::debug!("signed in {} username {}", K::LABEL, username);
    Ok(SignedIn {
        first_name: K::first_name(&entry),
    })
}
