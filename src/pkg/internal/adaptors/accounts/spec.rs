use serde::{Deserialize, Serialize};
use sqlx::{FromRow, postgres::PgRow};

/// Table layout of one kind of account.
///
/// Both kinds share the same shape (id, name, email, password hash) under
/// different table and column names, so the store and the sign-in flow are
/// written once against this trait.
pub trait AccountKind: Send + Sync + 'static {
    type Entry: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin;

    const LABEL: &'static str;
    const TABLE: &'static str;
    const NAME_COLUMN: &'static str;
    const EMAIL_COLUMN: &'static str;

    fn password_hash(entry: &Self::Entry) -> &str;

    /// Name returned to the client after a successful sign-in.
    fn first_name(entry: &Self::Entry) -> String;
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IndividualEntry {
    pub id: i32,
    pub full_name: String,
    pub email_address: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyEntry {
    pub id: i32,
    pub company_name: String,
    pub company_email_address: String,
    pub password: String,
}

pub struct Individual;

pub struct Company;

impl AccountKind for Individual {
    type Entry = IndividualEntry;

    const LABEL: &'static str = "individual";
    const TABLE: &'static str = "individuals";
    const NAME_COLUMN: &'static str = "full_name";
    const EMAIL_COLUMN: &'static str = "email_address";

    fn password_hash(entry: &IndividualEntry) -> &str {
        &entry.password
    }

    fn first_name(entry: &IndividualEntry) -> String {
        entry
            .full_name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

impl AccountKind for Company {
    type Entry = CompanyEntry;

    const LABEL: &'static str = "company";
    const TABLE: &'static str = "companies";
    const NAME_COLUMN: &'static str = "company_name";
    const EMAIL_COLUMN: &'static str = "company_email_address";

    fn password_hash(entry: &CompanyEntry) -> &str {
        &entry.password
    }

    fn first_name(entry: &CompanyEntry) -> String {
        entry.company_name.clone()
    }
}
