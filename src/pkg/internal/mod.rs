pub mod accounts;
pub mod adaptors;
pub mod job_offers;
pub mod password;
