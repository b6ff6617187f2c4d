pub mod accounts;
pub mod job_offers;
pub mod probes;
