pub mod activities;
pub mod client_detail;
pub mod clients;
