//! API Layer
//!
//! reqwest client for the remote Nadder REST API, one file per resource.

mod client;
mod auth;
mod projects;
mod pipelines;
mod statuses;
mod cards;
mod backups;
mod search;

pub use client::{ApiClient, DEFAULT_BASE_URL, BASE_URL_ENV};
