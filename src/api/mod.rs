//! Client for the brews REST resource.
//!
//! # Modules
//!
//! - `backend`: [`BrewApi`] trait over list/create/update/delete
//! - `http`: reqwest implementation against a configurable base URL
//! - `memory`: in-process stand-in sharing one store across clones
//! - `models`: snake_case wire records, separate from domain types

pub mod backend;
pub mod http;
pub mod memory;
pub mod models;

pub use backend::{BrewApi, Operation};
pub use http::{HttpBrewApi, DEFAULT_BASE_URL};
pub use memory::InMemoryBrewApi;
pub use models::{BrewPayload, BrewRecord};
