//! HTTP front end for the weather lookup service.
//!
//! The interesting logic lives in `weather-core`; this crate only maps
//! transport concerns (routing, status codes, request logging) onto it.

pub mod routes;
