//! Core library exports for the TechSummit schedule service.
//!
//! This crate exposes the domain, repository, route and service layers used
//! by the conference-schedule web application. The `data` feature compiles
//! only the domain and repository layers; the default `server` feature adds
//! the Actix-web application on top.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
