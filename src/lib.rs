//! rest-greeting: fetch a greeting from a REST endpoint and render it, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
