//! # API Module
//!
//! HTTP API of the service.
//!
//! ## Structure
//!
//! * `controllers` - Request handling, one function per endpoint
//! * `routes` - Endpoint definitions and routing

pub mod controllers;

pub mod routes;
