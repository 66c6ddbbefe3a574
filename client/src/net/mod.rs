//! Networking for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the only module that talks HTTP; wire types and endpoint paths
//! come from the shared `contract` crate.

pub mod api;
