//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token generation and validation.
//!
//! Tokens are minted by the login service after osu! OAuth; this server only
//! verifies them.

pub mod jwt;
