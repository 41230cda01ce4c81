//! Shared utilities and common types for the Aldai League backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Cryptographic utilities (token hashing)
//! - Password hashing with Argon2id
//! - JWT issuing and validation
//! - Common validation logic

pub mod crypto;
pub mod jwt;
pub mod password;
pub mod validation;
