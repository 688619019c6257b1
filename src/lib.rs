//! # Student Registry Backend
//!
//! Storage-backed student registry service.
//!
//! This crate provides a small REST backend for registering students and
//! maintaining their contact details. Records live in a swappable storage
//! backend behind a repository trait, and the HTTP surface is exposed via
//! Axum.
//!
//! ## Features
//!
//! - **Registration**: Validate and persist student records
//! - **Listing**: Fetch every registered student
//! - **Contact Updates**: Replace a student's contact number by roll number
//! - **Deletion**: Remove a student by roll number
//! - **HTTP API**: RESTful endpoints with CORS, compression, and request tracing
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Core student record types shared across layers
//! - [`db`]: Database operations, repository pattern, and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
