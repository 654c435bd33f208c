//! Core components of the `indices-rs` crate.
//!
//! This module contains the foundational building blocks:
//! - The [`MassiveClient`] and its builder.
//! - The primary [`IndicesError`] type.
//! - The [`NewsService`] seam the aggregator is written against.

/// The API client (`MassiveClient`), builder, and cache configuration.
pub mod client;
/// The primary error type (`IndicesError`) for the crate.
pub mod error;
/// Service traits for abstracting the upstream news API.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

pub use client::{CacheMode, MassiveClient, MassiveClientBuilder};
pub use error::IndicesError;
pub use services::{NewsFuture, NewsQuery, NewsService};
