//! Maintenance utilities for the exportarr repository.
//!
//! - [`projector`] shrinks a Sonarr `/api/v3/series` dump into the test fixture
//!   the collectors are tested against.
//! - [`tags`] bumps the container image tag referenced by the docs and the
//!   deployment examples.

pub mod config;
pub mod error;
pub mod fixture;
pub mod projector;
pub mod rewrite;
pub mod tags;
