//! Shared domain logic for the landing page.
//!
//! Everything in this crate is target-independent: the `frontend` crate plugs
//! browser implementations into the traits defined here, and the `backend`
//! crate serves the [`model::site_config::SiteConfig`] consumed by both.

pub mod analytics;
pub mod lead;
pub mod model;
pub mod pipeline;
pub mod ui;
