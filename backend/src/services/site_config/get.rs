//! # Site Configuration Retrieval
//!
//! Backend logic for the `GET /api/config` endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` is the Actix handler. The request carries no
//!     parameters.
//!
//! 2.  **Shared State**: The `SiteConfig` was loaded and validated once at
//!     startup (see `config.rs`) and registered as `web::Data`; nothing is read
//!     from disk or the environment per request.
//!
//! 3.  **HTTP Response**: The configuration is serialized to JSON and returned
//!     with `200 OK`. `Cache-Control: no-store` keeps browsers from holding on
//!     to an old intake endpoint after a restart with new settings.

use actix_web::{web, HttpResponse, Responder};
use common::model::site_config::SiteConfig;

/// Returns the site configuration as JSON.
pub async fn process(site: web::Data<SiteConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(site.get_ref())
}
