//! # Site Configuration Service
//!
//! Exposes the [`SiteConfig`](common::model::site_config::SiteConfig) the
//! server was started with, so the browser application can build its lead
//! pipelines without baking the intake endpoint into the WASM bundle.
//!
//! ## Sub-modules:
//! - `get`: Serializes the shared configuration.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for configuration endpoints.
const API_PATH: &str = "/api/config";

/// Configures and returns the Actix `Scope` for the configuration routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/config`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the site configuration as JSON: intake
///       endpoint, timings, timezone, contact phone and the form variants.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::model::site_config::SiteConfig;

    #[actix_web::test]
    async fn serves_the_shared_configuration() {
        let site = SiteConfig {
            endpoint_url: "https://intake.example/exec".to_string(),
            ..SiteConfig::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(site.clone()))
                .service(super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: SiteConfig = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, site);
    }

    #[actix_web::test]
    async fn responses_are_not_cached() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(SiteConfig::default()))
                .service(super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("cache-control").unwrap(),
            "no-store"
        );
    }
}
