//! Delivery over `fetch` in `no-cors` mode.
//!
//! The browser hands back an opaque response for cross-origin `no-cors`
//! requests, so there is nothing to inspect: the request either leaves or the
//! network layer rejects it. An `AbortController` is tied to the lifetime of
//! the dispatch future so the pipeline's timeout actually cancels the fetch.

use async_trait::async_trait;
use common::lead::DeliveryBody;
use common::pipeline::{DeliveryRequest, Transport, TransportError};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, FormData, RequestMode};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn dispatch(&self, request: DeliveryRequest) -> Result<(), TransportError> {
        let controller = AbortController::new().map_err(|e| TransportError::Request(js_error(&e)))?;
        let abort = AbortOnDrop(Some(controller.clone()));

        let mut builder = Request::post(&request.endpoint)
            .mode(RequestMode::NoCors)
            .abort_signal(Some(&controller.signal()));
        if let Some(content_type) = request.body.content_type() {
            builder = builder.header("Content-Type", content_type);
        }

        let prepared = match request.body {
            DeliveryBody::Json(json) => builder.body(json),
            DeliveryBody::Form(fields) => builder.body(form_data(&fields)?),
        }
        .map_err(|e| TransportError::Request(e.to_string()))?;

        prepared
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        abort.disarm();
        Ok(())
    }
}

fn form_data(fields: &[(&'static str, String)]) -> Result<FormData, TransportError> {
    let data = FormData::new().map_err(|e| TransportError::Request(js_error(&e)))?;
    for (name, value) in fields {
        data.append_with_str(name, value)
            .map_err(|e| TransportError::Request(js_error(&e)))?;
    }
    Ok(data)
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Aborts the fetch unless disarmed after it completed.
struct AbortOnDrop(Option<AbortController>);

impl AbortOnDrop {
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = self.0.take() {
            controller.abort();
        }
    }
}
