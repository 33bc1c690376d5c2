//! Browser-side implementations of the contact workflow seams: the hosted
//! EmailJS relay over fetch, and a pacer backed by the event loop timers.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use super::{EmailRelay, Pacer, RelayConfig, RelayError, RelayResponse, TemplateParams};

const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, Default)]
pub struct EmailJsRelay {
    client: reqwest::Client,
}

impl EmailJsRelay {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

impl EmailRelay for EmailJsRelay {
    async fn send(
        &self,
        config: &RelayConfig,
        params: &TemplateParams,
    ) -> Result<RelayResponse, RelayError> {
        let body = SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: params,
        };
        let response = self
            .client
            .post(SEND_URL)
            .json(&body)
            .send()
            .await
            .map_err(|err| RelayError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        Ok(RelayResponse { status, text })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPacer;

impl Pacer for BrowserPacer {
    async fn pause(&self, dur: Duration) {
        TimeoutFuture::new(dur.as_millis() as u32).await;
    }

    fn schedule(&self, dur: Duration, f: Box<dyn FnOnce()>) {
        Timeout::new(dur.as_millis() as u32, f).forget();
    }
}
