use std::{future::Future, time::Duration};

use reqwest::{header, Client};
use serde::Deserialize;

use crate::{domain::PasswordUpdate, errors::SubmitError, Result};

pub const DEFAULT_ENDPOINT_PATH: &str = "/api/etudiant/profile/password";

/// Authenticates the old password and stores the new one.
pub trait PasswordEndpoint {
    fn update_password(
        &self,
        update: &PasswordUpdate,
    ) -> impl Future<Output = Result<EndpointReply, SubmitError>> + Send;
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointReply {
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PasswordClient {
    http_client: Client,
    url: String,
}

impl PasswordClient {
    pub fn new(base_url: &str, endpoint_path: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            url: build_url(base_url, endpoint_path),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PasswordEndpoint for PasswordClient {
    #[tracing::instrument(
        name = "Calling the password update endpoint",
        skip(self, update),
        fields(url = %self.url)
    )]
    async fn update_password(&self, update: &PasswordUpdate) -> Result<EndpointReply, SubmitError> {
        let response = self
            .http_client
            .post(&self.url)
            .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .json(update)
            .send()
            .await
            .map_err(SubmitError::transport)?;

        let status = response.status();
        // a body that cannot be read means no usable response was obtained
        let body = response.text().await.map_err(SubmitError::transport)?;
        let message = reply_message(&body);
        tracing::debug!(status = status.as_u16(), "Password update endpoint replied");

        if status.is_success() {
            Ok(EndpointReply { message })
        } else {
            Err(SubmitError::RemoteRejection {
                status: status.as_u16(),
                message,
            })
        }
    }
}

// empty, non-JSON, and blank messages all count as absent
fn reply_message(body: &str) -> Option<String> {
    serde_json::from_str::<EndpointReply>(body)
        .ok()
        .and_then(|reply| reply.message)
        .filter(|message| !message.is_empty())
}

fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
