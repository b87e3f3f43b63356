//! Form submission to the spreadsheet script.
//!
//! The script takes everything as GET query parameters: `action` naming the
//! form, the form's own fields, and `callback`. It answers with JSONP,
//! `handleResponse({"success":true})`, or with bare JSON.

use crate::{FetchClient, FetchError, SubmitError};
use async_trait::async_trait;
use mickeys_commerce::forms::FormPayload;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Script the site has always submitted to.
pub const DEFAULT_SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbxawihDVdy_QX_xZHONC474V9yNQ4OMm9SSZx4G5VAUYCXwUQBEvDiExMDYdmC9Bdg/exec";

/// JSONP callback name the script wraps its answer in.
pub const CALLBACK_NAME: &str = "handleResponse";

/// The script's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
}

/// What happened to a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The script accepted the form.
    Accepted,
    /// Nothing was sent; this is the URL that would have been requested.
    DryRun { url: String },
}

/// Anything that can take a validated form.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&self, payload: &(dyn FormPayload + Sync)) -> Result<Submission, SubmitError>;
}

/// The live script endpoint.
#[derive(Debug, Clone)]
pub struct ScriptEndpoint {
    client: FetchClient,
    url: Url,
}

impl ScriptEndpoint {
    pub fn new(client: FetchClient, url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Full request URL for a payload. Does not validate.
    pub fn submission_url<P: FormPayload + ?Sized>(&self, payload: &P) -> Url {
        build_url(&self.url, payload)
    }
}

#[async_trait]
impl FormSubmitter for ScriptEndpoint {
    async fn submit(&self, payload: &(dyn FormPayload + Sync)) -> Result<Submission, SubmitError> {
        payload.validate()?;

        let url = self.submission_url(payload);
        info!(action = payload.action(), "Submitting form");
        let response = self.client.get(url.as_str()).await?.error_for_status()?;
        let receipt = parse_receipt(&response.text()?)?;

        if !receipt.success {
            warn!(action = payload.action(), "Submission rejected");
            return Err(SubmitError::Rejected);
        }
        info!(action = payload.action(), "Submission accepted");
        Ok(Submission::Accepted)
    }
}

/// Validates and renders the request URL without sending anything.
#[derive(Debug, Clone)]
pub struct DryRunSubmitter {
    url: Url,
}

impl DryRunSubmitter {
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(Self { url })
    }
}

#[async_trait]
impl FormSubmitter for DryRunSubmitter {
    async fn submit(&self, payload: &(dyn FormPayload + Sync)) -> Result<Submission, SubmitError> {
        payload.validate()?;
        let url = build_url(&self.url, payload);
        info!(action = payload.action(), "Dry run; not submitting");
        Ok(Submission::DryRun {
            url: url.to_string(),
        })
    }
}

fn build_url<P: FormPayload + ?Sized>(base: &Url, payload: &P) -> Url {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("action", payload.action());
        for (key, value) in payload.to_params() {
            query.append_pair(key, &value);
        }
        query.append_pair("callback", CALLBACK_NAME);
    }
    url
}

/// Read a receipt from a JSONP or plain JSON body.
pub fn parse_receipt(body: &str) -> Result<SubmissionReceipt, FetchError> {
    let json = unwrap_jsonp(body.trim());
    serde_json::from_str(json).map_err(|e| FetchError::ParseError(format!("{}: {}", e, body)))
}

/// Strip `callback(...)` and a trailing semicolon, if present.
fn unwrap_jsonp(body: &str) -> &str {
    let body = body.trim_end_matches(';').trim_end();
    match (body.find('('), body.ends_with(')')) {
        (Some(open), true) if !body.starts_with('{') => &body[open + 1..body.len() - 1],
        _ => body,
    }
}

/// The script reports success as a boolean, but any truthy JSON counts.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde_json::Value;
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
