//! Shared request/parse plumbing for the public ticker sources.

use reqwest::RequestBuilder;
use serde_json::Value;

use crate::constants::sources::MAX_ERROR_BODY_CHARS;
use crate::error::SourceError;

use super::traits::SourceResult;

/// Send a GET and decode the body as JSON, treating any non-2xx as a failure.
pub async fn get_json(request: RequestBuilder) -> SourceResult<Value> {
    let resp = request.send().await?;
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(SourceError::Http {
            status: status.as_u16(),
            body: truncate_body(&text),
        });
    }
    Ok(serde_json::from_str(&text)?)
}

/// Read a price that may arrive either as a JSON number or a decimal string.
pub fn parse_price(source_name: &str, field: &str, value: Option<&Value>) -> SourceResult<f64> {
    let value = value.ok_or_else(|| SourceError::MissingField {
        source_name: source_name.to_string(),
        field: field.to_string(),
    })?;

    let invalid = || SourceError::InvalidPrice {
        source_name: source_name.to_string(),
        value: value.to_string(),
    };

    match value {
        Value::Number(n) => n.as_f64().ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        body.to_string()
    } else {
        let mut cut: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        cut.push_str("...");
        cut
    }
}
