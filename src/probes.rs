//! One-shot HTTP probes for the demo server's echo endpoints.
//!
//! Each probe is a single request/print sequence: build one request, send
//! it, check the status, print the reply. No retries, no shared client.

use std::path::Path;

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::ProbeError;
use crate::endpoint::Endpoint;
use crate::proto;
use crate::proto::EchoPayload;

const JSON_PATH: &str = "/";
const MULTIPART_PATH: &str = "/multipart";
const PROTOBUF_PATH: &str = "/";

/// POST a small JSON document to the echo endpoint and pretty-print the
/// reply. A non-JSON reply body prints as `null`.
///
/// # Errors
///
/// Returns [`ProbeError::Http`] when the request fails and
/// [`ProbeError::Status`] on a non-2xx reply.
pub async fn json_echo(endpoint: &Endpoint, name: &str, number: i32) -> Result<(), ProbeError> {
    let url = endpoint.http_url(JSON_PATH);
    let payload = json!({ "name": name, "number": number });
    info!(%url, "json: sending payload");

    let response = reqwest::Client::new()
        .post(&url)
        .json(&payload)
        .send()
        .await?;
    debug!(status = response.status().as_u16(), "json: reply received");
    let body = read_success(response).await?;

    let value: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// POST a multipart form holding a text part and a JSON part, plus the given
/// file when one is named, then print the reply body.
///
/// # Errors
///
/// Returns [`ProbeError::File`] when the named file cannot be read (before
/// any request is made), [`ProbeError::Http`] when the request fails, and
/// [`ProbeError::Status`] on a non-2xx reply.
pub async fn multipart_upload(endpoint: &Endpoint, file: Option<&Path>) -> Result<(), ProbeError> {
    let passed = multipart::Part::text(json!({ "passed": true }).to_string())
        .mime_str("application/json")?;
    let mut form = multipart::Form::new()
        .text("text", "test")
        .part("json", passed);
    if let Some(path) = file {
        form = form.part("file", file_part(path)?);
    }

    let url = endpoint.http_url(MULTIPART_PATH);
    info!(%url, "multipart: uploading form");

    let response = reqwest::Client::new()
        .post(&url)
        .multipart(form)
        .send()
        .await?;
    let status = response.status();
    let body = read_success(response).await?;

    if !body.is_empty() {
        println!("{body}");
    }
    eprintln!("Upload accepted with HTTP {status}");
    Ok(())
}

/// POST a protobuf-encoded payload to the binary echo endpoint, decode the
/// echoed bytes, and print the decoded message.
///
/// # Errors
///
/// Returns [`ProbeError::Http`] when the request fails,
/// [`ProbeError::Status`] on a non-2xx reply, and [`ProbeError::Decode`]
/// when the reply bytes are not a valid payload.
pub async fn protobuf_echo(endpoint: &Endpoint, number: i32, name: &str) -> Result<(), ProbeError> {
    let payload = EchoPayload {
        number,
        name: name.to_owned(),
    };
    let url = endpoint.http_url(PROTOBUF_PATH);
    info!(%url, "protobuf: sending payload");

    let response = reqwest::Client::new()
        .post(&url)
        .header(CONTENT_TYPE, "application/protobuf")
        .body(proto::encode_payload(&payload))
        .send()
        .await?;
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(ProbeError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let reply = proto::decode_payload(&body)?;
    debug!(bytes = body.len(), "protobuf: reply decoded");
    println!("{reply:?}");
    Ok(())
}

/// Read the reply body, mapping a non-2xx status to [`ProbeError::Status`].
async fn read_success(response: reqwest::Response) -> Result<String, ProbeError> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(ProbeError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// Build the optional upload part from a local file, read in full up front.
fn file_part(path: &Path) -> Result<multipart::Part, ProbeError> {
    let bytes = std::fs::read(path).map_err(|source| ProbeError::File {
        path: path.display().to_string(),
        source,
    })?;
    let name = path.file_name().map_or_else(
        || "upload".to_owned(),
        |name| name.to_string_lossy().into_owned(),
    );
    Ok(multipart::Part::bytes(bytes).file_name(name))
}

#[cfg(test)]
#[path = "probes_test.rs"]
mod tests;
