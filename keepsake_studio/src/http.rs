// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTTP client for the Keepsake generation backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use ureq::Agent;

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::service::{ImageGenerator, TextGenerator, VideoGenerator};

/// Talks to the backend's text, image and video endpoints over HTTP.
///
/// One [`ureq::Agent`] is shared by all requests, so connections are pooled
/// across the requests of a draft round.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    agent: Agent,
    text_url: String,
    image_url: String,
    video_url: String,
    image_model: Option<String>,
    video_model: Option<String>,
    max_response_bytes: u64,
}

#[derive(Serialize)]
struct PromptRequest<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
}

impl HttpGenerator {
    /// Builds a client for the endpoints in `config`.
    #[must_use]
    pub fn new(config: &GenerationConfig) -> Self {
        let agent_config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout()))
            .build();
        Self {
            agent: Agent::new_with_config(agent_config),
            text_url: config.text_url(),
            image_url: config.image_url(),
            video_url: config.video_url(),
            image_model: config.image_model.clone(),
            video_model: config.video_model.clone(),
            max_response_bytes: config.max_response_bytes,
        }
    }

    fn post(&self, url: &str, request: &PromptRequest<'_>) -> Result<String, GenerationError> {
        let transport = |err: ureq::Error| GenerationError::Transport {
            endpoint: url.to_owned(),
            message: err.to_string(),
        };
        let body =
            serde_json::to_string(request).map_err(|e| GenerationError::Decode(e.to_string()))?;

        debug!(endpoint = url, "posting generation request");
        let mut response = self
            .agent
            .post(url)
            .header("Content-Type", "application/json")
            .send(body.as_str())
            .map_err(transport)?;
        let status = response.status();
        let text = response
            .body_mut()
            .with_config()
            .limit(self.max_response_bytes)
            .read_to_string()
            .map_err(transport)?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                endpoint: url.to_owned(),
                status: status.as_u16(),
                detail: error_detail(&text),
            });
        }
        Ok(text)
    }
}

impl TextGenerator for HttpGenerator {
    fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = self.post(&self.text_url, &PromptRequest {
            prompt,
            model: None,
            image_url: None,
        })?;
        parse_text(&body)
    }
}

impl ImageGenerator for HttpGenerator {
    fn generate_images(&self, prompt: &str) -> Result<Vec<String>, GenerationError> {
        let body = self.post(&self.image_url, &PromptRequest {
            prompt,
            model: self.image_model.as_deref(),
            image_url: None,
        })?;
        parse_images(&body)
    }
}

impl VideoGenerator for HttpGenerator {
    fn generate_video(
        &self,
        prompt: &str,
        image_url: Option<&str>,
    ) -> Result<String, GenerationError> {
        let body = self.post(&self.video_url, &PromptRequest {
            prompt,
            model: self.video_model.as_deref(),
            image_url,
        })?;
        parse_video(&body)
    }
}

#[derive(Deserialize)]
struct TextResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    text: Option<String>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ImageResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
    url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
    url: Option<String>,
}

impl Prediction {
    fn into_uri(self) -> Option<String> {
        match (self.bytes_base64_encoded, self.url) {
            (Some(bytes), _) if !bytes.is_empty() => {
                let mime = self.mime_type.as_deref().unwrap_or("image/png");
                Some(format!("data:{mime};base64,{bytes}"))
            }
            (_, Some(url)) if !url.is_empty() => Some(url),
            _ => None,
        }
    }
}

/// Extracts the completion from a text endpoint response.
///
/// Accepts the candidate shape (`candidates[0].content.parts[0].text`) and a
/// plain `{ "text": ... }` body. Blank text counts as empty.
pub fn parse_text(body: &str) -> Result<String, GenerationError> {
    let response: TextResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Decode(e.to_string()))?;
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text);
    candidate
        .or(response.text)
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .ok_or(GenerationError::EmptyResult("text"))
}

/// Extracts image URIs from an image endpoint response.
///
/// Each prediction contributes one URI: inline base64 bytes become a `data:`
/// URL, otherwise its `url` is used. A top-level `url` is only consulted when
/// no prediction was usable. An empty list is not an error here.
pub fn parse_images(body: &str) -> Result<Vec<String>, GenerationError> {
    let response: ImageResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Decode(e.to_string()))?;
    let mut uris: Vec<String> = response
        .predictions
        .into_iter()
        .filter_map(Prediction::into_uri)
        .collect();
    if uris.is_empty() {
        uris.extend(response.url.filter(|u| !u.is_empty()));
    }
    Ok(uris)
}

#[derive(Deserialize)]
struct VideoResponse {
    url: Option<String>,
}

/// Extracts the video URL from a video endpoint response (`{ "url": ... }`).
pub fn parse_video(body: &str) -> Result<String, GenerationError> {
    let response: VideoResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Decode(e.to_string()))?;
    response
        .url
        .filter(|u| !u.is_empty())
        .ok_or(GenerationError::EmptyResult("video"))
}

fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["detail", "error", "message"]
        .into_iter()
        .find_map(|key| match value.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Serves one canned response on a local port and returns the request
    /// body it received.
    fn serve_once(status: &str, body: &str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':')
                    && name.eq_ignore_ascii_case("content-length")
                {
                    content_length = value.trim().parse().unwrap();
                }
            }
            let mut request = vec![0; content_length];
            reader.read_exact(&mut request).unwrap();
            // The client may hang up early once its limit is hit.
            let _ = reader.get_mut().write_all(response.as_bytes());
            String::from_utf8(request).unwrap()
        });
        (base_url, handle)
    }

    fn generator(base_url: String) -> HttpGenerator {
        HttpGenerator::new(&GenerationConfig {
            base_url,
            timeout_secs: 5,
            ..GenerationConfig::default()
        })
    }

    #[test]
    fn error_status_surfaces_detail() {
        let (base_url, server) = serve_once(
            "500 Internal Server Error",
            r#"{"detail":"model overloaded"}"#,
        );
        let err = generator(base_url.clone())
            .generate_images("a party")
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::Status {
                endpoint: format!("{base_url}/api/ai/generate/image"),
                status: 500,
                detail: Some("model overloaded".into()),
            }
        );
        assert_eq!(server.join().unwrap(), r#"{"prompt":"a party"}"#);
    }

    #[test]
    fn video_request_carries_the_first_frame() {
        let (base_url, server) = serve_once("200 OK", r#"{"url":"https://cdn.example/v.mp4"}"#);
        let url = generator(base_url)
            .generate_video("they cheer", Some("https://cdn.example/1.webp"))
            .unwrap();
        assert_eq!(url, "https://cdn.example/v.mp4");
        assert_eq!(
            server.join().unwrap(),
            r#"{"prompt":"they cheer","image_url":"https://cdn.example/1.webp"}"#
        );
    }

    #[test]
    fn oversized_response_is_a_transport_error() {
        let body = format!(
            r#"{{"predictions":[{{"bytesBase64Encoded":"{}"}}]}}"#,
            "A".repeat(4096)
        );
        let (base_url, server) = serve_once("200 OK", &body);
        let generator = HttpGenerator::new(&GenerationConfig {
            base_url,
            timeout_secs: 5,
            max_response_bytes: 1024,
            ..GenerationConfig::default()
        });
        assert!(matches!(
            generator.generate_images("p"),
            Err(GenerationError::Transport { .. })
        ));
        server.join().unwrap();
    }

    #[test]
    fn video_url_is_required() {
        assert_eq!(
            parse_video(r#"{"url":"https://cdn.example/v.mp4"}"#).unwrap(),
            "https://cdn.example/v.mp4"
        );
        assert_eq!(
            parse_video(r#"{"url":""}"#),
            Err(GenerationError::EmptyResult("video"))
        );
    }

    #[test]
    fn candidate_text_is_extracted() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  POV shot of a party \n"}]}}]}"#;
        assert_eq!(parse_text(body).unwrap(), "POV shot of a party");
        assert_eq!(parse_text(r#"{"text":"plain"}"#).unwrap(), "plain");
    }

    #[test]
    fn missing_text_is_empty_not_decode() {
        assert_eq!(
            parse_text(r#"{"candidates":[]}"#),
            Err(GenerationError::EmptyResult("text"))
        );
        assert_eq!(
            parse_text(r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#),
            Err(GenerationError::EmptyResult("text"))
        );
        assert!(matches!(
            parse_text("<html>"),
            Err(GenerationError::Decode(_))
        ));
    }

    #[test]
    fn base64_predictions_become_data_urls() {
        let body = r#"{"predictions":[
            {"bytesBase64Encoded":"iVBORw0"},
            {"bytesBase64Encoded":"UklGR","mimeType":"image/webp"}
        ]}"#;
        assert_eq!(
            parse_images(body).unwrap(),
            [
                "data:image/png;base64,iVBORw0",
                "data:image/webp;base64,UklGR"
            ]
        );
    }

    #[test]
    fn url_predictions_do_not_duplicate_top_level_url() {
        let body = r#"{
            "url": "https://cdn.example/a.webp",
            "predictions": [{"bytesBase64Encoded": null, "url": "https://cdn.example/a.webp"}]
        }"#;
        assert_eq!(parse_images(body).unwrap(), ["https://cdn.example/a.webp"]);
        assert_eq!(
            parse_images(r#"{"url":"https://cdn.example/b.webp"}"#).unwrap(),
            ["https://cdn.example/b.webp"]
        );
        assert!(parse_images(r#"{"predictions":[{}]}"#).unwrap().is_empty());
    }

    #[test]
    fn error_detail_prefers_detail() {
        assert_eq!(
            error_detail(r#"{"detail":"model overloaded","message":"x"}"#).as_deref(),
            Some("model overloaded")
        );
        assert_eq!(
            error_detail(r#"{"error":{"code":7}}"#).as_deref(),
            Some(r#"{"code":7}"#)
        );
        assert_eq!(error_detail(r#"{"detail":null}"#), None);
        assert_eq!(error_detail("Bad Gateway"), None);
    }

    #[test]
    fn status_error_message() {
        let err = GenerationError::Status {
            endpoint: "http://localhost:8000/api/ai/generate/image".into(),
            status: 500,
            detail: Some("model overloaded".into()),
        };
        assert_eq!(
            err.to_string(),
            "http://localhost:8000/api/ai/generate/image returned HTTP 500: model overloaded"
        );
    }
}
