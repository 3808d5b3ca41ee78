use crate::domain::api::{
    ChatReply, ChatRequest, Diagnosis, DietPlan, DietRequest, MythFeed, ReportAnalysis,
    SchemeRecommendation, SchemeRequest, SymptomReport,
};
use crate::domain::ports::{ConfigProvider, HealthBackend};
use crate::utils::error::{HealthError, Result};
use crate::utils::validation::validate_file_extension;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const REPORT_EXTENSIONS: [&str; 3] = ["pdf", "jpg", "png"];

pub(crate) fn build_client(timeout: Duration, headers: &HashMap<String, String>) -> Result<Client> {
    let mut header_map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            HealthError::InvalidConfigValueError {
                field: "backend.headers".to_string(),
                value: key.clone(),
                reason: e.to_string(),
            }
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| HealthError::InvalidConfigValueError {
            field: format!("backend.headers.{}", key),
            value: value.clone(),
            reason: e.to_string(),
        })?;
        header_map.insert(name, value);
    }

    Ok(Client::builder()
        .timeout(timeout)
        .default_headers(header_map)
        .build()?)
}

/// Turns a response into `T`, or into the matching error variant.
pub(crate) async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
    let status = response.status();
    tracing::debug!("{} responded with {}", endpoint, status);

    let body = response.text().await?;
    if !status.is_success() {
        tracing::error!("API error response from {}: {}", endpoint, body);
        return Err(HealthError::BackendError {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            detail: body,
        });
    }

    serde_json::from_str(&body).map_err(|e| HealthError::MalformedResponse {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

/// Client for the AI backend. All routes are resolved against one base URL.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration, headers: &HashMap<String, String>) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout, headers)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.backend_url(),
            config.request_timeout(),
            config.backend_headers(),
        )
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        decode(path, response).await
    }
}

fn mime_for(file: &Path) -> &'static str {
    match file
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl HealthBackend for HttpBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        self.post_json("/chat", request).await
    }

    async fn diet_plan(&self, request: &DietRequest) -> Result<DietPlan> {
        self.post_json("/diet-plan", request).await
    }

    async fn detect_disease(&self, report: &SymptomReport) -> Result<Diagnosis> {
        self.post_json("/disease-detection", report).await
    }

    async fn recommend_scheme(&self, request: &SchemeRequest) -> Result<SchemeRecommendation> {
        self.post_json("/recommend", request).await
    }

    async fn analyze_report(&self, file: &Path) -> Result<ReportAnalysis> {
        validate_file_extension("file", file, &REPORT_EXTENSIONS)?;
        let data = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report".to_string());
        tracing::debug!("Uploading {} ({} bytes) for analysis", file_name, data.len());

        let part = Part::bytes(data).file_name(file_name).mime_str(mime_for(file))?;
        let form = Form::new().part("file", part);

        let url = self.url("/analyze-report");
        let response = self.client.post(&url).multipart(form).send().await?;
        decode("/analyze-report", response).await
    }

    async fn myths(&self) -> Result<MythFeed> {
        let url = self.url("/scrape");
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        decode("/scrape", response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn backend(server: &MockServer) -> HttpBackend {
        HttpBackend::new(&server.base_url(), Duration::from_secs(5), &HashMap::new()).unwrap()
    }

    #[test]
    fn test_url_joining() {
        let backend =
            HttpBackend::new("http://127.0.0.1:8000/", Duration::from_secs(1), &HashMap::new()).unwrap();
        assert_eq!(backend.url("/chat"), "http://127.0.0.1:8000/chat");
        assert_eq!(backend.url("recommend"), "http://127.0.0.1:8000/recommend");
    }

    #[test]
    fn test_invalid_header_is_config_error() {
        let mut headers = HashMap::new();
        headers.insert("bad header".to_string(), "x".to_string());
        let err = HttpBackend::new("http://localhost", Duration::from_secs(1), &headers).unwrap_err();
        assert!(matches!(err, HealthError::InvalidConfigValueError { .. }));
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/chat")
                .json_body(serde_json::json!({"session_id": "abc", "patient_message": "hi"}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"doctor_response": "Hello"}));
        });

        let reply = backend(&server)
            .chat(&ChatRequest {
                session_id: "abc".to_string(),
                patient_message: "hi".to_string(),
            })
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(reply.doctor_response.as_deref(), Some("Hello"));
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/diet-plan");
            then.status(422).body(r#"{"detail":"condition missing"}"#);
        });

        let err = backend(&server)
            .diet_plan(&DietRequest {
                disease_name: "Diabetes".to_string(),
                condition: String::new(),
                special_instructions: String::new(),
            })
            .await
            .unwrap_err();

        match err {
            HealthError::BackendError { endpoint, status, detail } => {
                assert_eq!(endpoint, "/diet-plan");
                assert_eq!(status, 422);
                assert!(detail.contains("condition missing"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/recommend");
            then.status(200).body("<html>oops</html>");
        });

        let err = backend(&server)
            .recommend_scheme(&SchemeRequest {
                age: 30,
                income: 10000,
                employment_type: crate::domain::api::EmploymentType::Private,
                bank_account: crate::domain::api::BankAccount::No,
                socio_status: crate::domain::api::SocioStatus::Bpl,
                family_size: 3,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, HealthError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_report_upload_rejects_unsupported_extension() {
        let server = MockServer::start();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.docx");
        std::fs::write(&path, b"data").unwrap();

        let err = backend(&server).analyze_report(&path).await.unwrap_err();
        assert!(matches!(err, HealthError::ValidationError { .. }));
    }
}
