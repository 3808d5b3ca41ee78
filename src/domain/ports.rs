use crate::domain::api::{
    ChatReply, ChatRequest, Diagnosis, DietPlan, DietRequest, MythFeed, ReportAnalysis,
    SchemeRecommendation, SchemeRequest, SymptomReport,
};
use crate::domain::model::{Appointment, SmsMessage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
    fn backend_headers(&self) -> &HashMap<String, String>;
    fn request_timeout(&self) -> Duration;
    fn storage_path(&self) -> &str;
    fn notifier_url(&self) -> Option<&str>;
}

/// The AI backend. One round trip per call, no retries.
#[async_trait]
pub trait HealthBackend: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply>;
    async fn diet_plan(&self, request: &DietRequest) -> Result<DietPlan>;
    async fn detect_disease(&self, report: &SymptomReport) -> Result<Diagnosis>;
    async fn recommend_scheme(&self, request: &SchemeRequest) -> Result<SchemeRecommendation>;
    async fn analyze_report(&self, file: &Path) -> Result<ReportAnalysis>;
    async fn myths(&self) -> Result<MythFeed>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_sms(&self, message: &SmsMessage) -> Result<()>;
}

pub trait AppointmentStore: Send + Sync {
    fn save(
        &self,
        appointment: &Appointment,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Appointment>>> + Send;
}
