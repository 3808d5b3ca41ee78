use crate::domain::model::Appointment;
use crate::domain::ports::{AppointmentStore, Storage};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        Ok(tokio::fs::read(full_path).await?)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    async fn exists(&self, path: &str) -> bool {
        tokio::fs::try_exists(self.base_path.join(path))
            .await
            .unwrap_or(false)
    }
}

pub const APPOINTMENTS_FILE: &str = "appointments.json";

/// Appointment collection kept as one JSON array document.
#[derive(Debug, Clone)]
pub struct JsonAppointmentStore<S: Storage> {
    storage: S,
}

impl<S: Storage> JsonAppointmentStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: Storage> AppointmentStore for JsonAppointmentStore<S> {
    async fn save(&self, appointment: &Appointment) -> Result<()> {
        let mut all = self.list().await?;
        all.push(appointment.clone());
        let data = serde_json::to_vec_pretty(&all)?;
        self.storage.write_file(APPOINTMENTS_FILE, &data).await?;
        tracing::debug!("Stored appointment #{} for {}", all.len(), appointment.patient_name);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Appointment>> {
        if !self.storage.exists(APPOINTMENTS_FILE).await {
            return Ok(Vec::new());
        }
        let data = self.storage.read_file(APPOINTMENTS_FILE).await?;
        Ok(serde_json::from_slice(&data)?)
    }
}
