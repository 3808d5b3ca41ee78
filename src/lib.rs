pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::HealthConfig;

pub use crate::adapters::http::HttpBackend;
pub use crate::adapters::notifier::WebhookNotifier;
pub use crate::adapters::storage::{JsonAppointmentStore, LocalStorage};
pub use crate::app::BookingService;
pub use crate::core::cycle::{classify, CycleProjector};
pub use crate::domain::model::{CycleParameters, DayClassification, ProjectedInterval};
pub use crate::utils::error::{HealthError, Result};
