pub mod calendar;
pub mod chat;
pub mod consent;
pub mod cycle;
pub mod directory;
pub mod forms;
pub mod report;
pub mod schemes;
pub mod tracker;

pub use crate::domain::model::{CycleParameters, DayClassification, ProjectedInterval};
pub use crate::domain::ports::{AppointmentStore, ConfigProvider, HealthBackend, Notifier, Storage};
pub use crate::utils::error::Result;
