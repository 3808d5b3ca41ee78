// Adapters layer: concrete implementations for external systems (http backend, sms webhook, storage).

pub mod http;
pub mod notifier;
pub mod storage;
