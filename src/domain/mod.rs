// Domain layer - persisted dashboard and widget models
pub mod dashboard;
pub mod layout;
pub mod widget;
