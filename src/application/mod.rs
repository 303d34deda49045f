// Application layer - widget presenters, the dashboard collection and use cases
pub mod dashboard_service;
pub mod dashboard_widget;
pub mod dashboard_widgets;
pub mod widget_context;
pub mod widget_params;
