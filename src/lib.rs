// Grid dashboard widget presenters - layered as domain / application / infrastructure / presentation
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::dashboard_widget::{DashboardWidget, WidgetHandle};
pub use application::dashboard_widgets::DashboardWidgets;
pub use domain::dashboard::{DashboardView, GridOptions};
pub use domain::layout::{WidgetLayout, WidgetLayouts};
pub use domain::widget::{GridPosition, Widget, WidgetConfig, WidgetId, WidgetType};
