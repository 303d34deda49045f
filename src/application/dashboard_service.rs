// Dashboard service - Use case for turning a stored dashboard into render output
use crate::application::dashboard_widgets::DashboardWidgets;
use crate::domain::dashboard::{DashboardDefinition, DashboardView};
use crate::infrastructure::config::AppConfig;
use crate::presentation::grid_item::DashboardRender;

#[derive(Debug, Clone)]
pub struct DashboardService {
    app_config: AppConfig,
}

impl DashboardService {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }

    /// Host view for a dashboard, with display flags taken from settings
    pub fn view_for(&self, definition: &DashboardDefinition) -> DashboardView {
        let mut view = DashboardView::new(definition.grid.clone());
        view.mobile_autofill_height = self.app_config.mobile_autofill_height;
        view.autofill_height = self.app_config.autofill_height;
        if let Some(width) = self.app_config.viewport_width {
            view.update_viewport(width);
        }
        view
    }

    pub fn render(&self, definition: DashboardDefinition) -> DashboardRender {
        let mut view = self.view_for(&definition);
        let mut widgets = DashboardWidgets::new();
        widgets.set_widgets(
            &mut view,
            definition.data.widgets,
            definition.data.widget_layouts.as_ref(),
        );

        tracing::info!(
            "Laid out {} widgets over {} rows (mobile: {})",
            widgets.len(),
            view.grid.max_rows,
            view.is_mobile_size
        );

        DashboardRender::build(definition.title, &widgets, &view)
    }
}
