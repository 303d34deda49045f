// Render output - grid items and display properties for the grid renderer
use crate::application::dashboard_widget::{DashboardWidget, WidgetHandle};
use crate::application::dashboard_widgets::DashboardWidgets;
use crate::application::widget_context::{WidgetAction, WidgetHeaderAction};
use crate::domain::dashboard::{DashboardView, GridOptions};
use crate::domain::widget::{StyleMap, WidgetId, WidgetType};
use serde::Serialize;

/// Placement in the shape the grid renderer expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    pub x: u32,
    pub y: u32,
    pub cols: u32,
    pub rows: u32,
    pub widget_order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetView {
    pub handle: WidgetHandle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<WidgetId>,
    #[serde(rename = "type")]
    pub kind: WidgetType,
    #[serde(flatten)]
    pub item: GridItem,
    pub is_fullscreen: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub show_title: bool,
    pub title_style: StyleMap,
    pub title_icon: String,
    pub show_title_icon: bool,
    pub title_icon_style: StyleMap,
    pub drop_shadow: bool,
    pub enable_fullscreen: bool,
    pub has_timewindow: bool,
    pub has_aggregation: bool,
    pub style: StyleMap,
    pub has_widget_title_template: bool,
    pub widget_title_template: String,
    pub show_widget_title_panel: bool,
    pub show_widget_actions: bool,
    pub custom_header_actions: Vec<WidgetHeaderAction>,
    pub widget_actions: Vec<WidgetAction>,
}

impl WidgetView {
    pub fn new(widget: &DashboardWidget, view: &DashboardView) -> Self {
        let params = widget.params().clone();
        Self {
            handle: widget.handle(),
            id: widget.id().cloned(),
            kind: widget.widget().kind,
            item: GridItem {
                x: widget.x(),
                y: widget.y(),
                cols: widget.cols(),
                rows: widget.rows(view),
                widget_order: widget.widget_order(),
            },
            is_fullscreen: widget.is_fullscreen,
            title: params.title,
            show_title: params.show_title,
            title_style: params.title_style,
            title_icon: params.title_icon,
            show_title_icon: params.show_title_icon,
            title_icon_style: params.title_icon_style,
            drop_shadow: params.drop_shadow,
            enable_fullscreen: params.enable_fullscreen,
            has_timewindow: params.has_timewindow,
            has_aggregation: params.has_aggregation,
            style: params.style,
            has_widget_title_template: params.has_widget_title_template,
            widget_title_template: params.widget_title_template,
            show_widget_title_panel: params.show_widget_title_panel,
            show_widget_actions: params.show_widget_actions,
            custom_header_actions: params.custom_header_actions,
            widget_actions: params.widget_actions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRender {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub grid: GridOptions,
    pub is_mobile_size: bool,
    pub widgets: Vec<WidgetView>,
}

impl DashboardRender {
    pub fn build(title: Option<String>, widgets: &DashboardWidgets, view: &DashboardView) -> Self {
        Self {
            title,
            grid: view.grid.clone(),
            is_mobile_size: view.is_mobile_size,
            widgets: widgets.iter().map(|w| WidgetView::new(w, view)).collect(),
        }
    }
}
