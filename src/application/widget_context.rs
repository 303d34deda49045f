// Runtime state supplied by the widget runtime to a presenter
use serde::Serialize;

/// Action button rendered in a widget header
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetHeaderAction {
    pub name: String,
    pub display_name: String,
    pub icon: String,
    pub descriptor_id: String,
}

/// Built-in widget action (fullscreen, edit, export...)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetAction {
    pub name: String,
    pub icon: String,
    pub show: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetContext {
    /// Title resolved at runtime; wins over the configured title when non-empty
    pub widget_title: Option<String>,
    pub widget_title_template: Option<String>,
    pub hide_title_panel: bool,
    pub custom_header_actions: Vec<WidgetHeaderAction>,
    pub widget_actions: Vec<WidgetAction>,
}
