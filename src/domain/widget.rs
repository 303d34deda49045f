// Widget domain model - persisted tile configuration
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form CSS-like style bag (`{"border": "1px solid"}`)
pub type StyleMap = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(pub String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    Timeseries,
    Latest,
    Rpc,
    Alarm,
    Static,
}

/// Column/row placement and size in grid units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPosition {
    #[serde(default)]
    pub col: u32,
    #[serde(default)]
    pub row: u32,
    #[serde(default)]
    pub size_x: u32,
    #[serde(default)]
    pub size_y: u32,
}

impl GridPosition {
    pub fn new(col: u32, row: u32, size_x: u32, size_y: u32) -> Self {
        Self {
            col,
            row,
            size_x,
            size_y,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_title: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_style: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_title_icon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_style: Option<StyleMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_shadow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_fullscreen: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_dashboard_timewindow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_timewindow: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_height: Option<u32>,
    /// Negative values mean "no explicit order"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WidgetId>,
    #[serde(rename = "type")]
    pub kind: WidgetType,
    #[serde(flatten)]
    pub position: GridPosition,
    #[serde(default)]
    pub config: WidgetConfig,
}

impl Widget {
    pub fn new(kind: WidgetType, position: GridPosition) -> Self {
        Self {
            id: None,
            kind,
            position,
            config: WidgetConfig::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(WidgetId::new(id));
        self
    }

    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }
}
