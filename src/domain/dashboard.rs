// Dashboard domain model - grid options, display mode and persisted widget set
use super::layout::WidgetLayouts;
use super::widget::Widget;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_COLS: u32 = 24;
pub const DEFAULT_MAX_COLS: u32 = 3000;
pub const DEFAULT_MARGIN: u32 = 10;
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 960;

/// Options handed to the grid renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOptions {
    pub min_cols: u32,
    pub max_cols: u32,
    pub min_rows: u32,
    /// Row bound; grown by the widget collection so all content fits
    pub max_rows: u32,
    pub margin: u32,
    pub mobile_breakpoint: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            min_cols: DEFAULT_MIN_COLS,
            max_cols: DEFAULT_MAX_COLS,
            min_rows: 0,
            max_rows: 0,
            margin: DEFAULT_MARGIN,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

/// Host dashboard state read by widget presenters.
///
/// Presenters and collections borrow this per call and never keep it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardView {
    pub grid: GridOptions,
    pub is_mobile_size: bool,
    pub mobile_autofill_height: bool,
    pub autofill_height: bool,
}

impl DashboardView {
    pub fn new(grid: GridOptions) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    /// Switch mobile mode on or off from the current viewport width
    pub fn update_viewport(&mut self, width: u32) {
        self.is_mobile_size = width < self.grid.mobile_breakpoint;
    }
}

/// Widgets plus their optional layout overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetsData {
    #[serde(default)]
    pub widgets: Vec<Widget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_layouts: Option<WidgetLayouts>,
}

/// A dashboard document as persisted on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDefinition {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub grid: GridOptions,
    #[serde(flatten)]
    pub data: WidgetsData,
}
