// Per-state layout overrides, keyed by widget id
use super::widget::{GridPosition, WidgetId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type WidgetLayouts = HashMap<WidgetId, WidgetLayout>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetLayout {
    #[serde(flatten)]
    pub position: GridPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_order: Option<i32>,
}

impl WidgetLayout {
    pub fn new(position: GridPosition) -> Self {
        Self {
            position,
            mobile_height: None,
            mobile_order: None,
        }
    }
}
