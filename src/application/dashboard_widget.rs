// Dashboard widget presenter - grid geometry and display params for one widget
use crate::application::widget_context::WidgetContext;
use crate::application::widget_params::WidgetParams;
use crate::domain::dashboard::DashboardView;
use crate::domain::layout::WidgetLayout;
use crate::domain::widget::{GridPosition, Widget, WidgetId};
use serde::Serialize;
use std::fmt;

/// Base column count the mobile height fallback is expressed against
const MOBILE_ROW_UNITS: u64 = 24;

/// Identity of a presenter within its collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WidgetHandle(pub(crate) u64);

impl fmt::Display for WidgetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct DashboardWidget {
    handle: WidgetHandle,
    widget: Widget,
    // When present, this is the authoritative store for position and size
    layout: Option<WidgetLayout>,
    context: WidgetContext,
    params: WidgetParams,
    pub is_fullscreen: bool,
}

impl DashboardWidget {
    pub fn new(handle: WidgetHandle, widget: Widget, layout: Option<WidgetLayout>) -> Self {
        let context = WidgetContext::default();
        let params = WidgetParams::derive(widget.kind, &widget.config, &context);
        Self {
            handle,
            widget,
            layout,
            context,
            params,
            is_fullscreen: false,
        }
    }

    pub fn handle(&self) -> WidgetHandle {
        self.handle
    }

    pub fn id(&self) -> Option<&WidgetId> {
        self.widget.id.as_ref()
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn layout(&self) -> Option<&WidgetLayout> {
        self.layout.as_ref()
    }

    pub fn params(&self) -> &WidgetParams {
        &self.params
    }

    pub fn context(&self) -> &WidgetContext {
        &self.context
    }

    pub fn into_parts(self) -> (Widget, Option<WidgetLayout>) {
        (self.widget, self.layout)
    }

    /// Replace the runtime context and re-derive display params
    pub fn set_context(&mut self, context: WidgetContext) {
        self.context = context;
        self.update_widget_params();
    }

    pub fn update_widget_params(&mut self) {
        self.params = WidgetParams::derive(self.widget.kind, &self.widget.config, &self.context);
    }

    fn position(&self) -> &GridPosition {
        match &self.layout {
            Some(layout) => &layout.position,
            None => &self.widget.position,
        }
    }

    fn position_mut(&mut self) -> &mut GridPosition {
        match &mut self.layout {
            Some(layout) => &mut layout.position,
            None => &mut self.widget.position,
        }
    }

    pub fn x(&self) -> u32 {
        self.position().col
    }

    pub fn set_x(&mut self, view: &DashboardView, x: u32) {
        if !view.is_mobile_size {
            self.position_mut().col = x;
        }
    }

    pub fn y(&self) -> u32 {
        self.position().row
    }

    pub fn set_y(&mut self, view: &DashboardView, y: u32) {
        if !view.is_mobile_size {
            self.position_mut().row = y;
        }
    }

    pub fn cols(&self) -> u32 {
        self.position().size_x
    }

    pub fn set_cols(&mut self, view: &DashboardView, cols: u32) {
        if !view.is_mobile_size {
            self.position_mut().size_x = cols;
        }
    }

    /// Height in rows.
    ///
    /// In mobile mode without mobile autofill, falls back to the layout's or
    /// config's mobile height, then to `sizeY * 24 / min_cols` rounded up to a
    /// whole row (`sizeY = 5`, `min_cols = 16` gives 8, not 7.5). Saturates at
    /// `u32::MAX`.
    pub fn rows(&self, view: &DashboardView) -> u32 {
        if view.is_mobile_size && !view.mobile_autofill_height {
            let mobile_height = self
                .layout
                .as_ref()
                .and_then(|layout| layout.mobile_height)
                .filter(|&height| height > 0)
                .or(self.widget.config.mobile_height.filter(|&height| height > 0));
            match mobile_height {
                Some(height) => height,
                None => {
                    let min_cols = u64::from(view.grid.min_cols.max(1));
                    let rows = (u64::from(self.widget.position.size_y) * MOBILE_ROW_UNITS)
                        .div_ceil(min_cols);
                    u32::try_from(rows).unwrap_or(u32::MAX)
                }
            }
        } else {
            self.position().size_y
        }
    }

    pub fn set_rows(&mut self, view: &DashboardView, rows: u32) {
        if !view.is_mobile_size && !view.autofill_height {
            self.position_mut().size_y = rows;
        }
    }

    /// Sort key: explicit mobile order first, then the row
    pub fn widget_order(&self) -> u32 {
        let layout_order = self
            .layout
            .as_ref()
            .and_then(|layout| layout.mobile_order)
            .and_then(|order| u32::try_from(order).ok());
        let config_order = self
            .widget
            .config
            .mobile_order
            .and_then(|order| u32::try_from(order).ok());
        layout_order.or(config_order).unwrap_or_else(|| self.y())
    }

    /// First row below the widget, saturating at `u32::MAX`
    pub fn bottom(&self, view: &DashboardView) -> u32 {
        self.y().saturating_add(self.rows(view))
    }
}
