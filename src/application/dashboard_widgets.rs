// Dashboard widget collection - ordered presenters for one dashboard view
use crate::application::dashboard_widget::{DashboardWidget, WidgetHandle};
use crate::domain::dashboard::{DashboardView, WidgetsData};
use crate::domain::layout::{WidgetLayout, WidgetLayouts};
use crate::domain::widget::{Widget, WidgetId};
use std::collections::HashSet;

/// Presenters for the widgets on screen, kept sorted by (widget order, column)
#[derive(Debug, Default)]
pub struct DashboardWidgets {
    widgets: Vec<DashboardWidget>,
    next_handle: u64,
}

impl DashboardWidgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole widget set
    pub fn set_widgets(
        &mut self,
        view: &mut DashboardView,
        widgets: Vec<Widget>,
        layouts: Option<&WidgetLayouts>,
    ) {
        let mut max_rows = view.grid.max_rows;
        self.widgets.clear();

        for widget in widgets {
            let layout = match (layouts, widget.id.as_ref()) {
                (Some(layouts), Some(id)) => layouts.get(id).cloned(),
                _ => None,
            };
            let dashboard_widget = DashboardWidget::new(self.issue_handle(), widget, layout);
            max_rows = max_rows.max(dashboard_widget.bottom(view));
            self.widgets.push(dashboard_widget);
        }

        if let Some(layouts) = layouts {
            let known: HashSet<&WidgetId> = self.widgets.iter().filter_map(|w| w.id()).collect();
            for id in layouts.keys().filter(|id| !known.contains(id)) {
                tracing::warn!("Layout override for unknown widget {}", id);
            }
        }

        self.sort_widgets();
        view.grid.max_rows = max_rows;
        tracing::debug!(
            "Set {} dashboard widgets, max rows {}",
            self.widgets.len(),
            max_rows
        );
    }

    pub fn add_widget(
        &mut self,
        view: &mut DashboardView,
        widget: Widget,
        layout: Option<WidgetLayout>,
    ) -> WidgetHandle {
        let dashboard_widget = DashboardWidget::new(self.issue_handle(), widget, layout);
        let handle = dashboard_widget.handle();
        let max_rows = view.grid.max_rows.max(dashboard_widget.bottom(view));
        self.widgets.push(dashboard_widget);
        self.sort_widgets();
        view.grid.max_rows = max_rows;
        tracing::debug!("Added dashboard widget {}, max rows {}", handle, max_rows);
        handle
    }

    /// Returns false when no widget has the given handle
    pub fn remove_widget(&mut self, view: &mut DashboardView, handle: WidgetHandle) -> bool {
        match self.widgets.iter().position(|w| w.handle() == handle) {
            Some(index) => {
                self.remove_at(view, index);
                true
            }
            None => false,
        }
    }

    pub fn remove_by_id(&mut self, view: &mut DashboardView, id: &WidgetId) -> bool {
        match self.widgets.iter().position(|w| w.id() == Some(id)) {
            Some(index) => {
                self.remove_at(view, index);
                true
            }
            None => false,
        }
    }

    fn remove_at(&mut self, view: &mut DashboardView, index: usize) {
        let removed = self.widgets.remove(index);
        let max_rows = self
            .widgets
            .iter()
            .map(|w| w.bottom(&*view))
            .fold(view.grid.min_rows, u32::max);
        self.sort_widgets();
        view.grid.max_rows = max_rows;
        tracing::debug!(
            "Removed dashboard widget {}, max rows {}",
            removed.handle(),
            max_rows
        );
    }

    /// Apply `f` to one widget, then restore the row bound and ordering
    pub fn update_widget<F>(&mut self, view: &mut DashboardView, handle: WidgetHandle, f: F) -> bool
    where
        F: FnOnce(&mut DashboardWidget, &DashboardView),
    {
        let Some(dashboard_widget) = self.widgets.iter_mut().find(|w| w.handle() == handle) else {
            return false;
        };
        f(dashboard_widget, &*view);
        let bottom = dashboard_widget.bottom(view);
        view.grid.max_rows = view.grid.max_rows.max(bottom);
        self.sort_widgets();
        true
    }

    /// Stable sort by widget order, then column
    pub fn sort_widgets(&mut self) {
        self.widgets.sort_by_key(|w| (w.widget_order(), w.x()));
    }

    pub fn get(&self, handle: WidgetHandle) -> Option<&DashboardWidget> {
        self.widgets.iter().find(|w| w.handle() == handle)
    }

    pub fn find_by_id(&self, id: &WidgetId) -> Option<&DashboardWidget> {
        self.widgets.iter().find(|w| w.id() == Some(id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DashboardWidget> {
        self.widgets.iter()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Current widgets and layout overrides, in display order, for persisting edits
    pub fn widgets_data(&self) -> WidgetsData {
        let mut layouts = WidgetLayouts::new();
        let widgets = self
            .widgets
            .iter()
            .map(|w| {
                if let (Some(id), Some(layout)) = (w.id(), w.layout()) {
                    layouts.insert(id.clone(), layout.clone());
                }
                w.widget().clone()
            })
            .collect();

        WidgetsData {
            widgets,
            widget_layouts: (!layouts.is_empty()).then_some(layouts),
        }
    }

    fn issue_handle(&mut self) -> WidgetHandle {
        let handle = WidgetHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }
}

impl<'a> IntoIterator for &'a DashboardWidgets {
    type Item = &'a DashboardWidget;
    type IntoIter = std::slice::Iter<'a, DashboardWidget>;

    fn into_iter(self) -> Self::IntoIter {
        self.widgets.iter()
    }
}
