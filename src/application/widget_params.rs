// Display properties derived from a widget's configuration
use crate::application::widget_context::{WidgetAction, WidgetContext, WidgetHeaderAction};
use crate::domain::widget::{StyleMap, WidgetConfig, WidgetType};
use serde_json::Value;

pub const DEFAULT_COLOR: &str = "rgba(0, 0, 0, 0.87)";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#fff";
pub const DEFAULT_PADDING: &str = "8px";
pub const DEFAULT_MARGIN: &str = "0px";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetParams {
    pub color: String,
    pub background_color: String,
    pub padding: String,
    pub margin: String,

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

impl WidgetParams {
    pub fn derive(kind: WidgetType, config: &WidgetConfig, context: &WidgetContext) -> Self {
        let color = non_empty(&config.color).unwrap_or(DEFAULT_COLOR).to_string();
        let background_color = non_empty(&config.background_color)
            .unwrap_or(DEFAULT_BACKGROUND_COLOR)
            .to_string();
        let padding = non_empty(&config.padding).unwrap_or(DEFAULT_PADDING).to_string();
        let margin = non_empty(&config.margin).unwrap_or(DEFAULT_MARGIN).to_string();

        let title = non_empty(&context.widget_title)
            .map(str::to_string)
            .or_else(|| config.title.clone());
        let show_title = config.show_title.unwrap_or(true);
        let title_style = config.title_style.clone().unwrap_or_default();

        let title_icon = config.title_icon.clone().unwrap_or_default();
        let show_title_icon = config.show_title_icon.unwrap_or(false);
        let mut title_icon_style = StyleMap::new();
        if let Some(icon_color) = non_empty(&config.icon_color) {
            title_icon_style.insert("color".into(), Value::from(icon_color));
        }
        if let Some(icon_size) = non_empty(&config.icon_size) {
            title_icon_style.insert("fontSize".into(), Value::from(icon_size));
        }

        let drop_shadow = config.drop_shadow.unwrap_or(true);
        let enable_fullscreen = config.enable_fullscreen.unwrap_or(true);

        let has_timewindow = matches!(kind, WidgetType::Timeseries | WidgetType::Alarm)
            && config.use_dashboard_timewindow == Some(false)
            && config.display_timewindow.unwrap_or(true);
        let has_aggregation = kind == WidgetType::Timeseries;

        let mut style = config.widget_style.clone().unwrap_or_default();
        style.insert("cursor".into(), Value::from("pointer"));
        style.insert("color".into(), Value::from(color.as_str()));
        style.insert("backgroundColor".into(), Value::from(background_color.as_str()));
        style.insert("padding".into(), Value::from(padding.as_str()));
        style.insert("margin".into(), Value::from(margin.as_str()));

        let widget_title_template = non_empty(&context.widget_title_template)
            .unwrap_or_default()
            .to_string();
        let has_widget_title_template = !widget_title_template.is_empty();

        let show_widget_title_panel = !context.hide_title_panel
            && (has_widget_title_template || show_title || has_timewindow);
        let show_widget_actions = !context.hide_title_panel;

        Self {
            color,
            background_color,
            padding,
            margin,
            title,
            show_title,
            title_style,
            title_icon,
            show_title_icon,
            title_icon_style,
            drop_shadow,
            enable_fullscreen,
            has_timewindow,
            has_aggregation,
            style,
            has_widget_title_template,
            widget_title_template,
            show_widget_title_panel,
            show_widget_actions,
            custom_header_actions: context.custom_header_actions.clone(),
            widget_actions: context.widget_actions.clone(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn derive(kind: WidgetType, config: WidgetConfig) -> WidgetParams {
        WidgetParams::derive(kind, &config, &WidgetContext::default())
    }

    #[test]
    fn test_defaults() {
        let params = derive(WidgetType::Latest, WidgetConfig::default());

        assert_eq!(params.color, DEFAULT_COLOR);
        assert_eq!(params.background_color, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(params.padding, DEFAULT_PADDING);
        assert_eq!(params.margin, DEFAULT_MARGIN);
        assert_eq!(params.title, None);
        assert!(params.show_title);
        assert!(params.title_style.is_empty());
        assert_eq!(params.title_icon, "");
        assert!(!params.show_title_icon);
        assert!(params.title_icon_style.is_empty());
        assert!(params.drop_shadow);
        assert!(params.enable_fullscreen);
        assert!(!params.has_timewindow);
        assert!(!params.has_aggregation);
        assert!(!params.has_widget_title_template);
        assert!(params.show_widget_title_panel);
        assert!(params.show_widget_actions);
        assert!(params.custom_header_actions.is_empty());
        assert!(params.widget_actions.is_empty());
    }

    #[test]
    fn test_empty_strings_fall_back_to_defaults() {
        let config = WidgetConfig {
            color: Some(String::new()),
            padding: Some(String::new()),
            ..WidgetConfig::default()
        };
        let params = derive(WidgetType::Static, config);
        assert_eq!(params.color, DEFAULT_COLOR);
        assert_eq!(params.padding, DEFAULT_PADDING);
    }

    #[test]
    fn test_style_merge_fixed_keys_win() {
        let widget_style = json!({"border": "1px", "color": "red", "cursor": "move"});
        let config = WidgetConfig {
            widget_style: widget_style.as_object().cloned(),
            padding: Some("4px".to_string()),
            ..WidgetConfig::default()
        };
        let params = derive(WidgetType::Latest, config);

        assert_eq!(params.style["border"], json!("1px"));
        assert_eq!(params.style["color"], json!(DEFAULT_COLOR));
        assert_eq!(params.style["cursor"], json!("pointer"));
        assert_eq!(params.style["backgroundColor"], json!(DEFAULT_BACKGROUND_COLOR));
        assert_eq!(params.style["padding"], json!("4px"));
        assert_eq!(params.style["margin"], json!(DEFAULT_MARGIN));
        assert_eq!(params.style.len(), 6);
    }

    #[test]
    fn test_title_override_from_context() {
        let config = WidgetConfig {
            title: Some("Configured".to_string()),
            ..WidgetConfig::default()
        };

        let context = WidgetContext {
            widget_title: Some("Runtime".to_string()),
            ..WidgetContext::default()
        };
        let params = WidgetParams::derive(WidgetType::Latest, &config, &context);
        assert_eq!(params.title.as_deref(), Some("Runtime"));

        let context = WidgetContext {
            widget_title: Some(String::new()),
            ..WidgetContext::default()
        };
        let params = WidgetParams::derive(WidgetType::Latest, &config, &context);
        assert_eq!(params.title.as_deref(), Some("Configured"));
    }

    #[test]
    fn test_title_icon_style() {
        let config = WidgetConfig {
            icon_color: Some("#f00".to_string()),
            ..WidgetConfig::default()
        };
        let params = derive(WidgetType::Latest, config);
        assert_eq!(params.title_icon_style.get("color"), Some(&json!("#f00")));
        assert!(params.title_icon_style.get("fontSize").is_none());

        let config = WidgetConfig {
            icon_color: Some("#f00".to_string()),
            icon_size: Some("18px".to_string()),
            ..WidgetConfig::default()
        };
        let params = derive(WidgetType::Latest, config);
        assert_eq!(params.title_icon_style.get("fontSize"), Some(&json!("18px")));
    }

    #[test]
    fn test_has_timewindow() {
        let own_timewindow = WidgetConfig {
            use_dashboard_timewindow: Some(false),
            ..WidgetConfig::default()
        };
        assert!(derive(WidgetType::Timeseries, own_timewindow.clone()).has_timewindow);
        assert!(derive(WidgetType::Alarm, own_timewindow.clone()).has_timewindow);
        assert!(!derive(WidgetType::Latest, own_timewindow.clone()).has_timewindow);

        let hidden = WidgetConfig {
            display_timewindow: Some(false),
            ..own_timewindow.clone()
        };
        assert!(!derive(WidgetType::Timeseries, hidden).has_timewindow);

        let shown = WidgetConfig {
            display_timewindow: Some(true),
            ..own_timewindow
        };
        assert!(derive(WidgetType::Timeseries, shown).has_timewindow);

        // unset means the dashboard timewindow is used
        assert!(!derive(WidgetType::Timeseries, WidgetConfig::default()).has_timewindow);

        let dashboard_timewindow = WidgetConfig {
            use_dashboard_timewindow: Some(true),
            ..WidgetConfig::default()
        };
        assert!(!derive(WidgetType::Alarm, dashboard_timewindow).has_timewindow);
    }

    #[test]
    fn test_has_aggregation_only_for_timeseries() {
        assert!(derive(WidgetType::Timeseries, WidgetConfig::default()).has_aggregation);
        assert!(!derive(WidgetType::Alarm, WidgetConfig::default()).has_aggregation);
        assert!(!derive(WidgetType::Rpc, WidgetConfig::default()).has_aggregation);
    }

    #[test]
    fn test_title_panel_visibility() {
        let no_title = WidgetConfig {
            show_title: Some(false),
            ..WidgetConfig::default()
        };
        let params = derive(WidgetType::Latest, no_title.clone());
        assert!(!params.show_widget_title_panel);
        assert!(params.show_widget_actions);

        let context = WidgetContext {
            widget_title_template: Some("${entityName}".to_string()),
            ..WidgetContext::default()
        };
        let params = WidgetParams::derive(WidgetType::Latest, &no_title, &context);
        assert!(params.has_widget_title_template);
        assert_eq!(params.widget_title_template, "${entityName}");
        assert!(params.show_widget_title_panel);

        let with_timewindow = WidgetConfig {
            use_dashboard_timewindow: Some(false),
            ..no_title
        };
        assert!(derive(WidgetType::Timeseries, with_timewindow.clone()).show_widget_title_panel);

        let hidden = WidgetContext {
            hide_title_panel: true,
            widget_title_template: Some("${entityName}".to_string()),
            ..WidgetContext::default()
        };
        let params = WidgetParams::derive(WidgetType::Timeseries, &with_timewindow, &hidden);
        assert!(!params.show_widget_title_panel);
        assert!(!params.show_widget_actions);
    }
}
