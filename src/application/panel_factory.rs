// Panel factory - builds panel descriptors from query and layout parameters
use crate::domain::panel::{
    Color, ColorMode, FieldConfig, FieldDefaults, GraphMode, GridPos, LineStyle, Panel,
    StatOptions, Target, ThresholdStep, Thresholds, Unit, GRID_COLUMNS,
};

const DATASOURCE: &str = "Prometheus";

/// Build a full-width section header at vertical offset `y`.
pub fn create_row(title: &str, y: u32) -> Panel {
    Panel::Row {
        title: title.to_string(),
        collapsed: false,
        grid_pos: GridPos::new(1, GRID_COLUMNS, 0, y),
    }
}

/// Build a timeseries panel with one target per `(expression, label)` pair.
///
/// Threshold steps are optional; when absent the panel carries no threshold
/// block at all, only the shared line styling defaults.
pub fn create_timeseries(
    title: &str,
    unit: Unit,
    queries: &[(&str, &str)],
    grid_pos: GridPos,
    thresholds: Option<&[(Color, Option<f64>)]>,
) -> Panel {
    let targets = queries
        .iter()
        .map(|(expr, label)| Target {
            expr: (*expr).to_string(),
            legend_format: Some((*label).to_string()),
        })
        .collect();

    Panel::TimeSeries {
        title: title.to_string(),
        datasource: DATASOURCE.to_string(),
        field_config: FieldConfig {
            defaults: FieldDefaults {
                unit,
                custom: Some(LineStyle::default()),
                thresholds: thresholds.map(absolute_thresholds),
            },
        },
        targets,
        grid_pos,
    }
}

/// Build a single-value stat panel colored by its threshold steps.
pub fn create_stat(
    title: &str,
    unit: Unit,
    expr: &str,
    grid_pos: GridPos,
    thresholds: &[(Color, Option<f64>)],
) -> Panel {
    Panel::Stat {
        title: title.to_string(),
        datasource: DATASOURCE.to_string(),
        field_config: FieldConfig {
            defaults: FieldDefaults {
                unit,
                custom: None,
                thresholds: Some(absolute_thresholds(thresholds)),
            },
        },
        options: StatOptions {
            color_mode: ColorMode::Value,
            graph_mode: GraphMode::Area,
        },
        targets: vec![Target {
            expr: expr.to_string(),
            legend_format: None,
        }],
        grid_pos,
    }
}

fn absolute_thresholds(steps: &[(Color, Option<f64>)]) -> Thresholds {
    Thresholds::absolute(
        steps
            .iter()
            .map(|(color, value)| ThresholdStep {
                color: *color,
                value: *value,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeseries_one_target_per_query() {
        let panel = create_timeseries(
            "End-to-End Latency",
            Unit::Milliseconds,
            &[("p50_expr", "P50"), ("p95_expr", "P95"), ("p99_expr", "P99")],
            GridPos::new(8, 8, 8, 1),
            None,
        );

        let targets = panel.targets();
        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].expr, "p50_expr");
        assert_eq!(targets[0].legend_format.as_deref(), Some("P50"));
        assert_eq!(targets[2].expr, "p99_expr");
        assert_eq!(targets[2].legend_format.as_deref(), Some("P99"));
    }

    #[test]
    fn test_timeseries_without_thresholds_omits_block() {
        let panel = create_timeseries(
            "Container Memory",
            Unit::Bytes,
            &[("container_memory_usage_bytes", "{{name}}")],
            GridPos::new(8, 8, 8, 10),
            None,
        );

        assert!(panel.thresholds().is_none());
        let json = serde_json::to_value(&panel).unwrap();
        assert!(json["fieldConfig"]["defaults"].get("thresholds").is_none());
        assert_eq!(json["fieldConfig"]["defaults"]["custom"]["lineWidth"], 2);
        assert_eq!(json["fieldConfig"]["defaults"]["custom"]["fillOpacity"], 10);
    }

    #[test]
    fn test_timeseries_thresholds_preserve_order() {
        let panel = create_timeseries(
            "Error Rate (%)",
            Unit::Percent,
            &[("error_expr", "Redis Errors %")],
            GridPos::new(8, 8, 16, 1),
            Some(&[
                (Color::Green, None),
                (Color::Yellow, Some(1.0)),
                (Color::Red, Some(5.0)),
            ]),
        );

        let steps = &panel.thresholds().unwrap().steps;
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].color, Color::Green);
        assert_eq!(steps[0].value, None);
        assert_eq!(steps[1].color, Color::Yellow);
        assert_eq!(steps[1].value, Some(1.0));
        assert_eq!(steps[2].color, Color::Red);
        assert_eq!(steps[2].value, Some(5.0));
    }

    #[test]
    fn test_stat_panel_matches_input() {
        let panel = create_stat(
            "RPS",
            Unit::RequestsPerSecond,
            "sum(irate(ratelimit_requests_total[1m]))",
            GridPos::new(4, 6, 0, 55),
            &[
                (Color::Red, None),
                (Color::Yellow, Some(1000.0)),
                (Color::Green, Some(5000.0)),
            ],
        );

        let targets = panel.targets();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].expr, "sum(irate(ratelimit_requests_total[1m]))");
        assert!(targets[0].legend_format.is_none());

        let steps = &panel.thresholds().unwrap().steps;
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].color, Color::Red);
        assert_eq!(steps[0].value, None);
        assert_eq!(steps[1].color, Color::Yellow);
        assert_eq!(steps[1].value, Some(1000.0));
        assert_eq!(steps[2].color, Color::Green);
        assert_eq!(steps[2].value, Some(5000.0));
    }

    #[test]
    fn test_stat_defaults_omit_line_styling() {
        let panel = create_stat(
            "GC %",
            Unit::Percent,
            "sum(rate(jvm_gc_pause_seconds_sum[1m])) * 100",
            GridPos::new(4, 6, 18, 55),
            &[(Color::Green, None), (Color::Yellow, Some(5.0)), (Color::Red, Some(10.0))],
        );

        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json["type"], "stat");
        assert!(json["fieldConfig"]["defaults"].get("custom").is_none());
        assert_eq!(json["options"]["colorMode"], "value");
        assert_eq!(json["options"]["graphMode"], "area");
    }

    #[test]
    fn test_row_is_full_width_header() {
        let panel = create_row("📈 Quick Stats", 54);
        let pos = panel.grid_pos();
        assert!(panel.is_row());
        assert_eq!(pos, GridPos::new(1, 24, 0, 54));

        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json["type"], "row");
        assert_eq!(json["collapsed"], false);
    }
}
