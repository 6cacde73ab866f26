// Panel domain models - visual tiles in the 24-column dashboard grid
use serde::Serialize;

/// Width of the layout grid in columns.
pub const GRID_COLUMNS: u32 = 24;

/// Placement of a panel in the layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridPos {
    pub h: u32,
    pub w: u32,
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    pub const fn new(h: u32, w: u32, x: u32, y: u32) -> Self {
        Self { h, w, x, y }
    }
}

/// Display unit codes understood by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[serde(rename = "reqps")]
    RequestsPerSecond,
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "percent")]
    Percent,
    #[serde(rename = "bytes")]
    Bytes,
    #[serde(rename = "ops")]
    OpsPerSecond,
    #[serde(rename = "short")]
    Short,
}

/// Severity colors used in threshold steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Yellow,
    Red,
}

/// One query expression paired with its display label.
///
/// The expression is opaque here; it is evaluated by the metrics backend,
/// never by this program. Stat targets carry no label, and the serialized
/// form omits the key entirely in that case.
#[derive(Debug, Clone, Serialize)]
pub struct Target {
    pub expr: String,
    #[serde(rename = "legendFormat", skip_serializing_if = "Option::is_none")]
    pub legend_format: Option<String>,
}

/// A color applied to values at or above `value`.
///
/// A `None` bound is the base step and serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdStep {
    pub color: Color,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdMode {
    Absolute,
}

/// Ordered threshold steps, kept exactly in construction order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thresholds {
    pub mode: ThresholdMode,
    pub steps: Vec<ThresholdStep>,
}

impl Thresholds {
    pub fn absolute(steps: Vec<ThresholdStep>) -> Self {
        Self {
            mode: ThresholdMode::Absolute,
            steps,
        }
    }
}

/// Line styling applied to every timeseries panel.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub line_width: u32,
    pub fill_opacity: u32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_width: 2,
            fill_opacity: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldConfig {
    pub defaults: FieldDefaults,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDefaults {
    pub unit: Unit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
}

/// Value display options for stat panels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatOptions {
    pub color_mode: ColorMode,
    pub graph_mode: GraphMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    Area,
}

/// One visual tile: a section header, a chart, or a single-value display.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Panel {
    #[serde(rename = "row")]
    Row {
        title: String,
        collapsed: bool,
        #[serde(rename = "gridPos")]
        grid_pos: GridPos,
    },
    #[serde(rename = "timeseries")]
    TimeSeries {
        title: String,
        datasource: String,
        #[serde(rename = "fieldConfig")]
        field_config: FieldConfig,
        targets: Vec<Target>,
        #[serde(rename = "gridPos")]
        grid_pos: GridPos,
    },
    #[serde(rename = "stat")]
    Stat {
        title: String,
        datasource: String,
        #[serde(rename = "fieldConfig")]
        field_config: FieldConfig,
        options: StatOptions,
        targets: Vec<Target>,
        #[serde(rename = "gridPos")]
        grid_pos: GridPos,
    },
}

#[allow(dead_code)]
impl Panel {
    /// Grid placement regardless of panel kind.
    pub fn grid_pos(&self) -> GridPos {
        match self {
            Panel::Row { grid_pos, .. }
            | Panel::TimeSeries { grid_pos, .. }
            | Panel::Stat { grid_pos, .. } => *grid_pos,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Panel::Row { title, .. }
            | Panel::TimeSeries { title, .. }
            | Panel::Stat { title, .. } => title,
        }
    }

    pub fn is_row(&self) -> bool {
        matches!(self, Panel::Row { .. })
    }

    /// Query targets carried by the panel; section headers have none.
    pub fn targets(&self) -> &[Target] {
        match self {
            Panel::Row { .. } => &[],
            Panel::TimeSeries { targets, .. } | Panel::Stat { targets, .. } => targets,
        }
    }

    pub fn thresholds(&self) -> Option<&Thresholds> {
        match self {
            Panel::Row { .. } => None,
            Panel::TimeSeries { field_config, .. } | Panel::Stat { field_config, .. } => {
                field_config.defaults.thresholds.as_ref()
            }
        }
    }
}
