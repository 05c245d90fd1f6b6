use crate::color::Color;
use crate::db::core::DataType;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wafer: WaferConfig,
    #[serde(default)]
    pub colors: ColorConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Parameters of the generated demo wafer. Distances are in millimetres.
#[derive(Debug, Clone, Deserialize)]
pub struct WaferConfig {
    #[serde(default = "default_diameter")]
    pub diameter: f64,
    #[serde(default = "default_edge_exclusion")]
    pub edge_exclusion: f64,
    #[serde(default = "default_flat_exclusion")]
    pub flat_exclusion: f64,
    #[serde(default = "default_die_width")]
    pub die_width: f64,
    #[serde(default = "default_die_height")]
    pub die_height: f64,
    #[serde(default)]
    pub x_offset: f64,
    #[serde(default)]
    pub y_offset: f64,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for WaferConfig {
    fn default() -> Self {
        Self {
            diameter: default_diameter(),
            edge_exclusion: default_edge_exclusion(),
            flat_exclusion: default_flat_exclusion(),
            die_width: default_die_width(),
            die_height: default_die_height(),
            x_offset: 0.0,
            y_offset: 0.0,
            data_type: DataType::default(),
            labels: default_labels(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_low")]
    pub low: Color,
    #[serde(default = "default_high")]
    pub high: Color,
    /// Extra evenly spaced stops between `low` and `high`.
    #[serde(default)]
    pub gradient_stops: Vec<Color>,
    #[serde(default = "default_oor_low")]
    pub oor_low: Color,
    #[serde(default = "default_oor_high")]
    pub oor_high: Color,
    #[serde(default = "default_invalid")]
    pub invalid: Color,
    #[serde(default = "default_outline")]
    pub outline: Color,
    #[serde(default = "default_wafer_edge")]
    pub wafer_edge: Color,
    #[serde(default = "default_crosshair")]
    pub crosshair: Color,
    #[serde(default = "default_gridline")]
    pub gridline: Color,
    #[serde(default = "default_die_center")]
    pub die_center: Color,
    #[serde(default = "default_background")]
    pub background: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            low: default_low(),
            high: default_high(),
            gradient_stops: Vec::new(),
            oor_low: default_oor_low(),
            oor_high: default_oor_high(),
            invalid: default_invalid(),
            outline: default_outline(),
            wafer_edge: default_wafer_edge(),
            crosshair: default_crosshair(),
            gridline: default_gridline(),
            die_center: default_die_center(),
            background: default_background(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrosshairStyle {
    #[default]
    Lines,
    Dot,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_output")]
    pub output: String,
    /// Fixed `[low, high]` color range. Derived from the data when absent.
    #[serde(default)]
    pub plot_range: Option<[f64; 2]>,
    #[serde(default = "default_true")]
    pub show_outline: bool,
    #[serde(default = "default_true")]
    pub show_crosshairs: bool,
    #[serde(default)]
    pub crosshair_style: CrosshairStyle,
    #[serde(default)]
    pub show_gridlines: bool,
    #[serde(default)]
    pub show_die_centers: bool,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            output: default_output(),
            plot_range: None,
            show_outline: true,
            show_crosshairs: true,
            crosshair_style: CrosshairStyle::default(),
            show_gridlines: false,
            show_die_centers: false,
            tick_count: default_tick_count(),
        }
    }
}

fn default_diameter() -> f64 {
    150.0
}

fn default_edge_exclusion() -> f64 {
    5.0
}

fn default_flat_exclusion() -> f64 {
    5.0
}

fn default_die_width() -> f64 {
    5.0
}

fn default_die_height() -> f64 {
    5.0
}

fn default_labels() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}

fn default_seed() -> u64 {
    42
}

fn default_low() -> Color {
    Color::rgb(128, 0, 255)
}

fn default_high() -> Color {
    Color::rgb(0, 255, 128)
}

fn default_oor_low() -> Color {
    Color::rgb(255, 128, 0)
}

fn default_oor_high() -> Color {
    Color::rgb(255, 0, 128)
}

fn default_invalid() -> Color {
    Color::WHITE
}

fn default_outline() -> Color {
    Color::rgb(255, 255, 0)
}

fn default_wafer_edge() -> Color {
    Color::rgb(255, 0, 0)
}

fn default_crosshair() -> Color {
    Color::rgb(0, 255, 255)
}

fn default_gridline() -> Color {
    Color::rgb(64, 64, 64)
}

fn default_die_center() -> Color {
    Color::rgb(255, 0, 0)
}

fn default_background() -> Color {
    Color::BLACK
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    800
}

fn default_output() -> String {
    "wafer_map.png".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_count() -> usize {
    11
}
