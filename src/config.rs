use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    animation::AnimationConfig,
    controls::SliderConfig,
    grid::GridConfig,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub sliders: SliderConfig,

    #[serde(default)]
    pub plot: PlotConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_x_label")]
    pub x_label: String,

    #[serde(default = "default_y_label")]
    pub y_label: String,

    #[serde(default = "default_sum_label")]
    pub sum_label: String,

    /// Fixed y range. The plot auto-scales the y axis if unset.
    #[serde(default)]
    pub y_bounds: Option<[f64; 2]>,

    /// Also draw every packet's own curve.
    #[serde(default)]
    pub show_components: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            sum_label: default_sum_label(),
            y_bounds: None,
            show_components: false,
        }
    }
}

fn default_title() -> String {
    "Wave Packet Animation".to_owned()
}

fn default_x_label() -> String {
    "Distance".to_owned()
}

fn default_y_label() -> String {
    "Amplitude".to_owned()
}

fn default_sum_label() -> String {
    "Summed wave packet".to_owned()
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> f32 {
    1200.0
}

fn default_height() -> f32 {
    800.0
}
