pub mod input;
pub mod slider;
pub mod viewport;

use serde::{Deserialize, Serialize};

/// Declaration of a single tool slider (e.g. brush size), as read from `tools.ron`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderDecl {
    /// Stable identifier for this slider (e.g. "brush-size")
    pub id: String,
    /// Label shown next to the slider
    pub label: String,
    /// Lower bound of the value range; missing falls back to 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,
    /// Upper bound of the value range; missing falls back to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    /// Starting value; missing falls back to 50
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<i32>,
}

/// Root type for the tool configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsConfig {
    /// Sliders shown in the brush section of the sidebar, in order
    pub sliders: Vec<SliderDecl>,
}

impl ToolsConfig {
    /// Built-in configuration used when `tools.ron` is missing or unparseable.
    pub fn fallback() -> Self {
        Self {
            sliders: vec![
                SliderDecl {
                    id: "brush-size".to_owned(),
                    label: "Size".to_owned(),
                    min: Some(0),
                    max: Some(100),
                    initial: Some(50),
                },
                SliderDecl {
                    id: "brush-opacity".to_owned(),
                    label: "Opacity".to_owned(),
                    min: Some(0),
                    max: Some(100),
                    initial: Some(100),
                },
            ],
        }
    }
}
