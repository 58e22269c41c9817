// File: src/legend.rs
use crate::color_utils::{ColorScale, Rgb};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Display;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

/// Snapshot of a scale's assignments, for the page's legend box.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Entries in first-seen order.
    pub fn from_scale<K>(scale: &ColorScale<K>) -> Self
    where
        K: Eq + Hash + Clone + Display,
    {
        let entries = scale
            .domain()
            .iter()
            .filter_map(|key| {
                scale.peek(key).map(|color| LegendEntry {
                    label: key.to_string(),
                    color,
                })
            })
            .collect();
        Self { entries }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries).context("Failed to serialize legend")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_legend_follows_assignment_order() {
        let mut scale = ColorScale::new();
        scale.color("WashingtonPost");
        scale.color("NYTimes");
        scale.color("WashingtonPost");

        let legend = Legend::from_scale(&scale);
        let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["WashingtonPost", "NYTimes"]);
    }

    #[test]
    fn test_legend_json() {
        let mut scale = ColorScale::new();
        scale.color(0);
        scale.color(1);

        let json: Value = serde_json::from_str(&Legend::from_scale(&scale).to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            json!([
                {"label": "0", "color": "#1F83B4"},
                {"label": "1", "color": "#18A188"}
            ])
        );
    }

    #[test]
    fn test_empty_scale_gives_empty_legend() {
        let scale: ColorScale<String> = ColorScale::new();
        assert_eq!(Legend::from_scale(&scale), Legend::default());
    }
}
