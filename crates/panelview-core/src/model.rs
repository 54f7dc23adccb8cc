use crate::geom::{Point, point};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One chart axis: a labelled value measured against its own maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(alias = "text")]
    pub label: String,
    pub max_value: f64,
    pub value: f64,
}

impl Item {
    pub fn new(label: impl Into<String>, max_value: f64, value: f64) -> Self {
        Self {
            label: label.into(),
            max_value,
            value,
        }
    }

    /// `value / max_value`. Not clamped: values above the maximum or below zero are kept.
    pub fn ratio(&self) -> f64 {
        self.value / self.max_value
    }
}

/// Parses and validates an item list such as `[{"label": "Speed", "maxValue": 10, "value": 7}]`.
pub fn items_from_value(value: &serde_json::Value) -> Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_value(value.clone())?;
    validate_items(&items)?;
    Ok(items)
}

/// Rejects items whose ratio would be undefined or non-finite.
///
/// Runs before any geometry is produced, so a layout pass either sees only valid items
/// or does not start.
pub fn validate_items(items: &[Item]) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        if !item.max_value.is_finite() || item.max_value <= 0.0 {
            tracing::debug!(index, label = %item.label, max_value = item.max_value, "rejecting item");
            return Err(Error::InvalidMaxValue {
                index,
                label: item.label.clone(),
                max_value: item.max_value,
            });
        }
        if !item.value.is_finite() {
            tracing::debug!(index, label = %item.label, value = item.value, "rejecting item");
            return Err(Error::InvalidValue {
                index,
                label: item.label.clone(),
                value: item.value,
            });
        }
    }
    Ok(())
}

/// Where the chart center sits on the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CenterPolicy {
    /// `(height / 2, height / 2)`. Matches the panel view this engine replaces, which derived
    /// both center coordinates from the measured height.
    #[default]
    MeasuredHeight,
    /// `(width / 2, height / 2)`.
    #[serde(alias = "surface")]
    SurfaceCenter,
}

impl CenterPolicy {
    fn from_config_str(s: &str) -> Option<Self> {
        match s.trim() {
            "measuredHeight" | "measured-height" | "height" => Some(Self::MeasuredHeight),
            "surface" | "surfaceCenter" | "surface-center" => Some(Self::SurfaceCenter),
            _ => None,
        }
    }
}

/// Measured drawing-surface size in pixels, as resolved by the host's layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Rejects dimensions that would put the center at infinity or NaN.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if !v.is_finite() || v < 0.0 {
                return Err(Error::InvalidConfig {
                    message: format!("surface {name} must be finite and not negative, got {v}"),
                });
            }
        }
        Ok(())
    }

    pub fn center(&self, policy: CenterPolicy) -> Point {
        match policy {
            CenterPolicy::MeasuredHeight => point(self.height / 2.0, self.height / 2.0),
            CenterPolicy::SurfaceCenter => point(self.width / 2.0, self.height / 2.0),
        }
    }
}

/// Per-pass geometry configuration. Any change invalidates the previous layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(alias = "radius")]
    pub outer_radius: f64,
    pub stroke_width: f64,
    pub text_size: f64,
    pub center: CenterPolicy,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            outer_radius: 100.0,
            stroke_width: 1.0,
            text_size: 14.0,
            center: CenterPolicy::default(),
        }
    }
}

fn config_f64(cfg: &serde_json::Value, path: &[&str], default: f64) -> f64 {
    let mut cur = cfg;
    for key in path {
        cur = match cur.get(*key) {
            Some(v) => v,
            None => return default,
        };
    }
    cur.as_f64()
        .or_else(|| cur.as_i64().map(|n| n as f64))
        .or_else(|| cur.as_u64().map(|n| n as f64))
        .unwrap_or(default)
}

impl ChartConfig {
    /// Reads a config tree, with keys either at the top level or under `panel`.
    ///
    /// Missing or non-numeric keys fall back to the defaults; the result is validated.
    pub fn from_value(cfg: &serde_json::Value) -> Result<Self> {
        let root = cfg.get("panel").unwrap_or(cfg);
        let defaults = Self::default();

        let center = match root.get("center") {
            None => defaults.center,
            Some(v) => {
                let raw = v.as_str().unwrap_or_default();
                CenterPolicy::from_config_str(raw).ok_or_else(|| Error::InvalidConfig {
                    message: format!("unknown center policy: {v}"),
                })?
            }
        };

        let out = Self {
            outer_radius: config_f64(root, &["radius"], defaults.outer_radius),
            stroke_width: config_f64(root, &["strokeWidth"], defaults.stroke_width),
            text_size: config_f64(root, &["textSize"], defaults.text_size),
            center,
        };
        out.validate()?;
        Ok(out)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("outerRadius", self.outer_radius),
            ("strokeWidth", self.stroke_width),
            ("textSize", self.text_size),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be finite, got {v}"),
                });
            }
        }
        if self.outer_radius < 0.0 {
            return Err(Error::InvalidConfig {
                message: format!("outerRadius must not be negative, got {}", self.outer_radius),
            });
        }
        if self.stroke_width < 0.0 {
            return Err(Error::InvalidConfig {
                message: format!("strokeWidth must not be negative, got {}", self.stroke_width),
            });
        }
        if self.text_size <= 0.0 {
            return Err(Error::InvalidConfig {
                message: format!("textSize must be positive, got {}", self.text_size),
            });
        }
        Ok(())
    }
}
