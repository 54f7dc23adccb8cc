use crate::geom::{Box2, point};
use crate::model::Item;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Glyph bounding box relative to the text origin on the baseline.
///
/// `min.y` is the top (negative, above the baseline) and `max.y` the bottom (descent).
pub type TextBounds = Box2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 14.0,
        }
    }
}

impl TextStyle {
    pub fn with_size(font_size: f64) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }
}

pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextBounds;
}

/// Font-free measurer for headless use and tests.
///
/// Zero factors fall back to the defaults (0.6 char width, 0.8 ascent).
#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    pub char_width_factor: f64,
    pub ascent_factor: f64,
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextBounds {
        let char_width_factor = if self.char_width_factor == 0.0 {
            0.6
        } else {
            self.char_width_factor
        };
        let ascent_factor = if self.ascent_factor == 0.0 {
            0.8
        } else {
            self.ascent_factor
        };

        let font_size = style.font_size.max(1.0);
        let width = text.chars().count() as f64 * font_size * char_width_factor;
        let ascent = font_size * ascent_factor;
        let descent = font_size - ascent;
        Box2::new(point(0.0, -ascent), point(width, descent))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    labels: Vec<String>,
    style: TextStyle,
}

impl CacheKey {
    fn matches(&self, items: &[Item], style: &TextStyle) -> bool {
        self.style.font_size.to_bits() == style.font_size.to_bits()
            && self.style.font_family == style.font_family
            && self.labels.len() == items.len()
            && self.labels.iter().zip(items).all(|(l, i)| *l == i.label)
    }
}

/// Measured label bounds for the current item list.
///
/// Scoped to one chart: the whole list is re-measured when any label or the text style
/// changes, and each distinct label is measured once per refresh.
#[derive(Debug, Clone, Default)]
pub struct TextMetricsCache {
    key: Option<CacheKey>,
    bounds: Vec<TextBounds>,
    measure_count: u64,
}

impl TextMetricsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds for `items`, index-aligned with them.
    pub fn bounds_for(
        &mut self,
        items: &[Item],
        style: &TextStyle,
        measurer: &dyn TextMeasurer,
    ) -> &[TextBounds] {
        if self.key.as_ref().is_some_and(|k| k.matches(items, style)) {
            tracing::trace!(labels = items.len(), "text metrics cache hit");
            return &self.bounds;
        }

        tracing::debug!(
            labels = items.len(),
            font_size = style.font_size,
            "measuring labels"
        );
        let mut memo: FxHashMap<&str, TextBounds> = FxHashMap::default();
        let mut bounds = Vec::with_capacity(items.len());
        for item in items {
            let b = *memo.entry(item.label.as_str()).or_insert_with(|| {
                self.measure_count += 1;
                measurer.measure(&item.label, style)
            });
            bounds.push(b);
        }

        self.bounds = bounds;
        self.key = Some(CacheKey {
            labels: items.iter().map(|i| i.label.clone()).collect(),
            style: style.clone(),
        });
        &self.bounds
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.bounds.clear();
    }

    /// Total measurer calls made by this cache.
    pub fn measure_count(&self) -> u64 {
        self.measure_count
    }
}
