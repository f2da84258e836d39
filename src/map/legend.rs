//! Depth legend panel

use crate::depth::ColorBucket;
use crate::marker::escape_html;

pub(crate) const LEGEND_TITLE: &str = "Earthquake Depth";

/// Legend rows as (swatch color, label), top to bottom
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Legend {
    pub(crate) title: &'static str,
    pub(crate) entries: Vec<(&'static str, &'static str)>,
}

impl Legend {
    pub(crate) fn for_buckets(buckets: &[ColorBucket]) -> Self {
        Self {
            title: LEGEND_TITLE,
            entries: buckets.iter().map(|b| (b.color(), b.label())).collect(),
        }
    }

    /// Inner HTML of the legend panel
    pub(crate) fn to_html(&self) -> String {
        let mut html = format!("<strong>{}</strong><br>", escape_html(self.title));
        for (color, label) in &self.entries {
            html.push_str(&format!(
                "<i style=\"background: {};\"></i> {}<br>",
                escape_html(color),
                escape_html(label)
            ));
        }
        html
    }
}
