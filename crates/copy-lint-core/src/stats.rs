//! Summary statistics over validated layers.

use crate::layer::TextLayer;
use crate::types::{GuidelineStats, TextStyleStats};

/// Counts layers passing and failing their guidelines.
///
/// Layers that were never validated count as failing.
#[must_use]
pub fn guideline_stats<'a, I>(layers: I) -> GuidelineStats
where
    I: IntoIterator<Item = &'a TextLayer>,
{
    layers
        .into_iter()
        .fold(GuidelineStats::default(), |mut stats, layer| {
            stats.total += 1;
            if layer.passes_all() {
                stats.passing += 1;
            } else {
                stats.failing += 1;
            }
            stats
        })
}

/// Counts layers with and without a shared text style.
#[must_use]
pub fn text_style_stats<'a, I>(layers: I) -> TextStyleStats
where
    I: IntoIterator<Item = &'a TextLayer>,
{
    layers
        .into_iter()
        .fold(TextStyleStats::default(), |mut stats, layer| {
            stats.total += 1;
            if layer.is_styled() {
                stats.with_style += 1;
            } else {
                stats.without_style += 1;
            }
            stats
        })
}
