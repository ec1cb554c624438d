use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Sample, Scale};

/// Tooltip box size and its gap to the hovered point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipBox {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for TooltipBox {
    fn default() -> Self {
        Self {
            width: 160.0,
            height: 64.0,
            margin: 8.0,
        }
    }
}

/// Vertical side of the hovered point the tooltip is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipPlacement {
    Above,
    Below,
}

/// Candidate placements, tried in order.
pub const PLACEMENT_PRIORITY: [TooltipPlacement; 2] =
    [TooltipPlacement::Above, TooltipPlacement::Below];

/// Top-left corner of the tooltip box in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPosition {
    pub x: f64,
    pub y: f64,
    pub placement: TooltipPlacement,
}

/// Places the tooltip for `hover_index`, or `None` when nothing is hovered.
///
/// The box is centered on the sample's x and prefers sitting above the
/// primary series' point, falling back to below when that would cross the
/// plot's top edge. The final position is clamped into the plot area.
#[must_use]
pub fn compute_tooltip<F>(
    hover_index: Option<usize>,
    samples: &[Sample],
    scale: Scale,
    primary_value_of: F,
    tooltip_box: TooltipBox,
) -> Option<TooltipPosition>
where
    F: Fn(&Sample) -> f64,
{
    let index = hover_index?;
    let sample = samples.get(index)?;
    let plot = scale.plot_area();

    let anchor_x = scale.x_of(index);
    let anchor_y = scale.y_of(primary_value_of(sample));

    let x = clamp_span(
        anchor_x - tooltip_box.width / 2.0,
        tooltip_box.width,
        plot.left,
        plot.right,
    );

    let placement = PLACEMENT_PRIORITY
        .into_iter()
        .find(|placement| fits(*placement, anchor_y, tooltip_box, plot))
        .unwrap_or(TooltipPlacement::Below);
    let requested_y = match placement {
        TooltipPlacement::Above => anchor_y - tooltip_box.height - tooltip_box.margin,
        TooltipPlacement::Below => anchor_y + tooltip_box.margin,
    };
    let y = clamp_span(requested_y, tooltip_box.height, plot.top, plot.bottom);

    Some(TooltipPosition { x, y, placement })
}

fn fits(
    placement: TooltipPlacement,
    anchor_y: f64,
    tooltip_box: TooltipBox,
    plot: PlotArea,
) -> bool {
    match placement {
        TooltipPlacement::Above => anchor_y - tooltip_box.height - tooltip_box.margin >= plot.top,
        TooltipPlacement::Below => true,
    }
}

/// Clamps a span `[start, start + len]` into `[min, max]`; spans longer than
/// the range pin to `min`.
fn clamp_span(start: f64, len: f64, min: f64, max: f64) -> f64 {
    let upper = max - len;
    if !start.is_finite() || upper < min {
        return min;
    }
    start.clamp(min, upper)
}
