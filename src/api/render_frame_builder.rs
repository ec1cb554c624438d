#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Sample, Scale, build_paths, make_scale, plan_ticks};
use crate::error::ChartResult;
use crate::interaction::compute_tooltip;
use crate::render::{
    ChartFrame, HoverGuide, Renderer, SeriesFrame, TooltipContent, TooltipFrame, TooltipRow,
    XTick, YTick,
};

use super::axis_ticks::select_x_ticks_with_min_spacing;
use super::{ChartEngine, ChartLayout, SeriesDefinition};

impl<R: Renderer> ChartEngine<R> {
    /// Shared scale and ticks for the visible series, or `None` when empty.
    #[must_use]
    pub fn layout(&self) -> Option<ChartLayout> {
        if self.samples.is_empty() {
            return None;
        }
        let shared_max = self.registry.shared_max(&self.samples);
        let ticks = plan_ticks(shared_max, self.config.tick_count);
        let y_max = ticks.last().copied().unwrap_or(0.0);
        let scale = make_scale(self.samples.len(), y_max, self.config.geometry);
        Some(ChartLayout { scale, ticks })
    }

    /// Materializes the renderable description of the current state.
    pub fn frame(&self) -> ChartResult<ChartFrame> {
        let Some(layout) = self.layout() else {
            return Ok(ChartFrame::empty(self.config.geometry));
        };
        let scale = layout.scale;

        let ticks = layout
            .ticks
            .iter()
            .map(|value| YTick {
                value: *value,
                pixel_y: scale.y_of(*value),
                label: self.formatter.format_value(*value),
            })
            .collect();

        let x_candidates = self
            .samples
            .iter()
            .enumerate()
            .map(|(index, sample)| XTick {
                index,
                pixel_x: scale.x_of(index),
                label: self.formatter.format_date(&sample.date),
            })
            .collect();
        let x_ticks =
            select_x_ticks_with_min_spacing(x_candidates, self.config.x_label_min_spacing_px);

        let visible = self.registry.visible_series();
        let series = project_series(&visible, &self.samples, scale)?;

        let (hover_guide, tooltip) = match self.hover.index() {
            Some(index) => self.hover_output(index, &visible, scale),
            None => (None, None),
        };

        Ok(ChartFrame {
            state: self.state(),
            geometry: self.config.geometry,
            ticks,
            x_ticks,
            series,
            hover_guide,
            tooltip,
        })
    }

    fn hover_output(
        &self,
        index: usize,
        visible: &[&SeriesDefinition],
        scale: Scale,
    ) -> (Option<HoverGuide>, Option<TooltipFrame>) {
        let Some(sample) = self.samples.get(index) else {
            return (None, None);
        };
        let plot = scale.plot_area();
        let guide = HoverGuide {
            pixel_x: scale.x_of(index),
            top: plot.top,
            bottom: plot.bottom,
        };

        let primary = self.registry.primary();
        let tooltip_box = self.config.tooltip;
        let tooltip = compute_tooltip(
            Some(index),
            &self.samples,
            scale,
            |candidate| primary.value_of(candidate),
            tooltip_box,
        )
        .map(|position| TooltipFrame {
            pixel_x: position.x,
            pixel_y: position.y,
            width: tooltip_box.width,
            height: tooltip_box.height,
            placement: position.placement,
            content: TooltipContent {
                title: self.formatter.format_date(&sample.date),
                rows: visible
                    .iter()
                    .map(|series| {
                        let value = series.value_of(sample);
                        TooltipRow {
                            key: series.key().to_owned(),
                            label: series.label().to_owned(),
                            color: series.color().to_owned(),
                            value,
                            value_label: self.formatter.format_value(value),
                        }
                    })
                    .collect(),
            },
        });

        (Some(guide), tooltip)
    }
}

fn project_series(
    visible: &[&SeriesDefinition],
    samples: &[Sample],
    scale: Scale,
) -> ChartResult<Vec<SeriesFrame>> {
    #[cfg(feature = "parallel-projection")]
    {
        visible
            .par_iter()
            .map(|series| series_frame(series, samples, scale))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        visible
            .iter()
            .map(|series| series_frame(series, samples, scale))
            .collect()
    }
}

fn series_frame(
    series: &SeriesDefinition,
    samples: &[Sample],
    scale: Scale,
) -> ChartResult<SeriesFrame> {
    let paths = build_paths(samples, |sample| series.value_of(sample), scale)?;
    Ok(SeriesFrame {
        key: series.key().to_owned(),
        label: series.label().to_owned(),
        color: series.color().to_owned(),
        line_path: paths.line_path,
        area_path: paths.area_path,
        line_points: paths.line_points,
    })
}
