use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::interaction::ChartState;
use crate::render::{ChartFrame, Color, Renderer};

const GRID_COLOR: Color = Color::rgb(0.90, 0.91, 0.93);
const AXIS_TEXT_COLOR: Color = Color::rgb(0.42, 0.45, 0.50);
const GUIDE_COLOR: Color = Color::rgba(0.42, 0.45, 0.50, 0.6);
const TOOLTIP_FILL: Color = Color::rgba(0.07, 0.09, 0.15, 0.92);
const TOOLTIP_TEXT: Color = Color::rgb(1.0, 1.0, 1.0);
const FALLBACK_SERIES_COLORS: [Color; 4] = [
    Color::rgb(0.31, 0.27, 0.90),
    Color::rgb(0.06, 0.73, 0.51),
    Color::rgb(0.96, 0.62, 0.04),
    Color::rgb(0.94, 0.27, 0.27),
];
const AREA_ALPHA: f64 = 0.15;
const LINE_WIDTH: f64 = 2.0;
const FONT_SIZE_PX: f64 = 11.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub gridlines_drawn: usize,
    pub series_drawn: usize,
    pub texts_drawn: usize,
    pub tooltip_drawn: bool,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &ChartFrame)
    -> ChartResult<()>;
}

/// Cairo + Pango raster backend for chart frames.
///
/// Draw order: gridlines and value labels, date labels, then each series'
/// area and line in declaration order, hover guide, tooltip.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        if frame.state == ChartState::Empty {
            self.last_stats = stats;
            return Ok(());
        }

        let plot = frame.geometry.plot_area();
        context.set_line_width(1.0);
        for tick in &frame.ticks {
            apply_color(context, GRID_COLOR);
            context.move_to(plot.left, tick.pixel_y);
            context.line_to(plot.right, tick.pixel_y);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke gridline", err))?;
            stats.gridlines_drawn += 1;

            draw_text(
                context,
                &tick.label,
                plot.left - 8.0,
                tick.pixel_y - FONT_SIZE_PX / 2.0,
                TextAnchor::End,
                AXIS_TEXT_COLOR,
            );
            stats.texts_drawn += 1;
        }

        for tick in &frame.x_ticks {
            draw_text(
                context,
                &tick.label,
                tick.pixel_x,
                plot.bottom + 8.0,
                TextAnchor::Middle,
                AXIS_TEXT_COLOR,
            );
            stats.texts_drawn += 1;
        }

        // Earlier series draw underneath later ones, fill and stroke alike.
        for (index, series) in frame.series.iter().enumerate() {
            let Some((first, rest)) = series.line_points.split_first() else {
                continue;
            };
            let color = resolve_series_color(index, &series.key, &series.color);

            let last = rest.last().unwrap_or(first);
            context.move_to(first.x, first.y);
            for vertex in rest {
                context.line_to(vertex.x, vertex.y);
            }
            context.line_to(last.x, plot.bottom);
            context.line_to(first.x, plot.bottom);
            context.close_path();
            apply_color(context, color.with_alpha(AREA_ALPHA));
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill series area", err))?;

            context.set_line_width(LINE_WIDTH);
            context.move_to(first.x, first.y);
            for vertex in rest {
                context.line_to(vertex.x, vertex.y);
            }
            apply_color(context, color);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke series line", err))?;
            stats.series_drawn += 1;
        }

        if let Some(guide) = frame.hover_guide {
            context.set_line_width(1.0);
            apply_color(context, GUIDE_COLOR);
            context.move_to(guide.pixel_x, guide.top);
            context.line_to(guide.pixel_x, guide.bottom);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke hover guide", err))?;
        }

        if let Some(tooltip) = &frame.tooltip {
            apply_color(context, TOOLTIP_FILL);
            context.rectangle(
                tooltip.pixel_x,
                tooltip.pixel_y,
                tooltip.width,
                tooltip.height,
            );
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill tooltip", err))?;

            let line_height = FONT_SIZE_PX + 4.0;
            let left = tooltip.pixel_x + 8.0;
            let mut y = tooltip.pixel_y + 6.0;
            draw_text(
                context,
                &tooltip.content.title,
                left,
                y,
                TextAnchor::Start,
                TOOLTIP_TEXT,
            );
            stats.texts_drawn += 1;
            for row in &tooltip.content.rows {
                y += line_height;
                if y + line_height > tooltip.pixel_y + tooltip.height {
                    break;
                }
                let text = format!("{}: {}", row.label, row.value_label);
                draw_text(context, &text, left, y, TextAnchor::Start, TOOLTIP_TEXT);
                stats.texts_drawn += 1;
            }
            stats.tooltip_drawn = true;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &ChartFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

#[derive(Debug, Clone, Copy)]
enum TextAnchor {
    Start,
    Middle,
    End,
}

fn draw_text(context: &Context, text: &str, x: f64, y: f64, anchor: TextAnchor, color: Color) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {FONT_SIZE_PX}px"));
    layout.set_font_description(Some(&font_description));
    layout.set_text(text);

    let (text_width, _) = layout.pixel_size();
    let x = match anchor {
        TextAnchor::Start => x,
        TextAnchor::Middle => x - f64::from(text_width) / 2.0,
        TextAnchor::End => x - f64::from(text_width),
    };

    apply_color(context, color);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

/// Parses a series color token; tokens that are not `#hex` get a palette color.
fn resolve_series_color(index: usize, key: &str, token: &str) -> Color {
    Color::from_hex(token).unwrap_or_else(|_| {
        warn!(key, token, "unsupported series color token, using fallback");
        FALLBACK_SERIES_COLORS[index % FALLBACK_SERIES_COLORS.len()]
    })
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
