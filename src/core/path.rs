use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::scale::Scale;
use crate::core::types::Sample;
use crate::error::{ChartError, ChartResult};

/// Vertex in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

/// Line and area descriptions for one series.
///
/// `line_path` and `area_path` use SVG path syntax with straight segments:
/// `M x0,y0 L x1,y1 ...`. The area path runs down to the baseline at the last
/// sample, back to the baseline at the first sample, and closes with `Z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPaths {
    pub line_path: String,
    pub area_path: String,
    pub line_points: Vec<PathVertex>,
}

/// Builds line and area paths for `samples` using `value_of` per sample.
///
/// Callers must not pass an empty slice; the engine renders an empty state
/// instead of calling this.
pub fn build_paths<F>(samples: &[Sample], value_of: F, scale: Scale) -> ChartResult<SeriesPaths>
where
    F: Fn(&Sample) -> f64,
{
    if samples.is_empty() {
        return Err(ChartError::InvalidData(
            "cannot build paths for an empty sample set".to_owned(),
        ));
    }

    let line_points: Vec<PathVertex> = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| PathVertex {
            x: scale.x_of(index),
            y: scale.y_of(value_of(sample)),
        })
        .collect();

    let line_path = line_path_from_vertices(&line_points);

    let baseline = scale.chart_bottom();
    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;
    let mut area_path = String::with_capacity(line_path.len() + 48);
    area_path.push_str(&line_path);
    push_command(&mut area_path, 'L', last_x, baseline);
    push_command(&mut area_path, 'L', first_x, baseline);
    area_path.push_str(" Z");

    Ok(SeriesPaths {
        line_path,
        area_path,
        line_points,
    })
}

/// Formats `vertices` as a move-to followed by line-to commands.
#[must_use]
pub fn line_path_from_vertices(vertices: &[PathVertex]) -> String {
    let mut path = String::with_capacity(vertices.len() * 18);
    for (index, vertex) in vertices.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        push_command(&mut path, command, vertex.x, vertex.y);
    }
    path
}

fn push_command(path: &mut String, command: char, x: f64, y: f64) {
    if !path.is_empty() {
        path.push(' ');
    }
    // Writing into a String cannot fail.
    let _ = write!(
        path,
        "{command} {},{}",
        format_coordinate(x),
        format_coordinate(y)
    );
}

/// Prints a coordinate with at most two decimals, trailing zeros trimmed.
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    let mut text = format!("{value:.2}");
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}
