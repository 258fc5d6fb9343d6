//! Geometry for the summary radar chart, drawn on a ratatui canvas.
//! Axis 0 points straight up and axes proceed clockwise; radius maps the
//! 0-100 percentile scale.

/// Radius of the 100th-percentile ring in canvas units
pub const FULL_SCALE: f64 = 100.0;

/// Distance of the axis labels from the center
pub const LABEL_RADIUS: f64 = 118.0;

/// Canvas position of `radius` on axis `axis` of `axes`
pub fn polar(axis: usize, axes: usize, radius: f64) -> (f64, f64) {
    let step = std::f64::consts::TAU / axes as f64;
    let angle = std::f64::consts::FRAC_PI_2 - step * axis as f64;
    (radius * angle.cos(), radius * angle.sin())
}

/// Closed polygon at `radius`, used for the grid rings
pub fn ring(axes: usize, radius: f64) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = (0..axes).map(|i| polar(i, axes, radius)).collect();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

/// Marker positions for the answered axes of one series
pub fn series_points(values: &[Option<f64>]) -> Vec<(f64, f64)> {
    let axes = values.len();
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|r| polar(i, axes, r.clamp(0.0, FULL_SCALE))))
        .collect()
}

/// Polyline segments of one series. A gap (None) breaks the line instead of
/// interpolating across it; when both the first and last axes are answered
/// the boundary edge is drawn, closing the polygon in the gap-free case.
pub fn series_segments(values: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let axes = values.len();
    let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for (i, value) in values.iter().enumerate() {
        match value {
            Some(r) => current.push(polar(i, axes, r.clamp(0.0, FULL_SCALE))),
            None => {
                if current.len() > 1 {
                    segments.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() > 1 {
        segments.push(current);
    }

    // wrap the boundary edge between the last and first axis
    if let (true, Some(first), Some(last)) = (axes > 1, values[0], values[axes - 1]) {
        let first_point = polar(0, axes, first.clamp(0.0, FULL_SCALE));
        let last_point = polar(axes - 1, axes, last.clamp(0.0, FULL_SCALE));
        match segments.last_mut() {
            // the last run reaches the final axis: extend it across the seam
            Some(segment) if segment.last() == Some(&last_point) => segment.push(first_point),
            // both endpoints answered but isolated: the seam is its own edge
            _ => segments.push(vec![last_point, first_point]),
        }
    }

    segments
}
