use serde::Serialize;
use std::f64::consts::PI;

use crate::stats::{top_skills, DashboardStats, SkillCount};

pub const TOP_N: usize = 5;
pub const CHART_SIZE: f64 = 120.0;
pub const CENTER_X: f64 = 60.0;
pub const CENTER_Y: f64 = 60.0;
pub const OUTER_RADIUS: f64 = 50.0;
pub const INNER_RADIUS: f64 = 30.0;
pub const PALETTE: [&str; TOP_N] = ["#22c55e", "#3b82f6", "#f59e0b", "#ef4444", "#8b5cf6"];
const SLICE_OPACITY: f64 = 0.8;

/// A full-circle slice would start and end on the same point and render as
/// nothing, so its drawn sweep stops just short of 360.
const MAX_DRAWN_SWEEP: f64 = 359.99;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DonutArc {
    pub skill: String,
    pub count: usize,
    pub color: String,
    pub fraction: f64,
    /// Degrees, clockwise from 3 o'clock
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub large_arc: bool,
    /// SVG path data for the ring segment
    pub path: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DonutChart {
    pub arcs: Vec<DonutArc>,
    /// Number shown in the hole of the donut
    pub total_label: usize,
}

impl DonutChart {
    /// Chart of the five most frequent skills. The centre label counts every tag.
    pub fn from_stats(stats: &DashboardStats) -> Self {
        render_donut(&top_skills(&stats.skills, TOP_N), stats.total_tags)
    }

    /// Standalone SVG. Rotated so the first slice starts at 12 o'clock.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}"><g transform="rotate(-90 {1} {2})">"#,
            CHART_SIZE, CENTER_X, CENTER_Y
        );
        for arc in &self.arcs {
            svg.push_str(&format!(
                r#"<path d="{}" fill="{}" opacity="{}"/>"#,
                arc.path, arc.color, SLICE_OPACITY
            ));
        }
        svg.push_str(&format!(
            r#"</g><text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle">{}</text></svg>"#,
            CENTER_X, CENTER_Y, self.total_label
        ));
        svg
    }
}

fn polar(radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees * PI / 180.0;
    (CENTER_X + radius * radians.cos(), CENTER_Y + radius * radians.sin())
}

fn ring_segment_path(start_angle: f64, sweep_angle: f64, large_arc: bool) -> String {
    let end_angle = start_angle + sweep_angle.min(MAX_DRAWN_SWEEP);
    let flag = u8::from(large_arc);

    let (x1, y1) = polar(OUTER_RADIUS, start_angle);
    let (x2, y2) = polar(OUTER_RADIUS, end_angle);
    let (x3, y3) = polar(INNER_RADIUS, end_angle);
    let (x4, y4) = polar(INNER_RADIUS, start_angle);

    format!(
        "M {:.3} {:.3} A {} {} 0 {} 1 {:.3} {:.3} L {:.3} {:.3} A {} {} 0 {} 0 {:.3} {:.3} Z",
        x1, y1, OUTER_RADIUS, OUTER_RADIUS, flag, x2, y2, x3, y3, INNER_RADIUS, INNER_RADIUS, flag, x4, y4
    )
}

/// Lay out ring segments for up to five buckets.
///
/// Each bucket gets `count / sum * 360` degrees, starting where the previous
/// one ended. A zero sum draws nothing and labels the chart 0.
pub fn render_donut(buckets: &[SkillCount], total_label: usize) -> DonutChart {
    let buckets = &buckets[..buckets.len().min(TOP_N)];
    let sum: usize = buckets.iter().map(|b| b.count).sum();

    if sum == 0 {
        return DonutChart {
            arcs: Vec::new(),
            total_label: 0,
        };
    }

    let mut current_angle = 0.0;
    let arcs = buckets
        .iter()
        .zip(PALETTE)
        .map(|(bucket, color)| {
            let fraction = bucket.count as f64 / sum as f64;
            let sweep_angle = fraction * 360.0;
            let large_arc = sweep_angle > 180.0;
            let arc = DonutArc {
                skill: bucket.skill.clone(),
                count: bucket.count,
                color: color.to_string(),
                fraction,
                start_angle: current_angle,
                sweep_angle,
                large_arc,
                path: ring_segment_path(current_angle, sweep_angle, large_arc),
            };
            current_angle += sweep_angle;
            arc
        })
        .collect();

    DonutChart { arcs, total_label }
}
