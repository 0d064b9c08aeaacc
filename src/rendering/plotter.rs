use glam::{Vec2, Vec3};
use std::path::{Path, PathBuf};
use tiny_skia::*;
use tracing::debug;

use crate::rendering::types::PlotConfig;
use crate::utils::errors::SimError;
use crate::utils::TrajectoryMatrix;

/// Consumer of a recorded `(x, y, theta)` trajectory.
pub trait TrajectoryPlotter {
    fn plot(&mut self, trajectory: &TrajectoryMatrix) -> Result<(), SimError>;
}

/// Renders the trajectory as a 3-D curve (oblique projection) into a PNG file.
pub struct PngPlotter {
    config: PlotConfig,
    path: PathBuf,
}

impl PngPlotter {
    pub fn new<P: AsRef<Path>>(path: P, config: PlotConfig) -> Self {
        Self {
            config,
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rasterize the trajectory without touching the filesystem.
    pub fn render(&self, trajectory: &TrajectoryMatrix) -> Result<Pixmap, SimError> {
        if trajectory.ncols() == 0 {
            return Err(SimError::RenderError(
                "No trajectory samples to plot".into(),
            ));
        }

        let mut canvas = self.create_canvas()?;
        let [r, g, b, a] = self.config.background;
        canvas.fill(Color::from_rgba8(r, g, b, a));

        let projected: Vec<Vec2> = trajectory
            .column_iter()
            .map(|c| self.project(Vec3::new(c[0] as f32, c[1] as f32, c[2] as f32)))
            .collect();
        let screen_points = self.fit_to_canvas(&projected);

        self.draw_trace(&mut canvas, &screen_points)?;
        self.draw_marker(&mut canvas, screen_points[0], [0, 255, 0, 200])?;
        self.draw_marker(&mut canvas, screen_points[screen_points.len() - 1], [0, 0, 255, 200])?;

        debug!("Rendered trajectory with {} samples", screen_points.len());
        Ok(canvas)
    }

    fn create_canvas(&self) -> Result<Pixmap, SimError> {
        Pixmap::new(
            self.config.screen_dims.x as u32,
            self.config.screen_dims.y as u32,
        )
        .ok_or_else(|| SimError::RenderError("Failed to create canvas".into()))
    }

    /// Oblique projection: x to the right, y up, theta along a slanted axis.
    fn project(&self, point: Vec3) -> Vec2 {
        let theta_axis = Vec2::new(
            self.config.theta_axis_angle.cos(),
            self.config.theta_axis_angle.sin(),
        ) * self.config.theta_axis_scale;

        Vec2::new(point.x, point.y) + theta_axis * point.z
    }

    /// Scale uniformly into the canvas, flipping y so up is up on screen.
    fn fit_to_canvas(&self, points: &[Vec2]) -> Vec<Vec2> {
        let min = points.iter().fold(Vec2::splat(f32::INFINITY), |acc, p| acc.min(*p));
        let max = points
            .iter()
            .fold(Vec2::splat(f32::NEG_INFINITY), |acc, p| acc.max(*p));

        let usable = self.config.screen_dims - Vec2::splat(2.0 * self.config.margin);
        let extent = (max - min).max(Vec2::splat(f32::EPSILON));
        let scale = (usable.x / extent.x).min(usable.y / extent.y);
        let offset = (usable - extent * scale) / 2.0 + Vec2::splat(self.config.margin);

        points
            .iter()
            .map(|p| {
                let local = (*p - min) * scale;
                Vec2::new(
                    offset.x + local.x,
                    self.config.screen_dims.y - (offset.y + local.y),
                )
            })
            .collect()
    }

    fn draw_trace(&self, canvas: &mut Pixmap, points: &[Vec2]) -> Result<(), SimError> {
        if points.len() < 2 {
            return Ok(());
        }

        let trace_path = {
            let mut pb = PathBuilder::new();
            pb.move_to(points[0].x, points[0].y);
            for point in &points[1..] {
                pb.line_to(point.x, point.y);
            }
            pb.finish()
                .ok_or_else(|| SimError::RenderError("Failed to build trajectory path".into()))?
        };

        let mut stroke = Stroke::default();
        stroke.width = self.config.line_width;
        stroke.line_cap = LineCap::Round;
        stroke.line_join = LineJoin::Round;

        let [r, g, b, a] = self.config.trace_color;
        let mut trace_paint = Paint::default();
        trace_paint.set_color_rgba8(r, g, b, a);
        trace_paint.anti_alias = true;

        canvas.stroke_path(
            &trace_path,
            &trace_paint,
            &stroke,
            Transform::identity(),
            None,
        );

        Ok(())
    }

    fn draw_marker(&self, canvas: &mut Pixmap, at: Vec2, rgba: [u8; 4]) -> Result<(), SimError> {
        let mut marker_paint = Paint::default();
        marker_paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
        marker_paint.anti_alias = true;

        let marker = PathBuilder::from_circle(at.x, at.y, 3.0 * self.config.line_width)
            .ok_or_else(|| SimError::RenderError("Failed to build marker".into()))?;
        canvas.fill_path(
            &marker,
            &marker_paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );

        Ok(())
    }
}

impl TrajectoryPlotter for PngPlotter {
    fn plot(&mut self, trajectory: &TrajectoryMatrix) -> Result<(), SimError> {
        let canvas = self.render(trajectory)?;
        canvas
            .save_png(&self.path)
            .map_err(|e| SimError::RenderError(e.to_string()))?;
        debug!("Trajectory plot saved to {}", self.path.display());
        Ok(())
    }
}
