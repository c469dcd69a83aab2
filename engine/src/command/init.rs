use super::draw_command::*;
use crate::point::*;
use crate::coordinate_system::*;

///
/// Derives the default control points for a curve from `start` to `end`
///
/// The control points are a third and two thirds of the way along the straight line between the
/// two points. This is measured in whole device pixels using the current coordinate system, so
/// the result depends on the scale and origin at the time it's called.
///
pub fn derive_control_points(start: (i32, i32), end: (i32, i32), coords: &CoordinateSystem) -> [(i32, i32); 2] {
    let (x0, y0)    = coords.to_device_point(start.0, start.1);
    let (x1, y1)    = coords.to_device_point(end.0, end.1);
    let (x0, y0)    = (x0 as i64, y0 as i64);
    let (x1, y1)    = (x1 as i64, y1 as i64);

    let x_diff      = (x1 - x0) / 3;
    let y_diff      = (y1 - y0) / 3;

    [
        coords.from_device((x0 + x_diff) as f64, (y0 + y_diff) as f64),
        coords.from_device((x1 - x_diff) as f64, (y1 - y_diff) as f64)
    ]
}

impl DrawCommand {
    ///
    /// The control points this command is drawn with, given the main point of the command before it
    ///
    /// These are the actual control points for an initialized command, and the derived ones for a
    /// command whose control points have not been generated yet. Moves and lines have none.
    ///
    pub fn effective_control_points(&self, start: (i32, i32), coords: &CoordinateSystem) -> Vec<(i32, i32)> {
        if self.is_initialized() {
            self.control_points().iter().map(|point| point.position()).collect()
        } else {
            derive_control_points(start, self.main_point.position(), coords).to_vec()
        }
    }

    ///
    /// Generates the control points for a curve or spline that doesn't have any
    ///
    /// `start` is the position of the main point of the preceding command. Returns true if new
    /// control points were generated: commands that are already initialized are left alone.
    ///
    pub fn initialize(&mut self, start: (i32, i32), coords: &CoordinateSystem) -> bool {
        if self.is_initialized() {
            return false;
        }

        let id                  = self.id;
        let [(x1, y1), (x2, y2)] = derive_control_points(start, self.main_point.position(), coords);
        let derived             = [DrawPoint::control(x1, y1, 1, id), DrawPoint::control(x2, y2, 2, id)];

        match &mut self.shape {
            CommandShape::CubicCurve { controls, .. }   => { *controls = Some(derived); }
            CommandShape::Spline { controls, .. }       => { *controls = derived.to_vec(); }
            CommandShape::Move | CommandShape::Line     => { return false; }
        }

        trace!("Derived control points ({}, {}) ({}, {}) for {}", x1, y1, x2, y2, id);

        true
    }
}
