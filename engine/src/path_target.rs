use super::command::*;
use super::sequence::*;
use super::coordinate_system::*;

use flo_curves::*;
use flo_curves::bezier::*;
use itertools::Itertools;

///
/// Trait implemented by things that can receive a drawing as a path (renderers, bounds calculations, etc)
///
pub trait PathTarget {
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64);
    fn close_path(&mut self);
}

///
/// A single element of a drawing path
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PathSegment {
    Move(Coord2),
    Line(Coord2),

    /// Control point 1, control point 2, end point
    BezierCurve(Coord2, Coord2, Coord2),

    Close
}

impl PathTarget for Vec<PathSegment> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push(PathSegment::Move(Coord2(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(PathSegment::Line(Coord2(x, y)));
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.push(PathSegment::BezierCurve(Coord2(x1, y1), Coord2(x2, y2), Coord2(x3, y3)));
    }

    fn close_path(&mut self) {
        self.push(PathSegment::Close);
    }
}

///
/// Converts one span of a uniform cubic B-spline to the equivalent bezier curve (start, control point 1, control point 2, end)
///
fn bspline_span_to_bezier(p0: Coord2, p1: Coord2, p2: Coord2, p3: Coord2) -> (Coord2, Coord2, Coord2, Coord2) {
    let start   = Coord2((p0.0 + 4.0*p1.0 + p2.0) / 6.0, (p0.1 + 4.0*p1.1 + p2.1) / 6.0);
    let cp1     = Coord2((2.0*p1.0 + p2.0) / 3.0, (2.0*p1.1 + p2.1) / 3.0);
    let cp2     = Coord2((p1.0 + 2.0*p2.0) / 3.0, (p1.1 + 2.0*p2.1) / 3.0);
    let end     = Coord2((p1.0 + 4.0*p2.0 + p3.0) / 6.0, (p1.1 + 4.0*p2.1 + p3.1) / 6.0);

    (start, cp1, cp2, end)
}

///
/// Sends a spline to a path target
///
/// The B-spline is formed from the control points alone: the path then runs in a straight line
/// to the spline's main point. Closed splines wrap around to their first control points. With
/// too few control points for a span, the path just visits each one.
///
fn draw_spline<Target: PathTarget>(target: &mut Target, mut controls: Vec<Coord2>, end_point: Coord2, closed: bool) {
    if controls.len() < 4 {
        controls.iter().for_each(|point| target.line_to(point.0, point.1));
    } else {
        if closed {
            let wrap = controls.iter().take(3).cloned().collect::<Vec<_>>();
            controls.extend(wrap);
        }

        let spans = controls.into_iter()
            .tuple_windows()
            .map(|(p0, p1, p2, p3)| bspline_span_to_bezier(p0, p1, p2, p3))
            .collect::<Vec<_>>();

        if let Some((start, _, _, _)) = spans.first() {
            target.line_to(start.0, start.1);
        }

        for (_start, cp1, cp2, end) in spans {
            target.bezier_curve_to(cp1.0, cp1.1, cp2.0, cp2.1, end.0, end.1);
        }
    }

    target.line_to(end_point.0, end_point.1);

    if closed {
        target.close_path();
    }
}

impl CommandSequence {
    ///
    /// Sends this drawing to a path target in device coordinates
    ///
    /// Curves and splines that don't have control points yet are drawn with the control points
    /// that would be derived for them.
    ///
    pub fn draw_path<Target: PathTarget>(&self, target: &mut Target) {
        let coords = self.coordinate_system();
        self.draw_path_in(target, &coords);
    }

    ///
    /// Sends this drawing to a path target, using a particular coordinate system for the output
    ///
    /// (The coordinate system of this sequence is still used when deriving missing control points)
    ///
    pub fn draw_path_in<Target: PathTarget>(&self, target: &mut Target, output_coords: &CoordinateSystem) {
        let coords          = self.coordinate_system();
        let to_output       = |(x, y): (i32, i32)| { let (x, y) = output_coords.to_device(x, y); Coord2(x, y) };
        let mut last_point  = None;

        for command in self.iter() {
            let end     = command.main_point().position();
            let start   = last_point.unwrap_or(end);

            match command.shape() {
                CommandShape::Move                  => { let Coord2(x, y) = to_output(end); target.move_to(x, y); }
                CommandShape::Line                  => { let Coord2(x, y) = to_output(end); target.line_to(x, y); }

                CommandShape::CubicCurve { .. }     => {
                    let controls    = command.effective_control_points(start, &coords);
                    let cp1         = to_output(controls[0]);
                    let cp2         = to_output(controls[1]);
                    let end         = to_output(end);

                    target.bezier_curve_to(cp1.0, cp1.1, cp2.0, cp2.1, end.0, end.1);
                }

                CommandShape::Spline { closed, .. } => {
                    let controls    = command.effective_control_points(start, &coords)
                        .into_iter()
                        .map(|point| to_output(point))
                        .collect();

                    draw_spline(target, controls, to_output(end), *closed);
                }
            }

            last_point = Some(end);
        }
    }

    ///
    /// The path segments for this drawing in logical coordinates
    ///
    pub fn path_segments(&self) -> Vec<PathSegment> {
        let mut segments = vec![];
        self.draw_path_in(&mut segments, &CoordinateSystem::default());

        segments
    }

    ///
    /// The bounding box of this drawing in logical coordinates (as min, max), or None for an empty drawing
    ///
    pub fn bounds(&self) -> Option<(Coord2, Coord2)> {
        let mut bounds: Option<(Coord2, Coord2)>    = None;
        let mut current                             = Coord2(0.0, 0.0);

        for segment in self.path_segments() {
            let (min, max) = match segment {
                PathSegment::Close                                  => { continue; }

                PathSegment::Move(point) | PathSegment::Line(point) => (point, point),

                PathSegment::BezierCurve(cp1, cp2, end)             => {
                    let curve           = Curve::from_points(current, (cp1, cp2), end);
                    let curve_bounds    = curve.bounding_box::<Bounds<Coord2>>();

                    (curve_bounds.min(), curve_bounds.max())
                }
            };

            current = match segment {
                PathSegment::Move(point) | PathSegment::Line(point) => point,
                PathSegment::BezierCurve(_, _, end)                 => end,
                PathSegment::Close                                  => current
            };

            bounds = Some(match bounds {
                None                        => (min, max),
                Some((old_min, old_max))    => (Coord2::from_smallest_components(old_min, min), Coord2::from_biggest_components(old_max, max))
            });
        }

        bounds
    }
}
