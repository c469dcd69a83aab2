use super::*;
use crate::point::*;

///
/// An affine transformation applied to the points of a drawing
///
/// Points are transformed by `matrix * (point - origin) + target`, and the result is truncated
/// to whole logical units.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PointTransform {
    /// The 2x2 matrix `[[m11, m12], [m21, m22]]`
    pub matrix: [[f64; 2]; 2],

    /// The point that's moved to the origin before applying the matrix
    pub origin: (f64, f64),

    /// The offset added after applying the matrix
    pub target: (f64, f64)
}

impl PointTransform {
    ///
    /// Creates a transformation from its matrix, origin and target
    ///
    pub fn new(m11: f64, m12: f64, m21: f64, m22: f64, origin_x: f64, origin_y: f64, target_x: f64, target_y: f64) -> PointTransform {
        PointTransform {
            matrix: [[m11, m12], [m21, m22]],
            origin: (origin_x, origin_y),
            target: (target_x, target_y)
        }
    }

    ///
    /// The transformation that leaves every point where it is
    ///
    pub fn identity() -> PointTransform {
        PointTransform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0)
    }

    ///
    /// Scales about a fixed point
    ///
    pub fn scale(scale_x: f64, scale_y: f64, about: (f64, f64)) -> PointTransform {
        PointTransform::new(scale_x, 0.0, 0.0, scale_y, about.0, about.1, about.0, about.1)
    }

    ///
    /// Rotates (clockwise, as y increases downwards in drawing coordinates) about a fixed point
    ///
    pub fn rotate(radians: f64, about: (f64, f64)) -> PointTransform {
        let (sin, cos) = radians.sin_cos();

        PointTransform::new(cos, -sin, sin, cos, about.0, about.1, about.0, about.1)
    }

    ///
    /// Applies this transformation to a logical coordinate
    ///
    pub fn transform_point(&self, x: i32, y: i32) -> (i32, i32) {
        let PointTransform { matrix: m, origin, target } = self;

        let x = (x as f64) - origin.0;
        let y = (y as f64) - origin.1;

        (
            (x*m[0][0] + y*m[0][1] + target.0) as i32,
            (x*m[1][0] + y*m[1][1] + target.1) as i32
        )
    }
}

impl CommandSequence {
    ///
    /// Moves every point in this drawing by the specified offset
    ///
    /// Coordinates wrap around if they move past the limits of an `i32`.
    ///
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for command in self.commands.iter_mut() {
            command.for_each_point_mut(|point| point.set_position(point.x.wrapping_add(dx), point.y.wrapping_add(dy)));
        }
    }

    ///
    /// Applies a transformation to every point in this drawing
    ///
    pub fn transform(&mut self, transform: &PointTransform) {
        for command in self.commands.iter_mut() {
            command.for_each_point_mut(|point| {
                let (x, y) = transform.transform_point(point.x, point.y);
                point.set_position(x, y);
            });
        }
    }

    ///
    /// Transforms every point in this drawing by `| m11 m12 | * (p - (origin_x, origin_y)) + (target_x, target_y)`
    ///                                              `| m21 m22 |`
    ///
    pub fn affine_transform(&mut self, m11: f64, m12: f64, m21: f64, m22: f64, origin_x: f64, origin_y: f64, target_x: f64, target_y: f64) {
        self.transform(&PointTransform::new(m11, m12, m21, m22, origin_x, origin_y, target_x, target_y));
    }

    ///
    /// Finds the command whose main point is at the specified position
    ///
    /// If several commands have a main point here, the last one in the drawing is returned.
    ///
    pub fn point_at(&self, x: i32, y: i32) -> Option<&DrawCommand> {
        self.commands.iter()
            .rev()
            .find(|command| command.main_point.is_at(x, y))
    }

    ///
    /// Finds a control point at the specified position, along with the command that it belongs to
    ///
    /// If several control points are here, the last one in the drawing is returned.
    ///
    pub fn control_at(&self, x: i32, y: i32) -> Option<(&DrawCommand, &DrawPoint)> {
        self.commands.iter()
            .flat_map(|command| command.control_points().iter().map(move |point| (command, point)))
            .filter(|(_command, point)| point.is_at(x, y))
            .last()
    }

    ///
    /// Generates the control points for a curve or spline if they haven't been specified yet
    ///
    /// Returns true if control points were generated. Commands that are already initialized, and
    /// commands with no predecessor, are left as they are.
    ///
    pub fn initialize(&mut self, id: CommandId) -> bool {
        let coords  = self.coordinate_system.get();
        let idx     = match self.index_of(id) {
            Some(idx)   => idx,
            None        => { return false; }
        };

        if idx == 0 {
            return false;
        }

        debug_assert!(self.commands[idx].previous == Some(self.commands[idx-1].id));

        let start = self.commands[idx-1].main_point.position();
        self.commands[idx].initialize(start, &coords)
    }

    ///
    /// Generates control points for every curve or spline that doesn't have any, returning the number of commands that were initialized
    ///
    pub fn initialize_all(&mut self) -> usize {
        let coords          = self.coordinate_system.get();
        let mut count       = 0;

        for idx in 1..self.commands.len() {
            let start = self.commands[idx-1].main_point.position();

            if self.commands[idx].initialize(start, &coords) {
                count += 1;
            }
        }

        count
    }
}
