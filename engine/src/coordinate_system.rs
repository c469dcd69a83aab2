///
/// The smallest scale a viewport should set when it rescales a coordinate system
///
pub const MINIMUM_SCALE: f64 = 0.01;

///
/// Maps the integer 'logical' coordinates used by drawing commands onto 'device' coordinates
/// (the coordinates a renderer draws in)
///
/// A single coordinate system is shared by every point in a command sequence. Conversions
/// always use the settings at the time they're called, so changing the scale or origin changes
/// the result of any later derivation.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CoordinateSystem {
    /// Number of device units per logical unit
    pub scale: f64,

    /// Device position of the logical origin
    pub origin_x: f64,
    pub origin_y: f64
}

impl Default for CoordinateSystem {
    fn default() -> CoordinateSystem {
        CoordinateSystem::new(1.0, 0.0, 0.0)
    }
}

impl CoordinateSystem {
    ///
    /// Creates a new coordinate system
    ///
    pub fn new(scale: f64, origin_x: f64, origin_y: f64) -> CoordinateSystem {
        CoordinateSystem { scale, origin_x, origin_y }
    }

    ///
    /// Replaces all of the settings of this coordinate system at once
    ///
    pub fn set(&mut self, scale: f64, origin_x: f64, origin_y: f64) {
        *self = CoordinateSystem::new(scale, origin_x, origin_y);
    }

    ///
    /// Returns a copy of this coordinate system with a new scale, which is never allowed to fall below `MINIMUM_SCALE`
    ///
    pub fn with_scale_clamped(&self, scale: f64) -> CoordinateSystem {
        CoordinateSystem { scale: scale.max(MINIMUM_SCALE), ..*self }
    }

    ///
    /// Converts a logical coordinate to a device coordinate
    ///
    #[inline]
    pub fn to_device(&self, x: i32, y: i32) -> (f64, f64) {
        (self.origin_x + (x as f64) * self.scale, self.origin_y + (y as f64) * self.scale)
    }

    ///
    /// Converts a logical coordinate to a whole device pixel (truncating any fractional part)
    ///
    #[inline]
    pub fn to_device_point(&self, x: i32, y: i32) -> (i32, i32) {
        let (x, y) = self.to_device(x, y);

        (x as i32, y as i32)
    }

    ///
    /// Returns the logical coordinate nearest to a device coordinate
    ///
    #[inline]
    pub fn from_device(&self, x: f64, y: f64) -> (i32, i32) {
        (
            ((x - self.origin_x) / self.scale + 0.5).floor() as i32,
            ((y - self.origin_y) / self.scale + 0.5).floor() as i32
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn device_round_trip() {
        let coords = CoordinateSystem::new(2.5, 100.0, -40.0);

        for (x, y) in vec![(0, 0), (10, -3), (-250, 17)] {
            let (dx, dy) = coords.to_device(x, y);
            assert!(coords.from_device(dx, dy) == (x, y));
        }
    }

    #[test]
    fn from_device_rounds_to_nearest() {
        let coords = CoordinateSystem::new(10.0, 0.0, 0.0);

        assert!(coords.from_device(14.0, 15.0) == (1, 2));
        assert!(coords.from_device(-14.0, -16.0) == (-1, -2));
    }

    #[test]
    fn device_point_truncates() {
        let coords = CoordinateSystem::new(1.5, 0.25, 0.0);

        assert!(coords.to_device_point(3, 1) == (4, 1));
    }

    #[test]
    fn clamp_scale() {
        let coords = CoordinateSystem::new(1.0, 5.0, 6.0).with_scale_clamped(0.0001);

        assert!(coords.scale == MINIMUM_SCALE);
        assert!(coords.origin_x == 5.0);
        assert!(coords.origin_y == 6.0);
    }
}
