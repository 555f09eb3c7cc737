use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Teardrop petal outline in icon space (y grows downward, apex at the bottom).
pub struct PetalShape {
    /// Y of the apex every petal rotates around.
    pub apex_y: f64,
    /// Y of the petal tip.
    pub tip_y: f64,
    /// Y of the control points near the tip.
    pub ctrl_top_y: f64,
    /// Y of the control points near the apex.
    pub ctrl_low_y: f64,
}

impl Default for PetalShape {
    fn default() -> Self {
        Self {
            apex_y: 78.0,
            tip_y: 10.0,
            ctrl_top_y: 20.0,
            ctrl_low_y: 55.0,
        }
    }
}

impl PetalShape {
    /// Pivot shared by all petals.
    pub fn apex(&self) -> Point {
        Point::new(0.0, self.apex_y)
    }

    /// Upright outline: right half from apex to tip, left half back down.
    pub fn outline(&self, ctrl_x: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.apex());
        path.curve_to(
            (ctrl_x, self.ctrl_low_y),
            (ctrl_x, self.ctrl_top_y),
            (0.0, self.tip_y),
        );
        path.curve_to(
            (-ctrl_x, self.ctrl_top_y),
            (-ctrl_x, self.ctrl_low_y),
            (0.0, self.apex_y),
        );
        path.close_path();
        path
    }

    /// Rotation by `angle_degrees` about the apex.
    pub fn rotation(&self, angle_degrees: f64) -> Affine {
        Affine::rotate_about(angle_degrees.to_radians(), self.apex())
    }

    /// Outline rotated into place.
    pub fn placed(&self, ctrl_x: f64, angle_degrees: f64) -> BezPath {
        self.rotation(angle_degrees) * self.outline(ctrl_x)
    }

    /// Tight bounds of a placed petal.
    pub fn bounds(&self, ctrl_x: f64, angle_degrees: f64) -> Rect {
        self.placed(ctrl_x, angle_degrees).bounding_box()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/petal/shape.rs"]
mod tests;
