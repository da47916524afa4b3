//! Polygon paths: vertex placement on a circle, then an affine fit into the
//! tile's bounding box.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::geometry::{Point, Rect};
use crate::kind::{clamp_sides, PolygonKind};

/// Scale factors this close to 1 leave the path untouched.
pub const SCALE_TOLERANCE: f64 = 1e-6;
/// Rotations within this many degrees of a whole turn leave the path untouched.
pub const ROTATION_TOLERANCE_DEGREES: f64 = 0.01;

/// A 2D affine transform `(x, y) -> (a*x + c*y + tx, b*x + d*y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    /// Rotation about the origin.
    pub fn rotation(angle: Angle) -> Self {
        let (sin, cos) = angle.radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn apply(&self, p: &Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }
}

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// A sequence of straight segments, independent of any host drawing API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BezierPath {
    elements: Vec<PathElement>,
}

impl BezierPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed four-corner path tracing `rect` clockwise from its top-left.
    pub fn from_rect(rect: Rect) -> Self {
        let mut path = Self::new();
        path.move_to(Point::new(rect.min_x(), rect.min_y()));
        path.line_to(Point::new(rect.max_x(), rect.min_y()));
        path.line_to(Point::new(rect.max_x(), rect.max_y()));
        path.line_to(Point::new(rect.min_x(), rect.max_y()));
        path.close();
        path
    }

    pub fn move_to(&mut self, p: Point) {
        self.elements.push(PathElement::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.elements.push(PathElement::LineTo(p));
    }

    pub fn close(&mut self) {
        self.elements.push(PathElement::Close);
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn vertices(&self) -> Vec<Point> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                PathElement::MoveTo(p) | PathElement::LineTo(p) => Some(*p),
                PathElement::Close => None,
            })
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.elements.last(), Some(PathElement::Close))
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Bounds of all vertices; a zero rect for an empty path.
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_points(&self.vertices()).unwrap_or_default()
    }

    pub fn transform(&self, t: &AffineTransform) -> BezierPath {
        let elements = self
            .elements
            .iter()
            .map(|e| match e {
                PathElement::MoveTo(p) => PathElement::MoveTo(t.apply(p)),
                PathElement::LineTo(p) => PathElement::LineTo(t.apply(p)),
                PathElement::Close => PathElement::Close,
            })
            .collect();
        BezierPath { elements }
    }

    /// Flat `[x0, y0, x1, y1, ...]` vertex list.
    pub fn to_flat_vertices(&self) -> Vec<f64> {
        self.vertices().iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

/// Place `sides` vertices evenly on a circle, starting at `rotation`, and
/// close the path. `sides` is clamped into `[MIN_SIDES, MAX_SIDES]`.
///
/// A negative radius puts every vertex on the opposite side of the center.
pub fn initial_polygon_path(sides: usize, center: Point, radius: f64, rotation: Angle) -> BezierPath {
    let sides = clamp_sides(sides);
    let mut path = BezierPath::new();
    let slice = 2.0 * PI / sides as f64;
    for i in 0..sides {
        let theta = i as f64 * slice + rotation.radians;
        let vertex = Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin());
        if i == 0 {
            path.move_to(vertex);
        } else {
            path.line_to(vertex);
        }
    }
    path.close();
    path
}

/// The unscaled path for `kind`, rotated by its initial rotation plus
/// `extra_rotation`.
pub fn initial_path(kind: PolygonKind, center: Point, radius: f64, extra_rotation: Angle) -> BezierPath {
    initial_polygon_path(kind.sides(), center, radius, kind.initial_rotation() + extra_rotation)
}

/// The unscaled path for one tile. `rotation` is the full rotation, as
/// reported by the tile's layout metrics. Rectangles are not equilateral and
/// simply trace their bounding rect.
pub fn polygon_path(
    kind: PolygonKind,
    bounding_rect: Rect,
    center: Point,
    radius: f64,
    rotation: Angle,
) -> BezierPath {
    match kind {
        PolygonKind::EquilateralTriangle { .. }
        | PolygonKind::Square { .. }
        | PolygonKind::Hexagon { .. }
        | PolygonKind::Octagon { .. } => initial_polygon_path(kind.sides(), center, radius, rotation),
        PolygonKind::Rectangle { .. } => BezierPath::from_rect(bounding_rect),
    }
}

/// Uniformly scale `path` until its bounds touch `rect` on at least two sides.
///
/// Scaling is about the origin, which moves the shape; with `recenter` the
/// result is translated back so its bounds are centered on `original_center`.
pub fn scale(path: &BezierPath, rect: Rect, original_center: Point, recenter: bool) -> BezierPath {
    scale_with_border(path, rect, original_center, recenter, 0.0)
}

/// Like [`scale`], leaving room for a `border_width` stroke on every side.
pub fn scale_with_border(
    path: &BezierPath,
    rect: Rect,
    original_center: Point,
    recenter: bool,
    border_width: f64,
) -> BezierPath {
    let bounds = path.bounding_rect();
    let scale_x = rect.width() / (bounds.width() + 2.0 * border_width);
    let scale_y = rect.height() / (bounds.height() + 2.0 * border_width);
    let factor = scale_x.min(scale_y);

    if !factor.is_finite() || factor <= 0.0 {
        log::trace!("cannot fit path with bounds {bounds:?} into {rect:?}");
        return path.clone();
    }
    if (factor - 1.0).abs() < SCALE_TOLERANCE {
        return path.clone();
    }

    let scaled = path.transform(&AffineTransform::scale(factor, factor));
    if !recenter {
        return scaled;
    }
    let center_after_scaling = scaled.bounding_rect().center();
    scaled.transform(&AffineTransform::translation(
        original_center.x - center_after_scaling.x,
        original_center.y - center_after_scaling.y,
    ))
}

/// Rotate `path` about the origin by `angle`. With `recenter` the result is
/// translated back so its bounds are centered on `original_center`.
pub fn rotate(path: &BezierPath, angle: Angle, original_center: Point, recenter: bool) -> BezierPath {
    let turn = angle.degrees().rem_euclid(360.0);
    if turn < ROTATION_TOLERANCE_DEGREES || 360.0 - turn < ROTATION_TOLERANCE_DEGREES {
        return path.clone();
    }
    let rotated = path.transform(&AffineTransform::rotation(angle));
    if !recenter {
        return rotated;
    }
    let center_after_rotation = rotated.bounding_rect().center();
    rotated.transform(&AffineTransform::translation(
        original_center.x - center_after_rotation.x,
        original_center.y - center_after_rotation.y,
    ))
}

/// A standalone regular polygon filling `rect`, rotated by `rotation` and
/// leaving room for a `border_width` stroke.
pub fn regular_polygon_path(sides: usize, rect: Rect, rotation: Angle, border_width: f64) -> BezierPath {
    let center = rect.center();
    // the stroke is centered on the outline, half of it falls outside
    let radius = rect.width().min(rect.height()) / 2.0 - border_width / 2.0;
    let initial = initial_polygon_path(sides, center, radius, Angle::ZERO);
    let rotated = rotate(&initial, rotation, center, true);
    scale_with_border(&rotated, rect, center, true, border_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::sin_60;
    use crate::geometry::Size;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn approx_point(p: Point, x: f64, y: f64) -> bool {
        approx(p.x, x) && approx(p.y, y)
    }

    #[test]
    fn test_square_vertices_on_axes() {
        let path = initial_polygon_path(4, Point::ORIGIN, 10.0, Angle::ZERO);
        let v = path.vertices();
        assert_eq!(v.len(), 4);
        assert!(approx_point(v[0], 10.0, 0.0));
        assert!(approx_point(v[1], 0.0, 10.0));
        assert!(approx_point(v[2], -10.0, 0.0));
        assert!(approx_point(v[3], 0.0, -10.0));
    }

    #[test]
    fn test_vertex_count_plus_close() {
        for kind in [
            PolygonKind::triangle(),
            PolygonKind::square(),
            PolygonKind::hexagon(),
            PolygonKind::octagon(),
        ] {
            let path = initial_path(kind, Point::new(5.0, 5.0), 3.0, Angle::ZERO);
            assert_eq!(path.vertex_count(), kind.sides());
            assert_eq!(path.elements().len(), kind.sides() + 1);
            assert!(path.is_closed());
        }
    }

    #[test]
    fn test_initial_path_applies_kind_rotation() {
        let path = initial_path(PolygonKind::triangle(), Point::ORIGIN, 10.0, Angle::ZERO);
        let first = path.vertices()[0];
        let expected = Angle::from_degrees(30.0);
        assert!(approx_point(first, 10.0 * expected.cos(), 10.0 * expected.sin()));
    }

    #[test]
    fn test_rectangle_path_traces_bounds() {
        let rect = Rect::from_xywh(10.0, 20.0, 40.0, 10.0);
        let path = polygon_path(PolygonKind::rectangle(4.0), rect, rect.center(), 5.0, Angle::ZERO);
        assert_eq!(path.bounding_rect(), rect);
        assert_eq!(path.vertex_count(), 4);
    }

    #[test]
    fn test_scale_fills_tile_and_recenters() {
        let rect = Rect::from_xywh(100.0, 50.0, 60.0, 60.0 * sin_60());
        let center = rect.center();
        let path = initial_path(PolygonKind::triangle(), center, 10.0, Angle::ZERO);
        let scaled = scale(&path, rect, center, true);
        let bounds = scaled.bounding_rect();
        assert!(approx(bounds.width(), rect.width()));
        assert!(approx(bounds.height(), rect.height()));
        assert!(approx_point(bounds.center(), center.x, center.y));
    }

    #[test]
    fn test_scale_without_recenter_scales_about_origin() {
        let path = initial_polygon_path(4, Point::new(10.0, 10.0), 5.0, Angle::from_degrees(45.0));
        let bounds = path.bounding_rect();
        let rect = Rect::new(Point::ORIGIN, Size::new(bounds.width() * 2.0, bounds.height() * 2.0));
        let scaled = scale(&path, rect, bounds.center(), false);
        assert!(approx_point(scaled.bounding_rect().center(), 20.0, 20.0));
    }

    #[test]
    fn test_scale_is_idempotent() {
        let rect = Rect::from_xywh(0.0, 0.0, 40.0, 40.0 * sin_60());
        let center = rect.center();
        let path = initial_path(PolygonKind::hexagon(), center, 7.0, Angle::ZERO);
        let once = scale(&path, rect, center, true);
        let twice = scale(&once, rect, center, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_scale_leaves_degenerate_path() {
        let path = initial_polygon_path(4, Point::new(3.0, 3.0), 0.0, Angle::ZERO);
        let scaled = scale(&path, Rect::from_xywh(0.0, 0.0, 10.0, 10.0), Point::new(5.0, 5.0), true);
        assert_eq!(scaled, path);
    }

    #[test]
    fn test_scale_with_border_leaves_margin() {
        let rect = Rect::from_xywh(0.0, 0.0, 20.0, 20.0);
        let path = BezierPath::from_rect(Rect::from_xywh(0.0, 0.0, 8.0, 8.0));
        let scaled = scale_with_border(&path, rect, rect.center(), true, 1.0);
        // 20 / (8 + 2)
        assert!(approx(scaled.bounding_rect().width(), 16.0));
    }

    #[test]
    fn test_side_count_clamped() {
        for (sides, expected) in [(0, 3), (2, 3), (7, 7), (500, 120)] {
            let path = initial_polygon_path(sides, Point::ORIGIN, 10.0, Angle::ZERO);
            assert_eq!(path.vertex_count(), expected);
            assert_eq!(path.elements().len(), expected + 1);
            assert!(path.is_closed());
        }
    }

    #[test]
    fn test_negative_radius_flips_vertices() {
        let path = initial_polygon_path(3, Point::ORIGIN, -10.0, Angle::ZERO);
        assert!(approx_point(path.vertices()[0], -10.0, 0.0));
    }

    #[test]
    fn test_full_turn_rotation_is_a_no_op() {
        let path = initial_polygon_path(5, Point::new(30.0, 20.0), 10.0, Angle::ZERO);
        assert_eq!(rotate(&path, Angle::from_degrees(360.0), Point::new(30.0, 20.0), true), path);
        assert_eq!(rotate(&path, Angle::from_degrees(-720.0), Point::ORIGIN, false), path);
    }

    #[test]
    fn test_rotate_recenters() {
        let center = Point::new(50.0, 40.0);
        let path = initial_polygon_path(4, center, 10.0, Angle::ZERO);
        let rotated = rotate(&path, Angle::from_degrees(45.0), center, true);
        let bounds = rotated.bounding_rect();
        assert!(approx_point(bounds.center(), center.x, center.y));
        // the diamond turns into an axis-aligned square
        assert!(approx(bounds.width(), 10.0 * 2.0_f64.sqrt()));
        let unanchored = rotate(&path, Angle::from_degrees(90.0), center, false);
        assert!(approx_point(unanchored.bounding_rect().center(), -40.0, 50.0));
    }

    #[test]
    fn test_regular_polygon_fills_rect() {
        let rect = Rect::from_xywh(10.0, 10.0, 100.0, 60.0);
        let path = regular_polygon_path(6, rect, Angle::ZERO, 0.0);
        let bounds = path.bounding_rect();
        assert_eq!(path.vertex_count(), 6);
        assert!(approx_point(bounds.center(), 60.0, 40.0));
        // width-limited or height-limited, one side touches
        assert!(approx(bounds.width(), 100.0) || approx(bounds.height(), 60.0));
        assert!(bounds.width() <= 100.0 + 1e-9 && bounds.height() <= 60.0 + 1e-9);
    }

    #[test]
    fn test_regular_polygon_border_leaves_margin() {
        let rect = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let path = regular_polygon_path(4, rect, Angle::from_degrees(45.0), 5.0);
        let bounds = path.bounding_rect();
        // radius 47.5, turned into an axis-aligned square
        let side = 47.5 * 2.0_f64.sqrt();
        let expected = 100.0 * side / (side + 10.0);
        assert!(approx(bounds.width(), expected));
        assert!(approx(bounds.height(), expected));
        assert!(approx(bounds.min_x(), (100.0 - expected) / 2.0));
        assert!(bounds.min_y() > 0.0 && bounds.max_y() < 100.0);
    }

    #[test]
    fn test_regular_polygon_clamps_sides() {
        let rect = Rect::from_xywh(0.0, 0.0, 40.0, 40.0);
        assert_eq!(regular_polygon_path(1, rect, Angle::ZERO, 1.0).vertex_count(), 3);
        assert_eq!(regular_polygon_path(1000, rect, Angle::ZERO, 1.0).vertex_count(), 120);
    }

    #[test]
    fn test_rotation_transform() {
        let t = AffineTransform::rotation(Angle::from_degrees(90.0));
        assert!(approx_point(t.apply(&Point::new(1.0, 0.0)), 0.0, 1.0));
    }
}
