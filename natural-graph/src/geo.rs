use std::ops::{Add, Div, Mul, Sub};

/// Absolute tolerance for the area-sum point-in-triangle test. Large enough
/// to survive floating rounding on screen-sized coordinates, small enough
/// not to swallow genuinely outside points.
pub const AREA_TOLERANCE: f64 = 0.01;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bbox {
    min: Vec2,
    max: Vec2,
}

impl Vec2 {
    pub fn zero() -> Self {
        Vec2::new(0.0, 0.0)
    }

    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    pub fn dist(&self, p: Vec2) -> f64 {
        self.dist2(p).sqrt()
    }

    pub fn dist2(&self, p: Vec2) -> f64 {
        (*self - p).norm2()
    }

    pub fn norm(&self) -> f64 {
        self.norm2().sqrt()
    }

    pub fn norm2(&self) -> f64 {
        self.x.powi(2) + self.y.powi(2)
    }

    pub fn cross(&self, p: Vec2) -> f64 {
        self.x * p.y - self.y * p.x
    }

    /// Counterclockwise perpendicular, same length.
    pub fn perp(&self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl Bbox {
    pub fn new(p: Vec2) -> Self {
        Bbox { min: p, max: p }
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn expand(&mut self, p: Vec2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);

        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Same box pulled inward by `margin` on every side. Degenerates to the
    /// center when the box is smaller than the margin.
    pub fn shrink(&self, margin: f64) -> Bbox {
        let c = self.center();
        Bbox {
            min: Vec2::new((self.min.x + margin).min(c.x), (self.min.y + margin).min(c.y)),
            max: Vec2::new((self.max.x - margin).max(c.x), (self.max.y - margin).max(c.y)),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.min.x <= p.x && self.min.y <= p.y && self.max.x >= p.x && self.max.y >= p.y
    }
}

/// True iff the open segments p1-p2 and q1-q2 properly cross. Touching at a
/// shared endpoint or mere collinear overlap does not count.
pub fn segments_properly_cross(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let d1 = (q2 - q1).cross(p1 - q1);
    let d2 = (q2 - q1).cross(p2 - q1);
    let d3 = (p2 - p1).cross(q1 - p1);
    let d4 = (p2 - p1).cross(q2 - p1);

    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

pub fn triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    (b - a).cross(c - a).abs() / 2.0
}

/// True iff p lies inside or on the closed triangle a-b-c: the three
/// sub-triangle areas around p add up to the full area.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let whole = triangle_area(a, b, c);
    let parts = triangle_area(p, a, b) + triangle_area(p, b, c) + triangle_area(p, c, a);

    (whole - parts).abs() < AREA_TOLERANCE
}

pub fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::zero();
    }

    let mut sum = Vec2::zero();
    for &p in points {
        sum = sum + p;
    }
    sum / points.len() as f64
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(mut self, rhs: Vec2) -> Self::Output {
        self.x += rhs.x;
        self.y += rhs.y;
        self
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(mut self, rhs: Vec2) -> Self::Output {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.x *= rhs;
        self.y *= rhs;
        self
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(mut self, rhs: f64) -> Self::Output {
        self.x /= rhs;
        self.y /= rhs;
        self
    }
}
