//! Vector math for guidance and rendering.
//!
//! Two precision grades, chosen at the type level: `Vec2`/`Vec3` (f32) for
//! rendering-space positions and directions, `Vec3d` (f64) for physical
//! quantities (velocity, acceleration, thrust) where cumulative error matters
//! over long runs. Widening `Vec3` -> `Vec3d` goes through `From`; narrowing
//! is only available as the explicit `Vec3d::to_vec3` call.
//!
//! All operations are total. Normalizing a zero vector yields the zero
//! vector, and dividing by a zero scalar yields the zero vector (not NaN or
//! infinity). Zero checks are exact comparisons against 0.0, not epsilon
//! tests.

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

// ---- Vec2 ----

/// 2D single-precision vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Broadcast a single scalar to both components.
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }

    pub fn sqr_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction, or `ZERO` for a zero input.
    pub fn normalized(&self) -> Self {
        let magnitude = self.sqr_magnitude().sqrt();
        if magnitude == 0.0 {
            return Vec2::ZERO;
        }
        *self / magnitude
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f32) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    /// Saturating division: a zero divisor yields `ZERO`, never NaN or
    /// infinity.
    fn div(self, scalar: f32) -> Vec2 {
        if scalar == 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.x / scalar, self.y / scalar)
    }
}

// ---- Vec3 ----

/// 3D single-precision vector. Rendering-grade: positions, directions,
/// reticle offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Broadcast a single scalar to all three components.
    pub const fn splat(value: f32) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }

    pub fn sqr_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn dot(&self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product. Parallel or zero inputs yield `ZERO`.
    pub fn cross(&self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Unit vector in the same direction, or `ZERO` for a zero input.
    pub fn normalized(&self) -> Self {
        let magnitude = self.sqr_magnitude().sqrt();
        if magnitude == 0.0 {
            return Vec3::ZERO;
        }
        *self / magnitude
    }
}

impl From<Vec2> for Vec3 {
    fn from(vec: Vec2) -> Vec3 {
        Vec3::new(vec.x, vec.y, 0.0)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f32) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Vec3 {
        vec * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;

    /// Saturating division: a zero divisor yields `ZERO`, never NaN or
    /// infinity.
    fn div(self, scalar: f32) -> Vec3 {
        if scalar == 0.0 {
            return Vec3::ZERO;
        }
        Vec3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

// ---- Vec3d ----

/// 3D double-precision vector. Tracking-grade: velocity, acceleration,
/// thrust.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3d {
    pub const ZERO: Vec3d = Vec3d {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Broadcast a single scalar to all three components.
    pub const fn splat(value: f64) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }

    /// Narrow to rendering precision. Lossy, so it is a named method rather
    /// than a `From` impl: every call site shows the precision drop.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    pub fn sqr_magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn dot(&self, rhs: Vec3d) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product. Parallel or zero inputs yield `ZERO`.
    pub fn cross(&self, rhs: Vec3d) -> Vec3d {
        Vec3d::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Unit vector in the same direction, or `ZERO` for a zero input.
    pub fn normalized(&self) -> Self {
        let magnitude = self.sqr_magnitude().sqrt();
        if magnitude == 0.0 {
            return Vec3d::ZERO;
        }
        *self / magnitude
    }
}

impl From<Vec3> for Vec3d {
    fn from(vec: Vec3) -> Vec3d {
        Vec3d::new(vec.x as f64, vec.y as f64, vec.z as f64)
    }
}

impl From<Vec2> for Vec3d {
    fn from(vec: Vec2) -> Vec3d {
        Vec3d::new(vec.x as f64, vec.y as f64, 0.0)
    }
}

impl Add for Vec3d {
    type Output = Vec3d;

    fn add(self, rhs: Vec3d) -> Vec3d {
        Vec3d::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3d {
    type Output = Vec3d;

    fn sub(self, rhs: Vec3d) -> Vec3d {
        Vec3d::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3d {
    type Output = Vec3d;

    fn mul(self, scalar: f64) -> Vec3d {
        Vec3d::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vec3d> for f64 {
    type Output = Vec3d;

    fn mul(self, vec: Vec3d) -> Vec3d {
        vec * self
    }
}

impl Div<f64> for Vec3d {
    type Output = Vec3d;

    /// Saturating division: a zero divisor yields `ZERO`, never NaN or
    /// infinity.
    fn div(self, scalar: f64) -> Vec3d {
        if scalar == 0.0 {
            return Vec3d::ZERO;
        }
        Vec3d::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}
