use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// Three component vector used for accelerations (m/s²), velocities (m/s) and positions (m).
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3
{
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3
{
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Returns a zero vector.
    ///
    pub const fn zero() -> Self {
        Vector3 { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Calculate the length/magnitude of the vector
    ///
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.dot(self))
    }

    /// Take the dot product of two vectors.
    ///
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Applies `f` to every axis independently.
    ///
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Vector3 {
        Vector3::new(f(self.x), f(self.y), f(self.z))
    }

    /// Combines two vectors axis by axis.
    ///
    #[inline]
    pub fn zip_with(self, other: Vector3, f: impl Fn(f64, f64) -> f64) -> Vector3 {
        Vector3::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector3, tol: f64) -> bool {
        libm::fabs(self.x - other.x) <= tol
            && libm::fabs(self.y - other.y) <= tol
            && libm::fabs(self.z - other.z) <= tol
    }

    /// True when every component is exactly zero.
    ///
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl Add for Vector3
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vector3
{
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector3
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vector3
{
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f64> for Vector3
{
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Vector3 {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl Mul<Vector3> for f64
{
    type Output = Vector3;

    fn mul(self, other: Vector3) -> Self::Output {
        other * self
    }
}

impl MulAssign<f64> for Vector3
{
    fn mul_assign(&mut self, other: f64) {
        self.x *= other;
        self.y *= other;
        self.z *= other;
    }
}
