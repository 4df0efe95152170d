use std::convert::TryFrom;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use super::super::error::Error;

/// Cartesian 3-vector used for positions, velocities, accelerations and forces.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Axes {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Axes {
    pub fn new(x: f64, y: f64, z: f64) -> Axes {
        Axes { x, y, z }
    }

    pub fn zeros() -> Axes {
        Axes { x: 0., y: 0., z: 0. }
    }

    pub fn norm_2(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn norm(&self) -> f64 {
        self.norm_2().sqrt()
    }

    pub fn cross(&self, other: &Axes) -> Axes {
        Axes {
            x: self.y*other.z - self.z*other.y,
            y: self.z*other.x - self.x*other.z,
            z: self.x*other.y - self.y*other.x,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component by spatial axis index (0: x, 1: y, 2: z).
    pub fn component(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("Axis index {} out of range, only 3 spatial axes exist", axis),
        }
    }
}

impl TryFrom<&[f64]> for Axes {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Axes, Error> {
        match values {
            [x, y, z] => Ok(Axes { x: *x, y: *y, z: *z }),
            _ => Err(Error::shape("spatial components", 3, values.len())),
        }
    }
}

impl Add for Axes {
    type Output = Axes;
    fn add(self, other: Axes) -> Axes {
        Axes { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }
}

impl Sub for Axes {
    type Output = Axes;
    fn sub(self, other: Axes) -> Axes {
        Axes { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

impl Mul<f64> for Axes {
    type Output = Axes;
    fn mul(self, factor: f64) -> Axes {
        Axes { x: self.x * factor, y: self.y * factor, z: self.z * factor }
    }
}

impl Mul<Axes> for f64 {
    type Output = Axes;
    fn mul(self, v: Axes) -> Axes {
        Axes { x: self * v.x, y: self * v.y, z: self * v.z }
    }
}

impl Div<f64> for Axes {
    type Output = Axes;
    fn div(self, divisor: f64) -> Axes {
        Axes { x: self.x / divisor, y: self.y / divisor, z: self.z / divisor }
    }
}

impl Neg for Axes {
    type Output = Axes;
    fn neg(self) -> Axes {
        Axes { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl AddAssign for Axes {
    fn add_assign(&mut self, other: Axes) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl SubAssign for Axes {
    fn sub_assign(&mut self, other: Axes) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_product_follows_right_hand_rule() {
        let x = Axes::new(1., 0., 0.);
        let y = Axes::new(0., 1., 0.);
        assert_eq!(x.cross(&y), Axes::new(0., 0., 1.));
        assert_eq!(y.cross(&x), Axes::new(0., 0., -1.));
    }

    #[test]
    fn slices_need_exactly_three_components() {
        let ok: &[f64] = &[1., 2., 3.];
        assert_eq!(Axes::try_from(ok).unwrap(), Axes::new(1., 2., 3.));

        let short: &[f64] = &[1., 2.];
        match Axes::try_from(short) {
            Err(Error::ShapeMismatch { expected: 3, found: 2, .. }) => {},
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn norm_of_pythagorean_triple() {
        assert_eq!(Axes::new(3., 4., 12.).norm(), 13.);
    }
}
