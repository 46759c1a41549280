use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A point or displacement on the layout canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate, growing downwards like canvas space.
	pub y: f64,
}

impl Point {
	/// The origin, also used as the zero vector.
	pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

	/// Creates a point from its coordinates.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean length when read as a vector.
	pub fn length(self) -> f64 {
		(self.x * self.x + self.y * self.y).sqrt()
	}

	/// Distance between two points.
	pub fn distance(self, other: Point) -> f64 {
		(other - self).length()
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl AddAssign for Point {
	fn add_assign(&mut self, rhs: Point) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl SubAssign for Point {
	fn sub_assign(&mut self, rhs: Point) {
		self.x -= rhs.x;
		self.y -= rhs.y;
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, rhs: f64) -> Point {
		Point::new(self.x * rhs, self.y * rhs)
	}
}

impl Neg for Point {
	type Output = Point;

	fn neg(self) -> Point {
		Point::new(-self.x, -self.y)
	}
}

/// Axis-aligned rectangle every node is kept inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Top-left corner.
	pub min: Point,
	/// Bottom-right corner.
	pub max: Point,
}

impl Bounds {
	/// Creates bounds from `[min_x, max_x] × [min_y, max_y]`.
	pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
		Self {
			min: Point::new(min_x, min_y),
			max: Point::new(max_x, max_y),
		}
	}

	/// Moves `p` to the nearest point inside the bounds.
	pub fn clamp(&self, p: Point) -> Point {
		Point::new(
			p.x.max(self.min.x).min(self.max.x),
			p.y.max(self.min.y).min(self.max.y),
		)
	}

	/// Whether `p` lies inside the bounds, edges included.
	pub fn contains(&self, p: Point) -> bool {
		(self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clamp_pulls_outside_points_to_nearest_edge() {
		let bounds = Bounds::new(50.0, 750.0, 50.0, 550.0);
		assert_eq!(bounds.clamp(Point::new(-10.0, 900.0)), Point::new(50.0, 550.0));
		assert_eq!(bounds.clamp(Point::new(800.0, 20.0)), Point::new(750.0, 50.0));
		assert_eq!(bounds.clamp(Point::new(400.0, 300.0)), Point::new(400.0, 300.0));
	}

	#[test]
	fn contains_includes_the_edges() {
		let bounds = Bounds::new(50.0, 750.0, 50.0, 550.0);
		assert!(bounds.contains(Point::new(50.0, 550.0)));
		assert!(!bounds.contains(Point::new(49.9, 300.0)));
	}

	#[test]
	fn distance_is_symmetric() {
		let (a, b) = (Point::new(100.0, 300.0), Point::new(103.0, 304.0));
		assert_eq!(a.distance(b), 5.0);
		assert_eq!(b.distance(a), 5.0);
	}
}
