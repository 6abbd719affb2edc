use std::ops::Add;

/// A cell coordinate. `x` grows to the right, `y` grows downwards.
///
/// Any value is accepted; a [`Grid`](crate::Grid) wraps it onto one of its
/// cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub(crate) fn wrap(self, width: usize, height: usize) -> (usize, usize) {
        // Dimensions are validated against isize::MAX at grid construction.
        let x = self.x.rem_euclid(width as isize) as usize;
        let y = self.y.rem_euclid(height as isize) as usize;
        (x, y)
    }
}

impl<T: Into<Point>> Add<T> for Point {
    type Output = Self;

    fn add(self, other: T) -> Self::Output {
        let other = other.into();
        Point::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

impl From<(isize, isize)> for Point {
    fn from((x, y): (isize, isize)) -> Self {
        Point::new(x, y)
    }
}
