use crate::math::function::function::Function;

/// The line through `(x_0, y_0)` and `(x_1, y_1)`.
///
/// Only meaningful on `[x_0, x_1]`; outside that range the caller (usually a
/// `CompositeFunction`) is responsible for routing `x` elsewhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFunction {
    x_0: f64,
    y_0: f64,
    slope: f64
}

impl LinearFunction {
    pub fn new(x_0: f64, y_0: f64, x_1: f64, y_1: f64) -> LinearFunction {
        let slope = if x_1 == x_0 { 0.0 } else { (y_1 - y_0) / (x_1 - x_0) };
        LinearFunction { x_0, y_0, slope }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }
}

impl Function for LinearFunction {
    #[inline]
    fn value(&self, x: f64) -> f64 {
        f64::mul_add(self.slope, x - self.x_0, self.y_0)
    }
}
