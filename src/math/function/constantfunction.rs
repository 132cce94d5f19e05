use crate::math::function::function::Function;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantFunction {
    value: f64
}

impl ConstantFunction {
    pub const fn new(value: f64) -> ConstantFunction {
        ConstantFunction { value }
    }
}

impl Function for ConstantFunction {
    #[inline]
    fn value(&self, _x: f64) -> f64 {
        self.value
    }
}

pub const FUNCTION_ZERO: ConstantFunction = ConstantFunction::new(0.0);

pub const FUNCTION_ONE: ConstantFunction = ConstantFunction::new(1.0);
