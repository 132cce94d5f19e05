

/// A scalar function of one real variable.
///
/// `Send + Sync` 是 supertrait，使 `Box<dyn Function>` 可跨執行緒傳遞。
pub trait Function: Send + Sync {
    fn value(&self, x: f64) -> f64;
}

impl<F> Function for F where
    F: Fn(f64) -> f64 + Send + Sync {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

pub type BoxedFunction = Box<dyn Function>;
