use rand::RngCore;

/// A continuous probability distribution with finite support `[lower, upper]`.
///
/// `sample` 接受 `&mut dyn RngCore`，使 `dyn BoundedDistribution` 保持 object-safe。
pub trait BoundedDistribution: Send + Sync {
    fn bounds(&self) -> (f64, f64);

    fn mean(&self) -> f64;

    fn sample(&self, rng: &mut dyn RngCore) -> f64;

    fn lower_bound(&self) -> f64 {
        self.bounds().0
    }

    fn upper_bound(&self) -> f64 {
        self.bounds().1
    }

    fn duration(&self) -> f64 {
        let (lower, upper) = self.bounds();
        upper - lower
    }
}
