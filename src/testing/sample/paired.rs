use crate::testing::sample::Sample;

/// Comparison of two independent samples through the difference `Z = X - Y` of their estimators.
///
/// Testing `Z` against a null of zero asks whether both samples share the same underlying
/// parameter, e.g. whether two campaigns have the same clickthrough rate. Any sample type can be
/// paired, including references and other paired samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedSample<X, Y> {
    pub x: X,
    pub y: Y,
}

impl<X: Sample, Y: Sample> PairedSample<X, Y> {
    pub fn new(x: X, y: Y) -> Self {
        PairedSample { x, y }
    }
}

impl<X: Sample, Y: Sample> Sample for PairedSample<X, Y> {
    fn estimator(&self) -> f64 {
        self.x.estimator() - self.y.estimator()
    }

    // V(X - Y) = V(X) + (-1)^2 V(Y) for independent X and Y
    fn variance(&self) -> f64 {
        self.x.variance() + self.y.variance()
    }
}
