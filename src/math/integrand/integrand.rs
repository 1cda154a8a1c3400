
/// Real-valued function of one real variable.
///
/// Implemented for every `Fn(f64) -> f64`, including `dyn Fn(f64) -> f64`, so
/// closures, plain functions and trait objects can be integrated directly.
pub trait Integrand {
    fn value(&self, x: f64) -> f64;
}

impl <F> Integrand for F where 
    F: Fn(f64) -> f64 + ?Sized {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
