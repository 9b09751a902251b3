mod integer_set;

pub use integer_set::{IntegerSet, IntegerSetIter, IntegerSetParseError, Interval};

const PROTON: f64 = 1.00727646677;

/// The neutral mass of an ion observed at `mz` with charge `z`
#[inline]
pub fn neutral_mass(mz: f64, z: i32) -> f64 {
    (mz * z.abs() as f64) - z as f64 * PROTON
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_neutral_mass() {
        assert!((neutral_mass(501.00727646677, 2) - 1000.0).abs() < 1e-9);
        assert!((neutral_mass(498.99272353323, -2) - 1000.0).abs() < 1e-9);
        assert!((neutral_mass(1001.00727646677, 1) - 1000.0).abs() < 1e-9);
    }
}
