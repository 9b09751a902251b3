//! Array-of-structs views over paired binary data arrays.
use std::fmt::Display;

/// One point of a mass spectrum
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MZIntensityPair {
    pub mz: f64,
    pub intensity: f64,
}

impl MZIntensityPair {
    pub const fn new(mz: f64, intensity: f64) -> Self {
        Self { mz, intensity }
    }
}

impl From<(f64, f64)> for MZIntensityPair {
    fn from((mz, intensity): (f64, f64)) -> Self {
        Self::new(mz, intensity)
    }
}

impl Display for MZIntensityPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.mz, self.intensity)
    }
}

/// One point of a chromatogram
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeIntensityPair {
    pub time: f64,
    pub intensity: f64,
}

impl TimeIntensityPair {
    pub const fn new(time: f64, intensity: f64) -> Self {
        Self { time, intensity }
    }
}

impl From<(f64, f64)> for TimeIntensityPair {
    fn from((time, intensity): (f64, f64)) -> Self {
        Self::new(time, intensity)
    }
}

impl Display for TimeIntensityPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.time, self.intensity)
    }
}
