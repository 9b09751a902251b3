use crate::impl_param_described;
use crate::params::{terms, ParamContainer, ParamDescribed, Unit};

/// The interval around a precursor ion that was isolated, described by its terms
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct IsolationWindow {
    pub params: ParamContainer,
}

impl IsolationWindow {
    pub fn target_mz(&self) -> Option<f64> {
        self.cv_param(terms::ISOLATION_WINDOW_TARGET_MZ)
            .and_then(|p| p.coerce().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ScanWindow {
    pub params: ParamContainer,
}

/// Describes a single scan event. Unless additional post-processing is done,
/// there is usually only one event per spectrum.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    /// The id of the spectrum this scan came from, when it lives in another document
    pub spectrum_reference: Option<String>,
    pub source_file_reference: Option<String>,
    pub instrument_configuration_reference: Option<String>,
    pub scan_windows: Vec<ScanWindow>,
    pub params: ParamContainer,
}

impl Scan {
    /// The scan start time in seconds
    pub fn start_time(&self) -> Option<f64> {
        self.cv_param(terms::SCAN_START_TIME)
            .and_then(|p| p.time_in_seconds())
    }

    pub fn preset_scan_configuration(&self) -> Option<i32> {
        self.cv_param(terms::PRESET_SCAN_CONFIGURATION)
            .and_then(|p| p.coerce().ok())
    }

    pub fn filter_string(&self) -> Option<&str> {
        self.cv_param(terms::FILTER_STRING)
            .map(|p| p.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.spectrum_reference.is_none()
            && self.source_file_reference.is_none()
            && self.instrument_configuration_reference.is_none()
            && self.scan_windows.is_empty()
            && self.params.is_empty()
    }
}

/// The series of acquisition events that constructed a spectrum
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ScanList {
    pub scans: Vec<Scan>,
    pub params: ParamContainer,
}

impl ScanList {
    pub fn first_scan(&self) -> Option<&Scan> {
        self.scans.first()
    }

    pub fn first_scan_mut(&mut self) -> &mut Scan {
        if self.scans.is_empty() {
            self.scans.push(Scan::default());
        }
        &mut self.scans[0]
    }

    pub fn is_empty(&self) -> bool {
        self.scans.is_empty() && self.params.is_empty()
    }
}

pub trait IonProperties {
    fn neutral_mass(&self) -> Option<f64>;
    fn charge(&self) -> Option<i32>;
    fn has_charge(&self) -> bool {
        self.charge().is_some()
    }
}

/// Describes a single selected ion from a precursor isolation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedIon {
    pub params: ParamContainer,
}

impl SelectedIon {
    pub fn new(mz: f64) -> Self {
        let mut ion = Self::default();
        ion.set(terms::SELECTED_ION_MZ, mz, Unit::MZ);
        ion
    }

    pub fn with_charge(mut self, charge: i32) -> Self {
        self.set(terms::CHARGE_STATE, charge, Unit::Unknown);
        self
    }

    pub fn with_intensity(mut self, intensity: f64, unit: Unit) -> Self {
        self.set(terms::PEAK_INTENSITY, intensity, unit);
        self
    }

    /// The selected ion's m/z as reported, may not be the monoisotopic peak.
    pub fn mz(&self) -> Option<f64> {
        self.cv_param(terms::SELECTED_ION_MZ)
            .and_then(|p| p.coerce().ok())
    }

    pub fn intensity(&self) -> Option<f64> {
        self.cv_param(terms::PEAK_INTENSITY)
            .and_then(|p| p.coerce().ok())
    }
}

impl IonProperties for SelectedIon {
    fn neutral_mass(&self) -> Option<f64> {
        let mz = self.mz()?;
        Some(crate::utils::neutral_mass(mz, self.charge().unwrap_or(1)))
    }

    fn charge(&self) -> Option<i32> {
        self.cv_param(terms::CHARGE_STATE)
            .and_then(|p| p.coerce().ok())
    }
}

/// Describes the activation method used to dissociate the precursor ion
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Activation {
    pub params: ParamContainer,
}

/// Describes the precursor ion of the owning spectrum.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Precursor {
    /// The precursor scan ID, if given
    pub spectrum_reference: Option<String>,
    pub source_file_reference: Option<String>,
    pub isolation_window: IsolationWindow,
    pub selected_ions: Vec<SelectedIon>,
    pub activation: Activation,
    pub params: ParamContainer,
}

impl Precursor {
    pub fn ion(&self) -> Option<&SelectedIon> {
        self.selected_ions.first()
    }

    pub fn is_empty(&self) -> bool {
        self.spectrum_reference.is_none()
            && self.source_file_reference.is_none()
            && self.isolation_window.is_empty()
            && self.selected_ions.is_empty()
            && self.activation.params.is_empty()
            && self.params.is_empty()
    }
}

impl IonProperties for Precursor {
    fn neutral_mass(&self) -> Option<f64> {
        self.ion().and_then(|ion| ion.neutral_mass())
    }

    fn charge(&self) -> Option<i32> {
        self.ion().and_then(|ion| ion.charge())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Product {
    pub isolation_window: IsolationWindow,
}

impl Product {
    pub fn is_empty(&self) -> bool {
        self.isolation_window.is_empty()
    }
}

/**
Describes the initial representation of the signal of a spectrum.

`Unknown` is retained for partially initialized spectra.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalContinuity {
    #[default]
    Unknown,
    Centroid,
    Profile,
}

impl_param_described!(
    IsolationWindow,
    ScanWindow,
    Scan,
    ScanList,
    SelectedIon,
    Activation,
    Precursor
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_selected_ion() {
        let ion = SelectedIon::new(500.0).with_charge(2);
        assert_eq!(ion.mz(), Some(500.0));
        assert_eq!(ion.charge(), Some(2));
        let mass = ion.neutral_mass().unwrap();
        assert!((mass - 997.98544706646).abs() < 1e-6);
        assert!(ion.intensity().is_none());

        let precursor = Precursor {
            selected_ions: vec![ion],
            ..Default::default()
        };
        assert!(precursor.has_charge());
        assert!(!precursor.is_empty());
    }

    #[test]
    fn test_scan_start_time() {
        let mut scans = ScanList::default();
        assert!(scans.first_scan().is_none());
        scans
            .first_scan_mut()
            .set(terms::SCAN_START_TIME, 2.5, Unit::Minute);
        assert_eq!(scans.first_scan().unwrap().start_time(), Some(150.0));
    }
}
