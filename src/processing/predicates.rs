use std::collections::HashSet;

use mzpeaks::prelude::*;
use mzpeaks::Tolerance;

use crate::io::DetailLevel;
use crate::spectrum::native_id::{translate_native_id_to_scan_number, NativeIdFormat};
use crate::spectrum::{IonProperties, Spectrum, SpectrumIdentity};
use crate::utils::IntegerSet;

use super::filter::{SpectrumPredicate, Tribool};

/// Whether a predicate keeps the spectra that match it or the ones that do not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    Include,
    Exclude,
}

impl FilterMode {
    pub const fn apply(&self, matched: bool) -> bool {
        match self {
            Self::Include => matched,
            Self::Exclude => !matched,
        }
    }
}

/// Accept spectra whose index is in a set.
///
/// Assumes the inner list is visited in index order, and stops once the largest index in the
/// set has been seen.
#[derive(Debug, Clone, Default)]
pub struct IndexSetPredicate {
    index_set: IntegerSet,
    eos: bool,
}

impl IndexSetPredicate {
    pub fn new(index_set: IntegerSet) -> Self {
        Self {
            index_set,
            eos: false,
        }
    }
}

impl SpectrumPredicate for IndexSetPredicate {
    fn accept_identity(&mut self, identity: &SpectrumIdentity) -> Tribool {
        let Ok(index) = i32::try_from(identity.index) else {
            self.eos = true;
            return Tribool::Reject;
        };
        if self.index_set.has_upper_bound(index) {
            self.eos = true;
        }
        self.index_set.contains(index).into()
    }

    fn done(&self) -> bool {
        self.eos
    }

    fn describe(&self) -> String {
        "set of spectrum indices".to_string()
    }
}

/// Accept spectra whose scan number, as read from the id, is in a set.
///
/// Assumes scan numbers increase through the inner list, and stops once the largest scan
/// number in the set has been seen. Spectra whose id does not carry a scan number are rejected.
#[derive(Debug, Clone, Default)]
pub struct ScanNumberSetPredicate {
    scan_number_set: IntegerSet,
    native_id_format: NativeIdFormat,
    eos: bool,
}

impl ScanNumberSetPredicate {
    pub fn new(scan_number_set: IntegerSet) -> Self {
        Self {
            scan_number_set,
            native_id_format: NativeIdFormat::Unknown,
            eos: false,
        }
    }

    /// Read scan numbers the way `native_id_format` lays them out instead of guessing
    pub fn with_native_id_format(mut self, native_id_format: NativeIdFormat) -> Self {
        self.native_id_format = native_id_format;
        self
    }
}

impl SpectrumPredicate for ScanNumberSetPredicate {
    fn accept_identity(&mut self, identity: &SpectrumIdentity) -> Tribool {
        let Some(scan_number) = translate_native_id_to_scan_number(self.native_id_format, &identity.id)
            .and_then(|s| s.parse::<i32>().ok())
        else {
            return Tribool::Reject;
        };
        if self.scan_number_set.has_upper_bound(scan_number) {
            self.eos = true;
        }
        self.scan_number_set.contains(scan_number).into()
    }

    fn done(&self) -> bool {
        self.eos
    }

    fn describe(&self) -> String {
        "set of scan numbers".to_string()
    }
}

/// Accept spectra whose id is in a set, stopping once every distinct id has been seen
#[derive(Debug, Clone, Default)]
pub struct IdSetPredicate {
    ids: HashSet<String>,
    remaining: HashSet<String>,
}

impl IdSetPredicate {
    pub fn new<I: IntoIterator<Item = S>, S: Into<String>>(ids: I) -> Self {
        let ids: HashSet<String> = ids.into_iter().map(|s| s.into()).collect();
        Self {
            remaining: ids.clone(),
            ids,
        }
    }
}

impl SpectrumPredicate for IdSetPredicate {
    fn accept_identity(&mut self, identity: &SpectrumIdentity) -> Tribool {
        if self.ids.contains(&identity.id) {
            self.remaining.remove(&identity.id);
            Tribool::Accept
        } else {
            Tribool::Reject
        }
    }

    fn done(&self) -> bool {
        self.remaining.is_empty()
    }

    fn describe(&self) -> String {
        "set of spectrum ids".to_string()
    }
}

/// Accept spectra whose MS level is in a set. Spectra without an MS level, like emission
/// spectra, are treated as level 0.
#[derive(Debug, Clone, Default)]
pub struct MSLevelSetPredicate {
    ms_levels: IntegerSet,
    mode: FilterMode,
}

impl MSLevelSetPredicate {
    pub fn new(ms_levels: IntegerSet, mode: FilterMode) -> Self {
        Self { ms_levels, mode }
    }
}

impl SpectrumPredicate for MSLevelSetPredicate {
    fn accept_identity(&mut self, _identity: &SpectrumIdentity) -> Tribool {
        Tribool::Indeterminate
    }

    fn accept_spectrum(&mut self, spectrum: &Spectrum) -> bool {
        let level = spectrum.ms_level().unwrap_or_default() as i32;
        self.mode.apply(self.ms_levels.contains(level))
    }

    fn describe(&self) -> String {
        "set of MS levels".to_string()
    }
}

/// Accept spectra whose scan start time, in seconds, lies within `[low, high]`.
///
/// With `assume_sorted`, the first spectrum past `high` ends the scan. Spectra without a start
/// time are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanTimeRangePredicate {
    low: f64,
    high: f64,
    assume_sorted: bool,
    eos: bool,
}

impl ScanTimeRangePredicate {
    pub fn new(low: f64, high: f64, assume_sorted: bool) -> Self {
        Self {
            low,
            high,
            assume_sorted,
            eos: false,
        }
    }
}

impl SpectrumPredicate for ScanTimeRangePredicate {
    fn accept_identity(&mut self, _identity: &SpectrumIdentity) -> Tribool {
        Tribool::Indeterminate
    }

    fn accept_spectrum(&mut self, spectrum: &Spectrum) -> bool {
        let Some(time) = spectrum.start_time() else {
            return false;
        };
        if self.assume_sorted && time > self.high {
            self.eos = true;
        }
        self.low <= time && time <= self.high
    }

    fn done(&self) -> bool {
        self.eos
    }

    fn describe(&self) -> String {
        "scan time range".to_string()
    }
}

/// Accept spectra whose number of data points is in a set
#[derive(Debug, Clone, Default)]
pub struct DefaultArrayLengthSetPredicate {
    lengths: IntegerSet,
}

impl DefaultArrayLengthSetPredicate {
    pub fn new(lengths: IntegerSet) -> Self {
        Self { lengths }
    }
}

impl SpectrumPredicate for DefaultArrayLengthSetPredicate {
    fn accept_identity(&mut self, _identity: &SpectrumIdentity) -> Tribool {
        Tribool::Indeterminate
    }

    fn accept_spectrum(&mut self, spectrum: &Spectrum) -> bool {
        i32::try_from(spectrum.default_array_length)
            .is_ok_and(|n| self.lengths.contains(n))
    }

    fn describe(&self) -> String {
        "set of default array lengths".to_string()
    }
}

/// Accept spectra that have a peak at any of a set of m/z values.
///
/// Only peaks at least `min_intensity` intense are considered. Spectra whose peaks cannot be
/// read never match.
#[derive(Debug, Clone)]
pub struct MzPresentPredicate {
    mzs: Vec<f64>,
    tolerance: Tolerance,
    min_intensity: f32,
    mode: FilterMode,
}

impl MzPresentPredicate {
    pub fn new(mzs: Vec<f64>, tolerance: Tolerance, mode: FilterMode) -> Self {
        Self {
            mzs,
            tolerance,
            min_intensity: 0.0,
            mode,
        }
    }

    pub fn with_min_intensity(mut self, min_intensity: f32) -> Self {
        self.min_intensity = min_intensity;
        self
    }

    fn matches(&self, spectrum: &Spectrum) -> bool {
        let Ok(peaks) = spectrum.peaks() else {
            return false;
        };
        self.mzs.iter().any(|mz| {
            peaks
                .all_peaks_for(*mz, self.tolerance)
                .iter()
                .any(|p| p.intensity >= self.min_intensity)
        })
    }
}

impl SpectrumPredicate for MzPresentPredicate {
    fn accept_identity(&mut self, _identity: &SpectrumIdentity) -> Tribool {
        Tribool::Indeterminate
    }

    fn accept_spectrum(&mut self, spectrum: &Spectrum) -> bool {
        self.mode.apply(self.matches(spectrum))
    }

    fn suggested_detail_level(&self) -> DetailLevel {
        DetailLevel::FullData
    }

    fn describe(&self) -> String {
        "set of m/z values present in spectrum".to_string()
    }
}

/// Accept spectra whose precursor charge is in a set.
///
/// Any selected ion of the first precursor may match. A precursor whose ions report no charge
/// is treated as charge 0, and spectra without a precursor are rejected.
#[derive(Debug, Clone, Default)]
pub struct ChargeStateSetPredicate {
    charge_states: IntegerSet,
}

impl ChargeStateSetPredicate {
    pub fn new(charge_states: IntegerSet) -> Self {
        Self { charge_states }
    }
}

impl SpectrumPredicate for ChargeStateSetPredicate {
    fn accept_identity(&mut self, _identity: &SpectrumIdentity) -> Tribool {
        Tribool::Indeterminate
    }

    fn accept_spectrum(&mut self, spectrum: &Spectrum) -> bool {
        let Some(precursor) = spectrum.precursor() else {
            return false;
        };
        let mut charges = precursor
            .selected_ions
            .iter()
            .filter_map(|ion| ion.charge())
            .peekable();
        if charges.peek().is_none() {
            return self.charge_states.contains(0);
        }
        charges.any(|z| self.charge_states.contains(z))
    }

    fn describe(&self) -> String {
        "set of charge states".to_string()
    }
}

/// Which m/z of a precursor [`PrecursorMzSetPredicate`] compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrecursorTarget {
    /// The first selected ion's m/z
    #[default]
    Selected,
    /// The isolation window's target m/z
    Isolated,
}

/// Accept spectra whose precursor m/z matches any of a set of m/z values within a tolerance.
///
/// Spectra without a precursor m/z never match, so they are kept in [`FilterMode::Exclude`]
/// mode.
#[derive(Debug, Clone)]
pub struct PrecursorMzSetPredicate {
    mzs: Vec<f64>,
    tolerance: Tolerance,
    mode: FilterMode,
    target: PrecursorTarget,
}

impl PrecursorMzSetPredicate {
    pub fn new(mzs: Vec<f64>, tolerance: Tolerance, mode: FilterMode) -> Self {
        Self {
            mzs,
            tolerance,
            mode,
            target: PrecursorTarget::default(),
        }
    }

    pub fn with_target(mut self, target: PrecursorTarget) -> Self {
        self.target = target;
        self
    }

    fn precursor_mz(&self, spectrum: &Spectrum) -> Option<f64> {
        let precursor = spectrum.precursor()?;
        match self.target {
            PrecursorTarget::Selected => precursor.ion().and_then(|ion| ion.mz()),
            PrecursorTarget::Isolated => precursor.isolation_window.target_mz(),
        }
    }
}

impl SpectrumPredicate for PrecursorMzSetPredicate {
    fn accept_identity(&mut self, _identity: &SpectrumIdentity) -> Tribool {
        Tribool::Indeterminate
    }

    fn accept_spectrum(&mut self, spectrum: &Spectrum) -> bool {
        let matched = self.precursor_mz(spectrum).is_some_and(|precursor_mz| {
            self.mzs
                .iter()
                .any(|mz| self.tolerance.test(precursor_mz, *mz))
        });
        self.mode.apply(matched)
    }

    fn describe(&self) -> String {
        "set of precursor m/z values".to_string()
    }
}

/// Accept spectra whose first scan's preset scan configuration, the scan event number, is in
/// a set. Spectra without one are rejected.
#[derive(Debug, Clone, Default)]
pub struct ScanEventSetPredicate {
    scan_events: IntegerSet,
}

impl ScanEventSetPredicate {
    pub fn new(scan_events: IntegerSet) -> Self {
        Self { scan_events }
    }
}

impl SpectrumPredicate for ScanEventSetPredicate {
    fn accept_identity(&mut self, _identity: &SpectrumIdentity) -> Tribool {
        Tribool::Indeterminate
    }

    fn accept_spectrum(&mut self, spectrum: &Spectrum) -> bool {
        spectrum
            .scan_list
            .first_scan()
            .and_then(|scan| scan.preset_scan_configuration())
            .is_some_and(|event| self.scan_events.contains(event))
    }

    fn describe(&self) -> String {
        "set of scan events".to_string()
    }
}

/// Accept spectra whose Thermo filter string contains, or with `match_exact` equals, a
/// pattern. `inverse` keeps the spectra that do not match instead, but spectra without a
/// filter string are always rejected.
#[derive(Debug, Clone, Default)]
pub struct ThermoScanFilterPredicate {
    pattern: String,
    match_exact: bool,
    inverse: bool,
}

impl ThermoScanFilterPredicate {
    pub fn new<S: Into<String>>(pattern: S, match_exact: bool, inverse: bool) -> Self {
        Self {
            pattern: pattern.into(),
            match_exact,
            inverse,
        }
    }
}

impl SpectrumPredicate for ThermoScanFilterPredicate {
    fn accept_identity(&mut self, _identity: &SpectrumIdentity) -> Tribool {
        Tribool::Indeterminate
    }

    fn accept_spectrum(&mut self, spectrum: &Spectrum) -> bool {
        let Some(filter) = spectrum
            .scan_list
            .first_scan()
            .and_then(|scan| scan.filter_string())
            .filter(|s| !s.is_empty())
        else {
            return false;
        };
        let matched = if self.match_exact {
            filter == self.pattern
        } else {
            filter.contains(self.pattern.as_str())
        };
        matched != self.inverse
    }

    fn describe(&self) -> String {
        "Thermo scan filter pattern".to_string()
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;
    use crate::io::{SpectrumList, SpectrumListPtr, SpectrumListSimple};
    use crate::params::{terms, ParamDescribed, Unit};
    use crate::processing::{SpectrumListFilter, SpectrumProcessingError};
    use crate::spectrum::{MZIntensityPair, Precursor, SelectedIon};

    /// Eleven spectra `scan=100` to `scan=110`. Every third is MS1, the rest MS2, and the last
    /// is an emission spectrum with no MS level, scan or precursor.
    ///
    /// MS2 spectrum `i` has a precursor at m/z `(i + 4) * 100`, isolated at that m/z plus 0.5,
    /// with charge 2 when `i` is even and 3 when odd, except spectrum 8 whose charge is unknown.
    /// Spectrum `i` is scan event `i % 4`.
    fn make_list() -> SpectrumListPtr {
        let mut list = SpectrumListSimple::new();
        for i in 0..11usize {
            let mut spectrum = Spectrum::new(SpectrumIdentity::new(0, format!("scan={}", 100 + i)));
            let pairs: Vec<MZIntensityPair> = (1..(i * 2))
                .map(|j| MZIntensityPair::new(j as f64 * 100.0, (j * j) as f64))
                .collect();
            spectrum.set_mz_intensity_pairs(&pairs, Unit::DetectorCounts);
            if i == 10 {
                spectrum.set_flag(terms::EMISSION_SPECTRUM);
                list.push(spectrum);
                continue;
            }
            let is_ms1 = i % 3 == 0;
            spectrum.set(terms::MS_LEVEL, if is_ms1 { 1 } else { 2 }, Unit::Unknown);
            spectrum.set_flag(if is_ms1 {
                terms::MS1_SPECTRUM
            } else {
                terms::MSN_SPECTRUM
            });
            let scan = spectrum.scan_list.first_scan_mut();
            scan.set(terms::SCAN_START_TIME, 420 + i, Unit::Second);
            scan.set(terms::PRESET_SCAN_CONFIGURATION, i % 4, Unit::Unknown);
            match i {
                0 | 6 => scan.set(
                    terms::FILTER_STRING,
                    "FTMS + p NSI SIM ms [595.0000-655.0000]",
                    Unit::Unknown,
                ),
                3 | 9 => scan.set(
                    terms::FILTER_STRING,
                    "FTMS + p NSI SIM ms [395.0000-1005.0000]",
                    Unit::Unknown,
                ),
                _ => scan.set(
                    terms::FILTER_STRING,
                    format!("ITMS + c NSI Full ms2 {}.0000@cid30.00 [100.0000-2000.0000]", (i + 4) * 100),
                    Unit::Unknown,
                ),
            }
            if !is_ms1 {
                let precursor_mz = ((i + 4) * 100) as f64;
                let mut ion = SelectedIon::new(precursor_mz);
                if i != 8 {
                    ion = ion.with_charge(if i % 2 == 0 { 2 } else { 3 });
                }
                let mut precursor = Precursor {
                    selected_ions: vec![ion],
                    ..Default::default()
                };
                precursor.isolation_window.set(
                    terms::ISOLATION_WINDOW_TARGET_MZ,
                    precursor_mz + 0.5,
                    Unit::MZ,
                );
                spectrum.precursors.push(precursor);
            }
            list.push(spectrum);
        }
        Arc::new(list)
    }

    fn ids(list: &dyn SpectrumList) -> Vec<String> {
        (0..list.len())
            .map(|i| list.spectrum_identity(i).unwrap().id.clone())
            .collect()
    }

    #[test]
    fn test_index_set() -> Result<(), SpectrumProcessingError> {
        let set: IntegerSet = "3-5 7 9".parse().unwrap();
        let filter = SpectrumListFilter::new(make_list(), IndexSetPredicate::new(set))?;
        assert_eq!(
            ids(&filter),
            vec!["scan=103", "scan=104", "scan=105", "scan=107", "scan=109"]
        );
        Ok(())
    }

    #[test]
    fn test_index_set_stops_early() {
        let mut predicate = IndexSetPredicate::new([1, 3, 5].into_iter().collect());
        for i in 0..5 {
            predicate.accept_identity(&SpectrumIdentity::new(i, ""));
            assert!(!predicate.done());
        }
        assert_eq!(
            predicate.accept_identity(&SpectrumIdentity::new(5, "")),
            Tribool::Accept
        );
        assert!(predicate.done());
    }

    #[test]
    fn test_scan_number_set() -> Result<(), SpectrumProcessingError> {
        let mut set = IntegerSet::new();
        set.insert_range(102, 104);
        set.insert(107);
        let filter = SpectrumListFilter::new(make_list(), ScanNumberSetPredicate::new(set))?;
        assert_eq!(
            ids(&filter),
            vec!["scan=102", "scan=103", "scan=104", "scan=107"]
        );

        let mut predicate = ScanNumberSetPredicate::new(IntegerSet::from_iter([19]))
            .with_native_id_format(NativeIdFormat::Thermo);
        assert_eq!(
            predicate.accept_identity(&SpectrumIdentity::new(
                0,
                "controllerType=0 controllerNumber=1 scan=19"
            )),
            Tribool::Accept
        );
        assert_eq!(
            predicate.accept_identity(&SpectrumIdentity::new(0, "scan=19")),
            Tribool::Reject
        );
        Ok(())
    }

    #[test]
    fn test_id_set() -> Result<(), SpectrumProcessingError> {
        let mut predicate = IdSetPredicate::new(["scan=101", "scan=105", "scan=999"]);
        let filter = SpectrumListFilter::new(make_list(), &mut predicate)?;
        assert_eq!(ids(&filter), vec!["scan=101", "scan=105"]);
        assert!(!predicate.done());

        let mut predicate = IdSetPredicate::new(["scan=101"]);
        predicate.accept_identity(&SpectrumIdentity::new(1, "scan=101"));
        assert!(predicate.done());
        Ok(())
    }

    #[test]
    fn test_id_set_repeated_ids() -> Result<(), SpectrumProcessingError> {
        let inner: SpectrumListSimple = ["a", "a", "b", "c"]
            .into_iter()
            .map(|id| Spectrum::new(SpectrumIdentity::new(0, id)))
            .collect();
        let filter =
            SpectrumListFilter::new(Arc::new(inner), IdSetPredicate::new(["a", "b"]))?;
        assert_eq!(ids(&filter), vec!["a", "a", "b"]);
        assert_eq!(filter.index_map(), &[0, 1, 2]);
        Ok(())
    }

    #[test]
    fn test_ms_level_set() -> Result<(), SpectrumProcessingError> {
        let inner = make_list();
        let ms1 = SpectrumListFilter::new(
            inner.clone(),
            MSLevelSetPredicate::new(IntegerSet::from_iter([1]), FilterMode::Include),
        )?;
        assert_eq!(
            ids(&ms1),
            vec!["scan=100", "scan=103", "scan=106", "scan=109"]
        );

        let ms2 = SpectrumListFilter::new(
            inner.clone(),
            MSLevelSetPredicate::new(IntegerSet::from_iter([2]), FilterMode::Include),
        )?;
        assert_eq!(ms2.len(), 6);
        assert_eq!(ms2.spectrum_identity(0)?.id, "scan=101");
        assert_eq!(ms2.spectrum_identity(5)?.id, "scan=108");

        let no_level = SpectrumListFilter::new(
            inner.clone(),
            MSLevelSetPredicate::new(IntegerSet::from_iter([0]), FilterMode::Include),
        )?;
        assert_eq!(ids(&no_level), vec!["scan=110"]);

        let not_ms2 = SpectrumListFilter::new(
            inner,
            MSLevelSetPredicate::new(IntegerSet::from_iter([2]), FilterMode::Exclude),
        )?;
        assert_eq!(not_ms2.len(), 5);
        Ok(())
    }

    #[test]
    fn test_scan_time_range() -> Result<(), SpectrumProcessingError> {
        let mut predicate = ScanTimeRangePredicate::new(422.5, 427.5, true);
        let filter = SpectrumListFilter::new(make_list(), &mut predicate)?;
        assert_eq!(
            ids(&filter),
            vec!["scan=103", "scan=104", "scan=105", "scan=106", "scan=107"]
        );
        assert!(predicate.done());
        Ok(())
    }

    #[test]
    fn test_default_array_length_set() -> Result<(), SpectrumProcessingError> {
        // spectrum i has 2i - 1 points
        let filter = SpectrumListFilter::new(
            make_list(),
            DefaultArrayLengthSetPredicate::new("0-3".parse().unwrap()),
        )?;
        assert_eq!(ids(&filter), vec!["scan=100", "scan=101", "scan=102"]);
        Ok(())
    }

    #[test_log::test]
    fn test_mz_present() -> Result<(), SpectrumProcessingError> {
        let inner = make_list();
        let predicate = MzPresentPredicate::new(vec![700.0], Tolerance::Da(3.0), FilterMode::Include);
        assert_eq!(predicate.suggested_detail_level(), DetailLevel::FullData);
        let filter = SpectrumListFilter::new(inner.clone(), predicate)?;
        // m/z 700 first appears in spectrum 4, which spans 100 to 700
        assert_eq!(filter.len(), 7);
        assert_eq!(filter.spectrum_identity(0)?.id, "scan=104");

        let strong = MzPresentPredicate::new(vec![300.0], Tolerance::Da(3.0), FilterMode::Exclude)
            .with_min_intensity(50.0);
        let filter = SpectrumListFilter::new(inner, strong)?;
        assert_eq!(filter.len(), 11);
        Ok(())
    }

    #[test]
    fn test_charge_state_set() -> Result<(), SpectrumProcessingError> {
        let inner = make_list();
        let doubly = SpectrumListFilter::new(
            inner.clone(),
            ChargeStateSetPredicate::new(IntegerSet::from_iter([2])),
        )?;
        assert_eq!(ids(&doubly), vec!["scan=102", "scan=104"]);

        let unknown_or_doubly = SpectrumListFilter::new(
            inner,
            ChargeStateSetPredicate::new(IntegerSet::from_iter([0, 2])),
        )?;
        assert_eq!(
            ids(&unknown_or_doubly),
            vec!["scan=102", "scan=104", "scan=108"]
        );
        Ok(())
    }

    #[test]
    fn test_precursor_mz_set() -> Result<(), SpectrumProcessingError> {
        let inner = make_list();
        let selected = SpectrumListFilter::new(
            inner.clone(),
            PrecursorMzSetPredicate::new(
                vec![600.0, 1100.002],
                Tolerance::Da(0.01),
                FilterMode::Include,
            ),
        )?;
        assert_eq!(ids(&selected), vec!["scan=102", "scan=107"]);

        let excluded = SpectrumListFilter::new(
            inner.clone(),
            PrecursorMzSetPredicate::new(vec![600.0], Tolerance::Da(0.01), FilterMode::Exclude),
        )?;
        assert_eq!(excluded.len(), 10);
        assert_eq!(excluded.find("scan=102"), excluded.len());
        assert_eq!(excluded.spectrum_identity(0)?.id, "scan=100");

        let isolated = SpectrumListFilter::new(
            inner.clone(),
            PrecursorMzSetPredicate::new(vec![600.5], Tolerance::Da(0.01), FilterMode::Include)
                .with_target(PrecursorTarget::Isolated),
        )?;
        assert_eq!(ids(&isolated), vec!["scan=102"]);

        let not_selected = SpectrumListFilter::new(
            inner,
            PrecursorMzSetPredicate::new(vec![600.5], Tolerance::Da(0.01), FilterMode::Include),
        )?;
        assert_eq!(not_selected.len(), 0);
        Ok(())
    }

    #[test]
    fn test_scan_event_set() -> Result<(), SpectrumProcessingError> {
        let mut events = IntegerSet::new();
        events.insert(0);
        events.insert_range(2, 3);
        let filter = SpectrumListFilter::new(make_list(), ScanEventSetPredicate::new(events))?;
        assert_eq!(
            ids(&filter),
            vec![
                "scan=100", "scan=102", "scan=103", "scan=104", "scan=106", "scan=107",
                "scan=108"
            ]
        );
        Ok(())
    }

    #[test]
    fn test_thermo_scan_filter() -> Result<(), SpectrumProcessingError> {
        let inner = make_list();
        let wide = SpectrumListFilter::new(
            inner.clone(),
            ThermoScanFilterPredicate::new("395.0000-1005.0000", false, false),
        )?;
        assert_eq!(ids(&wide), vec!["scan=103", "scan=109"]);

        // the emission spectrum has no filter string and is rejected either way
        let not_wide = SpectrumListFilter::new(
            inner.clone(),
            ThermoScanFilterPredicate::new("395.0000-1005.0000", false, true),
        )?;
        assert_eq!(not_wide.len(), 8);
        assert_eq!(not_wide.spectrum_identity(7)?.id, "scan=108");

        let exact = SpectrumListFilter::new(
            inner,
            ThermoScanFilterPredicate::new("FTMS + p NSI SIM ms [595.0000-655.0000]", true, false),
        )?;
        assert_eq!(ids(&exact), vec!["scan=100", "scan=106"]);
        Ok(())
    }
}
