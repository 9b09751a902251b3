use std::sync::Arc;

use mzpeaks::{CentroidPeak, PeakSet};

use crate::impl_param_described;
use crate::meta::DataProcessing;
use crate::params::{terms, ParamContainer, ParamDescribed, Unit};

use super::bindata::{
    find_mz_intensity_arrays, ArrayRetrievalError, ArrayType, BinaryDataArray, BinaryDataArrayRef,
};
use super::pairs::MZIntensityPair;
use super::scan_properties::{Precursor, Product, ScanList, SignalContinuity};

/// The index of an identity that has not been placed in any list
pub const IDENTITY_INDEX_NONE: usize = usize::MAX;

/// The lightweight description of a spectrum, available without reading its data.
///
/// `index` is always the position in whichever list currently holds the identity, so it
/// changes when a list is filtered while `id` and `native_id` do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectrumIdentity {
    pub index: usize,
    /// A stable identifier, unique within the run
    pub id: String,
    /// The identifier as the source format spells it, like `scan=19`
    pub native_id: String,
    /// The sample spot of a MALDI run
    pub spot_id: String,
    /// Where the spectrum starts in the source file, if known
    pub source_file_position: Option<u64>,
}

impl Default for SpectrumIdentity {
    fn default() -> Self {
        Self {
            index: IDENTITY_INDEX_NONE,
            id: String::new(),
            native_id: String::new(),
            spot_id: String::new(),
            source_file_position: None,
        }
    }
}

impl SpectrumIdentity {
    /// Create an identity whose native id is the same as its id, the common case for
    /// formats that identify spectra by their native id
    pub fn new<S: Into<String>>(index: usize, id: S) -> Self {
        let id = id.into();
        Self {
            index,
            native_id: id.clone(),
            id,
            ..Default::default()
        }
    }

    pub fn with_native_id<S: Into<String>>(mut self, native_id: S) -> Self {
        self.native_id = native_id.into();
        self
    }

    pub fn with_spot_id<S: Into<String>>(mut self, spot_id: S) -> Self {
        self.spot_id = spot_id.into();
        self
    }
}

/// A single spectrum: its identity, descriptive terms, acquisition metadata and binary data.
///
/// Binary data arrays are shared handles, so cloning a spectrum to rewrite its metadata does
/// not copy the arrays. A transform that changes array contents replaces or copies the handle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    pub identity: SpectrumIdentity,
    pub default_array_length: usize,
    pub data_processing: Option<Arc<DataProcessing>>,
    pub source_file_reference: Option<String>,
    pub scan_list: ScanList,
    pub precursors: Vec<Precursor>,
    pub products: Vec<Product>,
    pub binary_data_arrays: Vec<BinaryDataArrayRef>,
    pub params: ParamContainer,
}

impl_param_described!(Spectrum);

impl Spectrum {
    pub fn new(identity: SpectrumIdentity) -> Self {
        Self {
            identity,
            ..Default::default()
        }
    }

    pub fn index(&self) -> usize {
        self.identity.index
    }

    pub fn id(&self) -> &str {
        &self.identity.id
    }

    pub fn native_id(&self) -> &str {
        &self.identity.native_id
    }

    pub fn ms_level(&self) -> Option<u8> {
        self.cv_param(terms::MS_LEVEL)
            .and_then(|p| p.coerce().ok())
    }

    /// The start time of the first scan, in seconds
    pub fn start_time(&self) -> Option<f64> {
        self.scan_list.first_scan().and_then(|s| s.start_time())
    }

    pub fn signal_continuity(&self) -> SignalContinuity {
        if self.has_cv_param(terms::CENTROID_SPECTRUM) {
            SignalContinuity::Centroid
        } else if self.has_cv_param(terms::PROFILE_SPECTRUM) {
            SignalContinuity::Profile
        } else {
            SignalContinuity::Unknown
        }
    }

    pub fn precursor(&self) -> Option<&Precursor> {
        self.precursors.first()
    }

    /// `true` if this spectrum holds nothing at all, not even an index
    pub fn is_empty(&self) -> bool {
        self.identity.index == IDENTITY_INDEX_NONE
            && self.identity.id.is_empty()
            && self.default_array_length == 0
            && self.data_processing.as_ref().map_or(true, |dp| dp.is_empty())
            && self.source_file_reference.is_none()
            && self.scan_list.is_empty()
            && self.precursors.is_empty()
            && self.products.is_empty()
            && self.binary_data_arrays.is_empty()
            && self.params.is_empty()
    }

    pub fn has_binary_data(&self) -> bool {
        self.binary_data_arrays
            .first()
            .is_some_and(|arr| !arr.data.is_empty())
    }

    pub fn array_by_type(&self, array_type: &ArrayType) -> Option<&BinaryDataArray> {
        self.binary_data_arrays
            .iter()
            .map(|a| a.as_ref())
            .find(|a| a.is_a(array_type))
    }

    pub fn mz_array(&self) -> Option<&BinaryDataArray> {
        self.array_by_type(&ArrayType::MZArray)
    }

    pub fn intensity_array(&self) -> Option<&BinaryDataArray> {
        self.array_by_type(&ArrayType::IntensityArray)
    }

    fn paired_arrays(&self) -> Result<(&BinaryDataArray, &BinaryDataArray), ArrayRetrievalError> {
        match find_mz_intensity_arrays(&self.binary_data_arrays) {
            (Some(mzs), Some(intensities)) => Ok((mzs, intensities)),
            (None, _) => Err(ArrayRetrievalError::NotFound(ArrayType::MZArray)),
            (_, None) => Err(ArrayRetrievalError::NotFound(ArrayType::IntensityArray)),
        }
    }

    /// Interleave the m/z and intensity arrays into `output`.
    ///
    /// Both arrays must be present and both must be exactly `output.len()` long.
    pub fn get_mz_intensity_pairs_into(
        &self,
        output: &mut [MZIntensityPair],
    ) -> Result<(), ArrayRetrievalError> {
        let (mzs, intensities) = self.paired_arrays()?;
        let expected = output.len();
        if mzs.len() != expected {
            return Err(ArrayRetrievalError::SizeMismatch {
                array: ArrayType::MZArray,
                expected,
                actual: mzs.len(),
            });
        }
        if intensities.len() != expected {
            return Err(ArrayRetrievalError::SizeMismatch {
                array: ArrayType::IntensityArray,
                expected,
                actual: intensities.len(),
            });
        }
        for ((pair, mz), intensity) in output
            .iter_mut()
            .zip(mzs.data.iter())
            .zip(intensities.data.iter())
        {
            pair.mz = *mz;
            pair.intensity = *intensity;
        }
        Ok(())
    }

    pub fn get_mz_intensity_pairs(&self) -> Result<Vec<MZIntensityPair>, ArrayRetrievalError> {
        let (mzs, intensities) = self.paired_arrays()?;
        if mzs.len() != intensities.len() {
            return Err(ArrayRetrievalError::LengthMismatch(
                mzs.len(),
                intensities.len(),
            ));
        }
        let mut output = vec![MZIntensityPair::default(); mzs.len()];
        self.get_mz_intensity_pairs_into(&mut output)?;
        Ok(output)
    }

    /// Replace all binary data with an m/z array and an intensity array built from `pairs`
    pub fn set_mz_intensity_pairs(&mut self, pairs: &[MZIntensityPair], intensity_unit: Unit) {
        let (mzs, intensities): (Vec<f64>, Vec<f64>) =
            pairs.iter().map(|p| (p.mz, p.intensity)).unzip();
        self.replace_mz_intensity_arrays(mzs, intensities, intensity_unit);
    }

    /// Replace all binary data with the given m/z and intensity arrays, which must be the
    /// same length
    pub fn set_mz_intensity_arrays(
        &mut self,
        mzs: Vec<f64>,
        intensities: Vec<f64>,
        intensity_unit: Unit,
    ) -> Result<(), ArrayRetrievalError> {
        if mzs.len() != intensities.len() {
            return Err(ArrayRetrievalError::LengthMismatch(
                mzs.len(),
                intensities.len(),
            ));
        }
        self.replace_mz_intensity_arrays(mzs, intensities, intensity_unit);
        Ok(())
    }

    fn replace_mz_intensity_arrays(
        &mut self,
        mzs: Vec<f64>,
        intensities: Vec<f64>,
        intensity_unit: Unit,
    ) {
        self.default_array_length = mzs.len();
        self.binary_data_arrays.clear();
        self.binary_data_arrays.push(Arc::new(BinaryDataArray::new(
            &ArrayType::MZArray,
            Some(Unit::MZ),
            mzs,
        )));
        self.binary_data_arrays.push(Arc::new(BinaryDataArray::new(
            &ArrayType::IntensityArray,
            Some(intensity_unit),
            intensities,
        )));
    }

    /// Build an [`mzpeaks::PeakSet`] from the m/z and intensity arrays
    pub fn peaks(&self) -> Result<PeakSet, ArrayRetrievalError> {
        let pairs = self.get_mz_intensity_pairs()?;
        let peaks: Vec<CentroidPeak> = pairs
            .iter()
            .enumerate()
            .map(|(i, p)| CentroidPeak {
                mz: p.mz,
                intensity: p.intensity as f32,
                index: i as u32,
            })
            .collect();
        Ok(PeakSet::new(peaks))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mzpeaks::prelude::*;
    use mzpeaks::Tolerance;

    fn make_pairs(n: usize) -> Vec<MZIntensityPair> {
        (0..n)
            .map(|i| MZIntensityPair::new(100.0 + i as f64, (i * i) as f64))
            .collect()
    }

    #[test]
    fn test_pairs_roundtrip() -> Result<(), ArrayRetrievalError> {
        let pairs = make_pairs(10);
        let mut spectrum = Spectrum::new(SpectrumIdentity::new(0, "scan=1"));
        spectrum.set_mz_intensity_pairs(&pairs, Unit::DetectorCounts);
        assert_eq!(spectrum.default_array_length, 10);
        assert_eq!(spectrum.binary_data_arrays.len(), 2);
        assert_eq!(spectrum.intensity_array().unwrap().unit(), Unit::DetectorCounts);

        let mut out = vec![MZIntensityPair::default(); 10];
        spectrum.get_mz_intensity_pairs_into(&mut out)?;
        assert_eq!(out, pairs);
        assert_eq!(spectrum.get_mz_intensity_pairs()?, pairs);
        Ok(())
    }

    #[test]
    fn test_set_replaces_arrays() {
        let mut spectrum = Spectrum::default();
        spectrum.set_mz_intensity_pairs(&make_pairs(4), Unit::DetectorCounts);
        spectrum.set_mz_intensity_pairs(&make_pairs(2), Unit::PercentBasePeak);
        assert_eq!(spectrum.binary_data_arrays.len(), 2);
        assert_eq!(spectrum.default_array_length, 2);
        assert!(spectrum.has_binary_data());
    }

    #[test]
    fn test_size_checks() {
        let mut spectrum = Spectrum::default();
        spectrum.set_mz_intensity_pairs(&make_pairs(5), Unit::DetectorCounts);
        let mut out = vec![MZIntensityPair::default(); 4];
        assert_eq!(
            spectrum.get_mz_intensity_pairs_into(&mut out),
            Err(ArrayRetrievalError::SizeMismatch {
                array: ArrayType::MZArray,
                expected: 4,
                actual: 5
            })
        );

        Arc::make_mut(&mut spectrum.binary_data_arrays[1]).data.pop();
        let mut out = vec![MZIntensityPair::default(); 5];
        assert!(matches!(
            spectrum.get_mz_intensity_pairs_into(&mut out),
            Err(ArrayRetrievalError::SizeMismatch {
                array: ArrayType::IntensityArray,
                ..
            })
        ));
        assert_eq!(
            spectrum.get_mz_intensity_pairs(),
            Err(ArrayRetrievalError::LengthMismatch(5, 4))
        );
        assert!(spectrum
            .set_mz_intensity_arrays(vec![1.0], vec![], Unit::DetectorCounts)
            .is_err());
    }

    #[test]
    fn test_missing_arrays() {
        let mut spectrum = Spectrum::default();
        assert_eq!(
            spectrum.get_mz_intensity_pairs(),
            Err(ArrayRetrievalError::NotFound(ArrayType::MZArray))
        );
        spectrum.binary_data_arrays.push(Arc::new(BinaryDataArray::new(
            &ArrayType::MZArray,
            None,
            vec![1.0],
        )));
        assert_eq!(
            spectrum.get_mz_intensity_pairs(),
            Err(ArrayRetrievalError::NotFound(ArrayType::IntensityArray))
        );
    }

    #[test]
    fn test_metadata_accessors() {
        let mut spectrum = Spectrum::default();
        assert!(spectrum.is_empty());
        spectrum.set(terms::MS_LEVEL, 2, Unit::Unknown);
        spectrum.set_flag(terms::CENTROID_SPECTRUM);
        assert_eq!(spectrum.ms_level(), Some(2));
        assert_eq!(spectrum.signal_continuity(), SignalContinuity::Centroid);
        assert!(!spectrum.is_empty());
        assert!(!spectrum.has_binary_data());
    }

    #[test]
    fn test_peaks() -> Result<(), ArrayRetrievalError> {
        let mut spectrum = Spectrum::default();
        spectrum.set_mz_intensity_pairs(&make_pairs(5), Unit::DetectorCounts);
        let peaks = spectrum.peaks()?;
        assert_eq!(peaks.len(), 5);
        assert!(peaks.has_peak(102.0, Tolerance::PPM(5.0)).is_some());
        assert!(peaks.has_peak(102.5, Tolerance::PPM(5.0)).is_none());
        Ok(())
    }
}
