use std::sync::Arc;

use crate::impl_param_described;
use crate::meta::DataProcessing;
use crate::params::{ParamContainer, Unit};

use super::bindata::{ArrayRetrievalError, ArrayType, BinaryDataArray, BinaryDataArrayRef};
use super::pairs::TimeIntensityPair;
use super::scan_properties::{Precursor, Product};
use super::spectrum::IDENTITY_INDEX_NONE;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChromatogramIdentity {
    pub index: usize,
    pub id: String,
    pub source_file_position: Option<u64>,
}

impl Default for ChromatogramIdentity {
    fn default() -> Self {
        Self {
            index: IDENTITY_INDEX_NONE,
            id: String::new(),
            source_file_position: None,
        }
    }
}

impl ChromatogramIdentity {
    pub fn new<S: Into<String>>(index: usize, id: S) -> Self {
        Self {
            index,
            id: id.into(),
            source_file_position: None,
        }
    }
}

/// A signal traced over time, like a TIC or an SRM transition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chromatogram {
    pub identity: ChromatogramIdentity,
    pub default_array_length: usize,
    pub data_processing: Option<Arc<DataProcessing>>,
    pub precursor: Option<Precursor>,
    pub product: Option<Product>,
    pub binary_data_arrays: Vec<BinaryDataArrayRef>,
    pub params: ParamContainer,
}

impl_param_described!(Chromatogram);

impl Chromatogram {
    pub fn new(identity: ChromatogramIdentity) -> Self {
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

    pub fn is_empty(&self) -> bool {
        self.identity.index == IDENTITY_INDEX_NONE
            && self.identity.id.is_empty()
            && self.default_array_length == 0
            && self.data_processing.as_ref().map_or(true, |dp| dp.is_empty())
            && self.precursor.as_ref().map_or(true, |p| p.is_empty())
            && self.product.as_ref().map_or(true, |p| p.is_empty())
            && self.binary_data_arrays.is_empty()
            && self.params.is_empty()
    }

    pub fn array_by_type(&self, array_type: &ArrayType) -> Option<&BinaryDataArray> {
        self.binary_data_arrays
            .iter()
            .map(|a| a.as_ref())
            .find(|a| a.is_a(array_type))
    }

    pub fn time_array(&self) -> Option<&BinaryDataArray> {
        self.array_by_type(&ArrayType::TimeArray)
    }

    pub fn intensity_array(&self) -> Option<&BinaryDataArray> {
        self.array_by_type(&ArrayType::IntensityArray)
    }

    fn paired_arrays(&self) -> Result<(&BinaryDataArray, &BinaryDataArray), ArrayRetrievalError> {
        let times = self
            .time_array()
            .ok_or(ArrayRetrievalError::NotFound(ArrayType::TimeArray))?;
        let intensities = self
            .intensity_array()
            .ok_or(ArrayRetrievalError::NotFound(ArrayType::IntensityArray))?;
        Ok((times, intensities))
    }

    pub fn get_time_intensity_pairs_into(
        &self,
        output: &mut [TimeIntensityPair],
    ) -> Result<(), ArrayRetrievalError> {
        let (times, intensities) = self.paired_arrays()?;
        let expected = output.len();
        for (array, arr) in [
            (ArrayType::TimeArray, times),
            (ArrayType::IntensityArray, intensities),
        ] {
            if arr.len() != expected {
                return Err(ArrayRetrievalError::SizeMismatch {
                    array,
                    expected,
                    actual: arr.len(),
                });
            }
        }
        for ((pair, time), intensity) in output
            .iter_mut()
            .zip(times.data.iter())
            .zip(intensities.data.iter())
        {
            pair.time = *time;
            pair.intensity = *intensity;
        }
        Ok(())
    }

    pub fn get_time_intensity_pairs(
        &self,
    ) -> Result<Vec<TimeIntensityPair>, ArrayRetrievalError> {
        let (times, intensities) = self.paired_arrays()?;
        if times.len() != intensities.len() {
            return Err(ArrayRetrievalError::LengthMismatch(
                times.len(),
                intensities.len(),
            ));
        }
        let mut output = vec![TimeIntensityPair::default(); times.len()];
        self.get_time_intensity_pairs_into(&mut output)?;
        Ok(output)
    }

    /// Replace all binary data with a time array and an intensity array built from `pairs`
    pub fn set_time_intensity_pairs(
        &mut self,
        pairs: &[TimeIntensityPair],
        time_unit: Unit,
        intensity_unit: Unit,
    ) {
        let (times, intensities): (Vec<f64>, Vec<f64>) =
            pairs.iter().map(|p| (p.time, p.intensity)).unzip();
        self.default_array_length = pairs.len();
        self.binary_data_arrays = vec![
            Arc::new(BinaryDataArray::new(
                &ArrayType::TimeArray,
                Some(time_unit),
                times,
            )),
            Arc::new(BinaryDataArray::new(
                &ArrayType::IntensityArray,
                Some(intensity_unit),
                intensities,
            )),
        ];
    }

    /// The time of the most intense point
    pub fn apex_time(&self) -> Option<f64> {
        let (times, intensities) = self.paired_arrays().ok()?;
        times
            .data
            .iter()
            .zip(intensities.data.iter())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(t, _)| *t)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_time_intensity_pairs() -> Result<(), ArrayRetrievalError> {
        let pairs: Vec<TimeIntensityPair> = (0..6)
            .map(|i| TimeIntensityPair::new(i as f64 * 0.5, (10 - (i as i32 - 3).abs()) as f64))
            .collect();
        let mut chrom = Chromatogram::new(ChromatogramIdentity::new(0, "TIC"));
        chrom.set_time_intensity_pairs(&pairs, Unit::Minute, Unit::DetectorCounts);
        assert_eq!(chrom.default_array_length, 6);
        assert_eq!(chrom.time_array().unwrap().unit(), Unit::Minute);
        assert_eq!(chrom.get_time_intensity_pairs()?, pairs);
        assert_eq!(chrom.apex_time(), Some(1.5));

        let mut short = vec![TimeIntensityPair::default(); 3];
        assert!(matches!(
            chrom.get_time_intensity_pairs_into(&mut short),
            Err(ArrayRetrievalError::SizeMismatch {
                array: ArrayType::TimeArray,
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn test_empty() {
        assert!(Chromatogram::default().is_empty());
        assert!(!Chromatogram::new(ChromatogramIdentity::new(0, "TIC")).is_empty());
        assert!(Chromatogram::default().get_time_intensity_pairs().is_err());
    }
}
