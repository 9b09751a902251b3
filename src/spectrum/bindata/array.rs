use std::fmt::Display;
use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::impl_param_described;
use crate::meta::DataProcessing;
use crate::params::{terms, CVParam, ParamContainer, ParamDescribed, Unit, CURIE};

/// The kinds of data arrays found in mass spectrometry data files governed
/// by the PSI-MS controlled vocabulary.
#[derive(Debug, Clone, PartialEq, Hash, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayType {
    #[default]
    Unknown,
    MZArray,
    IntensityArray,
    ChargeArray,
    SignalToNoiseArray,
    TimeArray,
    WavelengthArray,
    NonStandardDataArray {
        name: Box<String>,
    },
}

const NON_STANDARD_DATA_ARRAY: CURIE = crate::curie!(MS:1000786);

impl Display for ArrayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl ArrayType {
    /// Create a [`ArrayType::NonStandardDataArray`] with the provided name.
    pub fn nonstandard<S: ToString>(name: S) -> ArrayType {
        ArrayType::NonStandardDataArray {
            name: name.to_string().into(),
        }
    }

    pub const fn curie(&self) -> Option<CURIE> {
        match self {
            Self::MZArray => Some(terms::MZ_ARRAY),
            Self::IntensityArray => Some(terms::INTENSITY_ARRAY),
            Self::ChargeArray => Some(terms::CHARGE_ARRAY),
            Self::SignalToNoiseArray => Some(terms::SIGNAL_TO_NOISE_ARRAY),
            Self::TimeArray => Some(terms::TIME_ARRAY),
            Self::WavelengthArray => Some(terms::WAVELENGTH_ARRAY),
            Self::NonStandardDataArray { .. } => Some(NON_STANDARD_DATA_ARRAY),
            Self::Unknown => None,
        }
    }

    pub fn from_accession(accession: CURIE) -> Option<Self> {
        match accession {
            terms::MZ_ARRAY => Some(Self::MZArray),
            terms::INTENSITY_ARRAY => Some(Self::IntensityArray),
            terms::CHARGE_ARRAY => Some(Self::ChargeArray),
            terms::SIGNAL_TO_NOISE_ARRAY => Some(Self::SignalToNoiseArray),
            terms::TIME_ARRAY => Some(Self::TimeArray),
            terms::WAVELENGTH_ARRAY => Some(Self::WavelengthArray),
            _ => None,
        }
    }

    /// Create a [`CVParam`] tagging an array with this type.
    ///
    /// If a unit is provided, that unit will be specified, otherwise a default unit may
    /// be used instead.
    pub fn as_param(&self, unit: Option<Unit>) -> Option<CVParam> {
        let curie = self.curie()?;
        let param = CVParam::from_curie(curie);
        let param = match self {
            Self::MZArray => param.with_unit(unit.unwrap_or(Unit::MZ)),
            Self::IntensityArray => param.with_unit(unit.unwrap_or(Unit::DetectorCounts)),
            Self::TimeArray => param.with_unit(unit.unwrap_or(Unit::Second)),
            Self::WavelengthArray => param.with_unit(unit.unwrap_or(Unit::Nanometer)),
            Self::NonStandardDataArray { name } => {
                let mut param = param.with_value(name);
                param.name = "non-standard data array".into();
                param.with_unit(unit.unwrap_or_default())
            }
            _ => param.with_unit(unit.unwrap_or_default()),
        };
        Some(param)
    }
}

/// A high level set of failure modes that an operation to retrieve a typed memory buffer
/// from a spectrum or chromatogram might encounter. Also used to report encoding failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ArrayRetrievalError {
    #[error("Array type {0:?} not found")]
    NotFound(ArrayType),
    #[error("{array} has an invalid size, expected {expected} but found {actual}")]
    SizeMismatch {
        array: ArrayType,
        expected: usize,
        actual: usize,
    },
    #[error("Paired arrays do not have the same length ({0} != {1})")]
    LengthMismatch(usize, usize),
    #[error("An error occurred while decompressing: {0}")]
    DecompressionError(String),
    #[error("The requested data type does not match the number of bytes available in the buffer")]
    DataTypeSizeMismatch,
    #[error("Failed to decode base64: {0}")]
    Base64(String),
}

impl From<bytemuck::PodCastError> for ArrayRetrievalError {
    fn from(_value: bytemuck::PodCastError) -> Self {
        Self::DataTypeSizeMismatch
    }
}

impl From<base64_simd::Error> for ArrayRetrievalError {
    fn from(value: base64_simd::Error) -> Self {
        Self::Base64(value.to_string())
    }
}

impl From<ArrayRetrievalError> for io::Error {
    fn from(value: ArrayRetrievalError) -> Self {
        match value {
            ArrayRetrievalError::NotFound(_) => io::Error::new(io::ErrorKind::NotFound, value),
            ArrayRetrievalError::DecompressionError(e) => {
                io::Error::new(io::ErrorKind::InvalidData, e)
            }
            _ => io::Error::new(io::ErrorKind::InvalidData, value),
        }
    }
}

/// An ordered sequence of `f64` values, tagged with its [`ArrayType`] through a controlled
/// vocabulary term in its parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinaryDataArray {
    pub data: Vec<f64>,
    pub params: ParamContainer,
    /// How this array came to be, when it differs from the owning spectrum's processing
    pub data_processing: Option<Arc<DataProcessing>>,
}

pub type BinaryDataArrayRef = Arc<BinaryDataArray>;

impl_param_described!(BinaryDataArray);

impl BinaryDataArray {
    pub fn new(array_type: &ArrayType, unit: Option<Unit>, data: Vec<f64>) -> Self {
        let mut params = ParamContainer::default();
        if let Some(tag) = array_type.as_param(unit) {
            params.cv_params.push(tag);
        }
        Self {
            data,
            params,
            data_processing: None,
        }
    }

    /// The first array type named in this array's terms
    pub fn array_type(&self) -> ArrayType {
        for param in self.params.cv_params.iter() {
            if param.accession == NON_STANDARD_DATA_ARRAY {
                return ArrayType::nonstandard(&param.value);
            }
            if let Some(t) = ArrayType::from_accession(param.accession) {
                return t;
            }
        }
        ArrayType::Unknown
    }

    pub fn is_a(&self, array_type: &ArrayType) -> bool {
        match array_type {
            ArrayType::NonStandardDataArray { name } => self
                .cv_param(NON_STANDARD_DATA_ARRAY)
                .is_some_and(|p| p.value == **name),
            _ => array_type.curie().is_some_and(|c| self.has_cv_param(c)),
        }
    }

    pub fn unit(&self) -> Unit {
        self.array_type()
            .curie()
            .and_then(|c| self.cv_param(c))
            .map(|p| p.unit)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.params.is_empty() && self.data_processing.is_none()
    }
}

/// The first array of each kind in `arrays`, treating a wavelength array as a stand-in for
/// the m/z array
pub(crate) fn find_mz_intensity_arrays(
    arrays: &[BinaryDataArrayRef],
) -> (Option<&BinaryDataArray>, Option<&BinaryDataArray>) {
    let mut mz_array = None;
    let mut intensity_array = None;
    for arr in arrays.iter().map(|a| a.as_ref()) {
        if mz_array.is_none()
            && (arr.is_a(&ArrayType::MZArray) || arr.is_a(&ArrayType::WavelengthArray))
        {
            mz_array = Some(arr);
        }
        if intensity_array.is_none() && arr.is_a(&ArrayType::IntensityArray) {
            intensity_array = Some(arr);
        }
    }
    (mz_array, intensity_array)
}
