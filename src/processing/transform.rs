use std::fmt;
use std::sync::Arc;

use log::{trace, warn};

use crate::io::{SpectrumAccessError, SpectrumList, SpectrumListPtr};
use crate::meta::{DataProcessing, ProcessingMethod};
use crate::params::{terms, CVParam, ParamDescribed, UserParam};
use crate::spectrum::bindata::find_mz_intensity_arrays;
use crate::spectrum::{Spectrum, SpectrumPtr};

use super::wrapper::extended_data_processing;

/// An operation that rewrites a spectrum's content in place
pub trait SpectrumTransform: fmt::Debug + Send + Sync {
    fn transform(&self, spectrum: &mut Spectrum);

    /// The step to record in the processing history of transformed spectra
    fn processing_method(&self) -> ProcessingMethod;

    /// Whether the transform changes anything besides binary data. When it does not, a
    /// caller that asks for a spectrum without binary data gets the inner spectrum unchanged.
    fn affects_metadata(&self) -> bool {
        false
    }
}

/// A [`SpectrumList`] that applies a [`SpectrumTransform`] to every spectrum it serves.
///
/// The inner list's spectra are never modified. Each retrieved spectrum is copied on write
/// before the transform runs, and its processing history is replaced by the inner history plus
/// the transform's step.
#[derive(Debug, Clone)]
pub struct SpectrumListTransformer<T: SpectrumTransform> {
    inner: SpectrumListPtr,
    transform: T,
    data_processing: Arc<DataProcessing>,
}

impl<T: SpectrumTransform> SpectrumListTransformer<T> {
    pub fn new(inner: SpectrumListPtr, transform: T) -> Self {
        let data_processing = extended_data_processing(inner.as_ref(), transform.processing_method());
        Self {
            inner,
            transform,
            data_processing,
        }
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    fn apply(&self, mut spectrum: SpectrumPtr) -> SpectrumPtr {
        trace!(
            "Applying {:?} to spectrum {}",
            self.transform,
            spectrum.index()
        );
        let target = Arc::make_mut(&mut spectrum);
        self.transform.transform(target);
        target.data_processing = Some(self.data_processing.clone());
        spectrum
    }
}

impl<T: SpectrumTransform> SpectrumList for SpectrumListTransformer<T> {
    crate::delegate_spectrum_list!(
        inner;
        len,
        spectrum_identity,
        find,
        find_native,
        find_abbreviated,
        find_name_value,
        find_spot_id,
        supports_native_centroiding,
    );

    fn spectrum(
        &self,
        index: usize,
        get_binary_data: bool,
    ) -> Result<SpectrumPtr, SpectrumAccessError> {
        if !get_binary_data && !self.transform.affects_metadata() {
            return self.inner.spectrum(index, false);
        }
        let spectrum = self.inner.spectrum(index, true)?;
        Ok(self.apply(spectrum))
    }

    fn centroided_spectrum(
        &self,
        index: usize,
        get_binary_data: bool,
    ) -> Result<SpectrumPtr, SpectrumAccessError> {
        if !get_binary_data && !self.transform.affects_metadata() {
            return self.inner.centroided_spectrum(index, false);
        }
        let spectrum = self.inner.centroided_spectrum(index, true)?;
        Ok(self.apply(spectrum))
    }

    fn data_processing(&self) -> Option<Arc<DataProcessing>> {
        Some(self.data_processing.clone())
    }
}

/// Keep only the points for which `keep(mz, intensity)` holds, in every array that is as
/// long as the m/z array.
///
/// Returns `false` and leaves the spectrum untouched when it has no usable m/z and intensity
/// arrays.
fn retain_points<F: Fn(f64, f64) -> bool>(spectrum: &mut Spectrum, keep: F) -> bool {
    let mask: Vec<bool> = match find_mz_intensity_arrays(&spectrum.binary_data_arrays) {
        (Some(mzs), Some(intensities)) if mzs.len() == intensities.len() => mzs
            .data
            .iter()
            .zip(intensities.data.iter())
            .map(|(mz, intensity)| keep(*mz, *intensity))
            .collect(),
        _ => {
            warn!(
                "Spectrum {} does not have matching m/z and intensity arrays, leaving it unchanged",
                spectrum.id()
            );
            return false;
        }
    };
    let n = mask.len();
    for array in spectrum.binary_data_arrays.iter_mut() {
        if array.len() != n {
            continue;
        }
        let mut flags = mask.iter().copied();
        Arc::make_mut(array)
            .data
            .retain(|_| flags.next().unwrap_or_default());
    }
    spectrum.default_array_length = mask.into_iter().filter(|k| *k).count();
    true
}

/// Keep only the points whose m/z lies within `[low, high]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MzWindow {
    pub low: f64,
    pub high: f64,
}

impl MzWindow {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, mz: f64) -> bool {
        self.low <= mz && mz <= self.high
    }
}

impl SpectrumTransform for MzWindow {
    fn transform(&self, spectrum: &mut Spectrum) {
        retain_points(spectrum, |mz, _| self.contains(mz));
    }

    fn processing_method(&self) -> ProcessingMethod {
        let mut method = ProcessingMethod::default();
        method.add_param(CVParam::from_curie(terms::DATA_PROCESSING_ACTION));
        method.add_user_param(UserParam::new(
            "m/z window",
            format!("[{}, {}]", self.low, self.high),
        ));
        method
    }
}

/// Drop every point whose intensity is below `threshold`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityThreshold {
    pub threshold: f64,
}

impl IntensityThreshold {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl SpectrumTransform for IntensityThreshold {
    fn transform(&self, spectrum: &mut Spectrum) {
        retain_points(spectrum, |_, intensity| intensity >= self.threshold);
    }

    fn processing_method(&self) -> ProcessingMethod {
        let mut method = ProcessingMethod::default();
        method.add_param(CVParam::from_curie(terms::LOW_INTENSITY_DATA_POINT_REMOVAL));
        method.add_user_param(UserParam::new("intensity threshold", self.threshold));
        method
    }
}
