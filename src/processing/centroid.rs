use std::sync::Arc;

use log::trace;

use crate::io::{SpectrumAccessError, SpectrumList, SpectrumListPtr};
use crate::meta::{DataProcessing, ProcessingMethod};
use crate::params::{terms, CVParam, ParamDescribed};
use crate::spectrum::SpectrumPtr;

use super::wrapper::{extended_data_processing, SpectrumProcessingError};

const CAPABILITY: &str = "native centroiding";

/// Serves the centroided spectra the inner list produces itself, for sources like vendor
/// readers that can centroid their own profile data.
///
/// Construction fails when the inner list cannot do this, so the wrapper never exists in a
/// state where retrieving a spectrum would be unsupported.
#[derive(Debug, Clone)]
pub struct SpectrumListNativeCentroider {
    inner: SpectrumListPtr,
    data_processing: Arc<DataProcessing>,
}

impl SpectrumListNativeCentroider {
    /// Whether `inner` can be wrapped
    pub fn accept(inner: &dyn SpectrumList) -> bool {
        inner.supports_native_centroiding()
    }

    pub fn new(inner: SpectrumListPtr) -> Result<Self, SpectrumProcessingError> {
        if !Self::accept(inner.as_ref()) {
            return Err(SpectrumProcessingError::UnsupportedCapability {
                wrapper: "SpectrumListNativeCentroider".to_string(),
                capability: CAPABILITY.to_string(),
            });
        }
        let mut method = ProcessingMethod::default();
        method.add_param(CVParam::from_curie(terms::PEAK_PICKING));
        let data_processing = extended_data_processing(inner.as_ref(), method);
        Ok(Self {
            inner,
            data_processing,
        })
    }
}

impl SpectrumList for SpectrumListNativeCentroider {
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
        centroided_spectrum,
    );

    fn spectrum(
        &self,
        index: usize,
        get_binary_data: bool,
    ) -> Result<SpectrumPtr, SpectrumAccessError> {
        let mut spectrum = self.inner.centroided_spectrum(index, get_binary_data)?;
        trace!("Natively centroided spectrum {index}");
        let target = Arc::make_mut(&mut spectrum);
        target.params_mut().remove(terms::PROFILE_SPECTRUM);
        target.set_flag(terms::CENTROID_SPECTRUM);
        target.data_processing = Some(self.data_processing.clone());
        Ok(spectrum)
    }

    fn data_processing(&self) -> Option<Arc<DataProcessing>> {
        Some(self.data_processing.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::SpectrumListSimple;
    use crate::params::Unit;
    use crate::spectrum::{MZIntensityPair, SignalContinuity, Spectrum, SpectrumIdentity};

    /// A source that knows how to centroid its own profile spectra, by keeping local maxima
    #[derive(Debug)]
    struct SelfCentroidingList {
        inner: SpectrumListPtr,
    }

    impl SpectrumList for SelfCentroidingList {
        crate::delegate_spectrum_list!(inner; len, spectrum_identity, spectrum);

        fn supports_native_centroiding(&self) -> bool {
            true
        }

        fn centroided_spectrum(
            &self,
            index: usize,
            get_binary_data: bool,
        ) -> Result<SpectrumPtr, SpectrumAccessError> {
            let mut spectrum = self.inner.spectrum(index, true)?;
            if get_binary_data {
                let pairs = spectrum.get_mz_intensity_pairs()?;
                let maxima: Vec<MZIntensityPair> = pairs
                    .windows(3)
                    .filter(|w| w[1].intensity > w[0].intensity && w[1].intensity > w[2].intensity)
                    .map(|w| w[1])
                    .collect();
                Arc::make_mut(&mut spectrum).set_mz_intensity_pairs(&maxima, Unit::DetectorCounts);
            }
            Ok(spectrum)
        }
    }

    fn make_profile_list() -> SpectrumListPtr {
        let list: SpectrumListSimple = (0..3)
            .map(|i| {
                let mut spectrum = Spectrum::new(SpectrumIdentity::new(0, format!("scan={}", i + 1)));
                spectrum.set_flag(terms::PROFILE_SPECTRUM);
                let pairs: Vec<_> = [1.0, 5.0, 1.0, 2.0, 8.0, 3.0, 1.0]
                    .iter()
                    .enumerate()
                    .map(|(j, inten)| MZIntensityPair::new(100.0 + j as f64 * 0.01, *inten))
                    .collect();
                spectrum.set_mz_intensity_pairs(&pairs, Unit::DetectorCounts);
                spectrum
            })
            .collect();
        Arc::new(list)
    }

    #[test]
    fn test_capability_gate() {
        let plain = make_profile_list();
        assert!(!SpectrumListNativeCentroider::accept(plain.as_ref()));
        let err = SpectrumListNativeCentroider::new(plain).unwrap_err();
        assert!(matches!(
            err,
            SpectrumProcessingError::UnsupportedCapability { ref capability, .. } if capability == CAPABILITY
        ));
    }

    #[test]
    fn test_native_centroiding() -> Result<(), SpectrumAccessError> {
        let source: SpectrumListPtr = Arc::new(SelfCentroidingList {
            inner: make_profile_list(),
        });
        assert!(SpectrumListNativeCentroider::accept(source.as_ref()));
        let centroider = SpectrumListNativeCentroider::new(source.clone()).unwrap();
        assert_eq!(centroider.len(), 3);

        let spectrum = centroider.spectrum(2, true)?;
        assert_eq!(spectrum.signal_continuity(), SignalContinuity::Centroid);
        assert_eq!(spectrum.intensity_array().unwrap().data, vec![5.0, 8.0]);
        assert_eq!(spectrum.index(), 2);
        assert!(spectrum
            .data_processing
            .as_ref()
            .unwrap()
            .methods[0]
            .has_cv_param(terms::PEAK_PICKING));

        let original = source.spectrum(2, true)?;
        assert_eq!(original.signal_continuity(), SignalContinuity::Profile);
        assert_eq!(original.default_array_length, 7);
        Ok(())
    }
}
