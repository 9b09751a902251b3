//! Sub-listing a [`SpectrumList`] by a predicate.
//!
//! [`SpectrumListFilter`] decides membership once, when it is built. It asks the predicate
//! about each spectrum's cheap identity first, and only materializes the spectrum when the
//! identity alone is not enough to decide.
use std::sync::Arc;

use log::debug;

use crate::io::{DetailLevel, SpectrumAccessError, SpectrumList, SpectrumListPtr};
use crate::meta::{DataProcessing, ProcessingMethod};
use crate::params::{ParamDescribed, UserParam};
use crate::spectrum::{Spectrum, SpectrumIdentity, SpectrumPtr};

use super::wrapper::{extended_data_processing, SpectrumProcessingError};

/// The answer a [`SpectrumPredicate`] gives about a spectrum's identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tribool {
    Accept,
    Reject,
    /// The identity is not enough, ask again with the full spectrum
    Indeterminate,
}

impl From<bool> for Tribool {
    fn from(value: bool) -> Self {
        if value {
            Self::Accept
        } else {
            Self::Reject
        }
    }
}

impl From<Option<bool>> for Tribool {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Indeterminate, Self::from)
    }
}

/// Decides which spectra a [`SpectrumListFilter`] keeps.
///
/// The defaults reject anything the identity check does not settle, so a predicate only needs
/// [`SpectrumPredicate::accept_spectrum`] if it ever answers [`Tribool::Indeterminate`].
pub trait SpectrumPredicate {
    fn accept_identity(&mut self, identity: &SpectrumIdentity) -> Tribool;

    fn accept_spectrum(&mut self, spectrum: &Spectrum) -> bool {
        let _ = spectrum;
        false
    }

    /// `true` once no later spectrum can be accepted.
    ///
    /// Predicates that rely on the inner list being sorted by what they inspect use this to
    /// stop the scan early. The filter trusts the answer and does not check the ordering.
    fn done(&self) -> bool {
        false
    }

    /// How much of a spectrum [`SpectrumPredicate::accept_spectrum`] needs to see
    fn suggested_detail_level(&self) -> DetailLevel {
        DetailLevel::FullMetadata
    }

    fn describe(&self) -> String;
}

impl<P: SpectrumPredicate + ?Sized> SpectrumPredicate for Box<P> {
    fn accept_identity(&mut self, identity: &SpectrumIdentity) -> Tribool {
        (**self).accept_identity(identity)
    }

    fn accept_spectrum(&mut self, spectrum: &Spectrum) -> bool {
        (**self).accept_spectrum(spectrum)
    }

    fn done(&self) -> bool {
        (**self).done()
    }

    fn suggested_detail_level(&self) -> DetailLevel {
        (**self).suggested_detail_level()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<P: SpectrumPredicate + ?Sized> SpectrumPredicate for &mut P {
    fn accept_identity(&mut self, identity: &SpectrumIdentity) -> Tribool {
        (**self).accept_identity(identity)
    }

    fn accept_spectrum(&mut self, spectrum: &Spectrum) -> bool {
        (**self).accept_spectrum(spectrum)
    }

    fn done(&self) -> bool {
        (**self).done()
    }

    fn suggested_detail_level(&self) -> DetailLevel {
        (**self).suggested_detail_level()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// The spectra of an inner list that a [`SpectrumPredicate`] accepts, renumbered from zero.
///
/// Spectra served by the filter are copies of the inner list's spectra whose index is their
/// position in the filter. The inner list is never modified.
#[derive(Debug, Clone)]
pub struct SpectrumListFilter {
    inner: SpectrumListPtr,
    identities: Vec<SpectrumIdentity>,
    index_map: Vec<usize>,
    data_processing: Arc<DataProcessing>,
}

impl SpectrumListFilter {
    /// Scan `inner` with `predicate` and build the filtered view.
    ///
    /// Fails if any identity or spectrum the predicate needs cannot be read.
    pub fn new<P: SpectrumPredicate>(
        inner: SpectrumListPtr,
        mut predicate: P,
    ) -> Result<Self, SpectrumProcessingError> {
        let mut identities = Vec::new();
        let mut index_map = Vec::new();
        let detail_level = predicate.suggested_detail_level();
        let size = inner.len();

        let mut scanned = 0;
        for i in 0..size {
            scanned += 1;
            let identity = inner.spectrum_identity(i)?;
            let accepted = match predicate.accept_identity(identity) {
                Tribool::Accept => true,
                Tribool::Reject => false,
                Tribool::Indeterminate => {
                    let spectrum = inner.spectrum_with_detail(i, detail_level)?;
                    predicate.accept_spectrum(&spectrum)
                }
            };
            if accepted {
                let mut identity = identity.clone();
                identity.index = index_map.len();
                identities.push(identity);
                index_map.push(i);
            }
            if predicate.done() {
                break;
            }
        }

        let description = predicate.describe();
        debug!(
            "Filter by {description} accepted {} of {scanned} scanned spectra ({size} total)",
            index_map.len()
        );

        let mut method = ProcessingMethod::default();
        method.add_user_param(UserParam::new("filter", description));
        let data_processing = extended_data_processing(inner.as_ref(), method);

        Ok(Self {
            inner,
            identities,
            index_map,
            data_processing,
        })
    }

    /// The index in the inner list of each spectrum in the filter
    pub fn index_map(&self) -> &[usize] {
        &self.index_map
    }

    pub fn original_index(&self, index: usize) -> Option<usize> {
        self.index_map.get(index).copied()
    }

    fn map_index(&self, index: usize) -> Result<usize, SpectrumAccessError> {
        self.original_index(index)
            .ok_or(SpectrumAccessError::IndexOutOfRange {
                index,
                size: self.index_map.len(),
            })
    }

    fn renumber(mut spectrum: SpectrumPtr, index: usize) -> SpectrumPtr {
        if spectrum.index() != index {
            Arc::make_mut(&mut spectrum).identity.index = index;
        }
        spectrum
    }
}

impl SpectrumList for SpectrumListFilter {
    fn len(&self) -> usize {
        self.identities.len()
    }

    fn spectrum_identity(&self, index: usize) -> Result<&SpectrumIdentity, SpectrumAccessError> {
        self.identities
            .get(index)
            .ok_or(SpectrumAccessError::IndexOutOfRange {
                index,
                size: self.identities.len(),
            })
    }

    fn spectrum(
        &self,
        index: usize,
        get_binary_data: bool,
    ) -> Result<SpectrumPtr, SpectrumAccessError> {
        let original = self.map_index(index)?;
        let spectrum = self.inner.spectrum(original, get_binary_data)?;
        Ok(Self::renumber(spectrum, index))
    }

    fn supports_native_centroiding(&self) -> bool {
        self.inner.supports_native_centroiding()
    }

    fn centroided_spectrum(
        &self,
        index: usize,
        get_binary_data: bool,
    ) -> Result<SpectrumPtr, SpectrumAccessError> {
        let original = self.map_index(index)?;
        let spectrum = self.inner.centroided_spectrum(original, get_binary_data)?;
        Ok(Self::renumber(spectrum, index))
    }

    fn data_processing(&self) -> Option<Arc<DataProcessing>> {
        Some(self.data_processing.clone())
    }
}
