use std::fmt;
use std::io;
use std::iter::FusedIterator;
use std::sync::Arc;

use thiserror::Error;

use crate::io::DetailLevel;
use crate::meta::DataProcessing;
use crate::spectrum::bindata::ArrayRetrievalError;
use crate::spectrum::native_id;
use crate::spectrum::{Spectrum, SpectrumIdentity, SpectrumPtr};

/// Errors that can occur while retrieving a spectrum or its identity from a [`SpectrumList`]
#[derive(Debug, Error)]
pub enum SpectrumAccessError {
    /// The requested index is not smaller than the list's length
    #[error("Spectrum index {index} is out of range for a list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    /// The list has a slot at this index but nothing was ever stored in it
    #[error("No spectrum is stored at index {0}")]
    NullSpectrum(usize),
    /// An error resolving a spectrum by its native ID
    #[error("The requested spectrum native ID {0} was not found")]
    SpectrumIdNotFound(String),
    /// The list does not provide the requested capability
    #[error("This spectrum list does not support {0}")]
    Unsupported(String),
    #[error("Failed to retrieve binary data: {0}")]
    ArrayRetrieval(#[from] ArrayRetrievalError),
    /// An I/O error prevented reading the spectrum, even if it could be found.
    #[error("I/O error occurred while reading: {0:?}")]
    IOError(#[source] Option<io::Error>),
}

impl From<SpectrumAccessError> for io::Error {
    fn from(value: SpectrumAccessError) -> Self {
        let s = value.to_string();
        match value {
            SpectrumAccessError::IndexOutOfRange { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, s)
            }
            SpectrumAccessError::NullSpectrum(_) => io::Error::new(io::ErrorKind::NotFound, s),
            SpectrumAccessError::SpectrumIdNotFound(_) => {
                io::Error::new(io::ErrorKind::NotFound, s)
            }
            SpectrumAccessError::Unsupported(_) => io::Error::new(io::ErrorKind::Unsupported, s),
            SpectrumAccessError::ArrayRetrieval(e) => e.into(),
            SpectrumAccessError::IOError(e) => match e {
                Some(e) => e,
                None => io::Error::new(io::ErrorKind::Other, s),
            },
        }
    }
}

impl From<io::Error> for SpectrumAccessError {
    fn from(value: io::Error) -> Self {
        Self::IOError(Some(value))
    }
}

/// An indexed, random access source of spectra.
///
/// Implementations may be backed by memory, by a file, or by another list they decorate.
/// [`SpectrumList::spectrum_identity`] is expected to be cheap, while
/// [`SpectrumList::spectrum`] may do arbitrary work to materialize the spectrum.
///
/// Indices run from `0` to `len() - 1`, and the spectrum at index `i` reports `i` as its
/// own index.
pub trait SpectrumList: AsSpectrumList + fmt::Debug + Send + Sync {
    /// The number of spectra in the list
    fn len(&self) -> usize;

    /// `true` when the list has no spectra and carries no processing history.
    ///
    /// A list that a filter emptied still records that filter, so it is not empty. This is
    /// [ProteoWizard](https://github.com/ProteoWizard/pwiz)'s rule for `SpectrumList::empty`,
    /// and is stricter than checking `len() == 0`.
    fn is_empty(&self) -> bool {
        self.len() == 0 && self.data_processing().is_none()
    }

    /// The identity of the spectrum at `index`, without materializing the spectrum
    fn spectrum_identity(&self, index: usize) -> Result<&SpectrumIdentity, SpectrumAccessError>;

    /// Retrieve the spectrum at `index`. When `get_binary_data` is `false`, the list is
    /// free to leave the binary data arrays unread.
    fn spectrum(
        &self,
        index: usize,
        get_binary_data: bool,
    ) -> Result<SpectrumPtr, SpectrumAccessError>;

    /// Retrieve the spectrum at `index`, doing only as much work as `detail_level` asks for.
    ///
    /// The metadata-only levels produce a spectrum carrying nothing but its identity unless
    /// the list knows how to do better.
    fn spectrum_with_detail(
        &self,
        index: usize,
        detail_level: DetailLevel,
    ) -> Result<SpectrumPtr, SpectrumAccessError> {
        match detail_level {
            DetailLevel::InstantMetadata | DetailLevel::FastMetadata => {
                let identity = self.spectrum_identity(index)?;
                Ok(Arc::new(Spectrum::new(identity.clone())))
            }
            DetailLevel::FullMetadata | DetailLevel::FullData => {
                self.spectrum(index, detail_level.needs_binary_data())
            }
        }
    }

    /// Find the index of the spectrum whose `id` is `id`, or `len()` if there is none
    fn find(&self, id: &str) -> usize {
        (0..self.len())
            .find(|i| {
                self.spectrum_identity(*i)
                    .is_ok_and(|ident| ident.id == id)
            })
            .unwrap_or_else(|| self.len())
    }

    /// Find the index of the spectrum whose native id is `native_id`, or `len()` if there is none
    fn find_native(&self, native_id: &str) -> usize {
        (0..self.len())
            .find(|i| {
                self.spectrum_identity(*i)
                    .is_ok_and(|ident| ident.native_id == native_id)
            })
            .unwrap_or_else(|| self.len())
    }

    /// Find the index of the spectrum whose id, reduced to just its values joined by
    /// `delimiter`, is `abbreviated`, or `len()` if there is none
    fn find_abbreviated(&self, abbreviated: &str, delimiter: char) -> usize {
        (0..self.len())
            .find(|i| {
                self.spectrum_identity(*i).is_ok_and(|ident| {
                    native_id::abbreviate(&ident.id, delimiter)
                        .is_ok_and(|abbrev| abbrev == abbreviated)
                })
            })
            .unwrap_or_else(|| self.len())
    }

    /// The indices of all spectra whose id has the field `name` set to `value`
    fn find_name_value(&self, name: &str, value: &str) -> Vec<usize> {
        (0..self.len())
            .filter(|i| {
                self.spectrum_identity(*i)
                    .is_ok_and(|ident| native_id::value(&ident.id, name) == Some(value))
            })
            .collect()
    }

    /// The indices of all spectra acquired from the sample spot `spot_id`
    fn find_spot_id(&self, spot_id: &str) -> Vec<usize> {
        (0..self.len())
            .filter(|i| {
                self.spectrum_identity(*i)
                    .is_ok_and(|ident| ident.spot_id == spot_id)
            })
            .collect()
    }

    /// The processing history shared by every spectrum this list produces, if any
    fn data_processing(&self) -> Option<Arc<DataProcessing>> {
        None
    }

    /// Whether [`SpectrumList::centroided_spectrum`] can be called on this list
    fn supports_native_centroiding(&self) -> bool {
        false
    }

    /// Retrieve the spectrum at `index` centroided by the data source itself
    fn centroided_spectrum(
        &self,
        index: usize,
        get_binary_data: bool,
    ) -> Result<SpectrumPtr, SpectrumAccessError> {
        let _ = (index, get_binary_data);
        Err(SpectrumAccessError::Unsupported(
            "native centroiding".to_string(),
        ))
    }

    /// Iterate over the spectra in index order
    fn iter(&self, get_binary_data: bool) -> SpectrumListIter<'_> {
        SpectrumListIter::new(self.as_spectrum_list(), get_binary_data)
    }
}

/// Views any [`SpectrumList`], sized or not, as a trait object.
///
/// Implemented for every sized [`SpectrumList`], so implementors never write it by hand.
pub trait AsSpectrumList {
    fn as_spectrum_list(&self) -> &dyn SpectrumList;
}

impl<T: SpectrumList> AsSpectrumList for T {
    fn as_spectrum_list(&self) -> &dyn SpectrumList {
        self
    }
}

/// A shared handle to any [`SpectrumList`], so one list can back several processing chains
pub type SpectrumListPtr = Arc<dyn SpectrumList>;

/// Walks a [`SpectrumList`] by index, yielding each spectrum or the error retrieving it
pub struct SpectrumListIter<'a> {
    list: &'a dyn SpectrumList,
    index: usize,
    get_binary_data: bool,
}

impl<'a> SpectrumListIter<'a> {
    pub fn new(list: &'a dyn SpectrumList, get_binary_data: bool) -> Self {
        Self {
            list,
            index: 0,
            get_binary_data,
        }
    }
}

impl Iterator for SpectrumListIter<'_> {
    type Item = Result<SpectrumPtr, SpectrumAccessError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.list.len() {
            return None;
        }
        let result = self.list.spectrum(self.index, self.get_binary_data);
        self.index += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SpectrumListIter<'_> {}

impl FusedIterator for SpectrumListIter<'_> {}

/// An in-memory [`SpectrumList`].
///
/// Each slot holds a shared spectrum, or nothing when a slot was reserved but never filled.
/// The identity of a slot is read straight off the stored spectrum.
#[derive(Debug, Default, Clone)]
pub struct SpectrumListSimple {
    spectra: Vec<Option<SpectrumPtr>>,
    pub data_processing: Option<Arc<DataProcessing>>,
}

impl SpectrumListSimple {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_processing(mut self, data_processing: Arc<DataProcessing>) -> Self {
        self.data_processing = Some(data_processing);
        self
    }

    /// Append `spectrum`, assigning it the next index
    pub fn push(&mut self, mut spectrum: Spectrum) {
        spectrum.identity.index = self.spectra.len();
        self.spectra.push(Some(Arc::new(spectrum)));
    }

    /// Grow the list to `size` slots, leaving the new ones empty
    pub fn reserve_slots(&mut self, size: usize) {
        if size > self.spectra.len() {
            self.spectra.resize(size, None);
        }
    }

    /// Store `spectrum` in the slot at `index`, which must already exist
    pub fn set(&mut self, index: usize, mut spectrum: Spectrum) -> Result<(), SpectrumAccessError> {
        let size = self.spectra.len();
        let slot = self
            .spectra
            .get_mut(index)
            .ok_or(SpectrumAccessError::IndexOutOfRange { index, size })?;
        spectrum.identity.index = index;
        *slot = Some(Arc::new(spectrum));
        Ok(())
    }

    fn slot(&self, index: usize) -> Result<&SpectrumPtr, SpectrumAccessError> {
        match self.spectra.get(index) {
            Some(Some(spectrum)) => Ok(spectrum),
            Some(None) => Err(SpectrumAccessError::NullSpectrum(index)),
            None => Err(SpectrumAccessError::IndexOutOfRange {
                index,
                size: self.spectra.len(),
            }),
        }
    }
}

impl From<Vec<Spectrum>> for SpectrumListSimple {
    fn from(value: Vec<Spectrum>) -> Self {
        let mut this = Self::new();
        for spectrum in value {
            this.push(spectrum);
        }
        this
    }
}

impl FromIterator<Spectrum> for SpectrumListSimple {
    fn from_iter<T: IntoIterator<Item = Spectrum>>(iter: T) -> Self {
        let mut this = Self::new();
        for spectrum in iter {
            this.push(spectrum);
        }
        this
    }
}

impl SpectrumList for SpectrumListSimple {
    fn len(&self) -> usize {
        self.spectra.len()
    }

    fn spectrum_identity(&self, index: usize) -> Result<&SpectrumIdentity, SpectrumAccessError> {
        self.slot(index).map(|s| &s.identity)
    }

    fn spectrum(
        &self,
        index: usize,
        _get_binary_data: bool,
    ) -> Result<SpectrumPtr, SpectrumAccessError> {
        self.slot(index).cloned()
    }

    fn data_processing(&self) -> Option<Arc<DataProcessing>> {
        self.data_processing.clone()
    }
}
