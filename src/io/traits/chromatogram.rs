use std::fmt;
use std::sync::Arc;

use crate::meta::DataProcessing;
use crate::spectrum::{Chromatogram, ChromatogramIdentity, ChromatogramPtr};

use super::SpectrumAccessError;

/// An indexed, random access source of [`Chromatogram`]s, the counterpart of
/// [`SpectrumList`](super::SpectrumList)
pub trait ChromatogramList: fmt::Debug + Send + Sync {
    fn len(&self) -> usize;

    /// `true` when the list has no chromatograms and carries no processing history, as for
    /// [`SpectrumList::is_empty`](crate::io::SpectrumList::is_empty)
    fn is_empty(&self) -> bool {
        self.len() == 0 && self.data_processing().is_none()
    }

    fn chromatogram_identity(
        &self,
        index: usize,
    ) -> Result<&ChromatogramIdentity, SpectrumAccessError>;

    fn chromatogram(
        &self,
        index: usize,
        get_binary_data: bool,
    ) -> Result<ChromatogramPtr, SpectrumAccessError>;

    /// Find the index of the chromatogram whose `id` is `id`, or `len()` if there is none
    fn find(&self, id: &str) -> usize {
        (0..self.len())
            .find(|i| {
                self.chromatogram_identity(*i)
                    .is_ok_and(|ident| ident.id == id)
            })
            .unwrap_or_else(|| self.len())
    }

    fn data_processing(&self) -> Option<Arc<DataProcessing>> {
        None
    }
}

pub type ChromatogramListPtr = Arc<dyn ChromatogramList>;

/// An in-memory [`ChromatogramList`]
#[derive(Debug, Default, Clone)]
pub struct ChromatogramListSimple {
    chromatograms: Vec<ChromatogramPtr>,
    pub data_processing: Option<Arc<DataProcessing>>,
}

impl ChromatogramListSimple {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `chromatogram`, assigning it the next index
    pub fn push(&mut self, mut chromatogram: Chromatogram) {
        chromatogram.identity.index = self.chromatograms.len();
        self.chromatograms.push(Arc::new(chromatogram));
    }

    fn get(&self, index: usize) -> Result<&ChromatogramPtr, SpectrumAccessError> {
        self.chromatograms
            .get(index)
            .ok_or(SpectrumAccessError::IndexOutOfRange {
                index,
                size: self.chromatograms.len(),
            })
    }
}

impl FromIterator<Chromatogram> for ChromatogramListSimple {
    fn from_iter<T: IntoIterator<Item = Chromatogram>>(iter: T) -> Self {
        let mut this = Self::new();
        for chrom in iter {
            this.push(chrom);
        }
        this
    }
}

impl ChromatogramList for ChromatogramListSimple {
    fn len(&self) -> usize {
        self.chromatograms.len()
    }

    fn chromatogram_identity(
        &self,
        index: usize,
    ) -> Result<&ChromatogramIdentity, SpectrumAccessError> {
        self.get(index).map(|c| &c.identity)
    }

    fn chromatogram(
        &self,
        index: usize,
        _get_binary_data: bool,
    ) -> Result<ChromatogramPtr, SpectrumAccessError> {
        self.get(index).cloned()
    }

    fn data_processing(&self) -> Option<Arc<DataProcessing>> {
        self.data_processing.clone()
    }
}
