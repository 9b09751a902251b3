use std::fmt;

use crate::impl_param_described;
use crate::io::{ChromatogramList, ChromatogramListPtr, SpectrumList, SpectrumListPtr};
use crate::params::ParamContainer;

/// A single acquisition: its default references into the document's registries, and the
/// spectrum and chromatogram lists holding the data.
///
/// The lists are shared handles, so replacing [`MassSpectrometryRun::spectrum_list`] with a
/// processing chain built on top of it changes nothing else about the run.
#[derive(Default, Clone)]
pub struct MassSpectrometryRun {
    pub id: String,
    pub default_instrument_id: Option<String>,
    pub sample_id: Option<String>,
    pub default_source_file_id: Option<String>,
    /// When acquisition started, as the source recorded it
    pub start_time: Option<String>,
    pub spectrum_list: Option<SpectrumListPtr>,
    pub chromatogram_list: Option<ChromatogramListPtr>,
    pub params: ParamContainer,
}

impl_param_described!(MassSpectrometryRun);

impl fmt::Debug for MassSpectrometryRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MassSpectrometryRun")
            .field("id", &self.id)
            .field("default_instrument_id", &self.default_instrument_id)
            .field("sample_id", &self.sample_id)
            .field("default_source_file_id", &self.default_source_file_id)
            .field("start_time", &self.start_time)
            .field("spectra", &self.spectrum_list.as_ref().map(|l| l.len()))
            .field("chromatograms", &self.chromatogram_list.as_ref().map(|l| l.len()))
            .field("params", &self.params)
            .finish()
    }
}

impl MassSpectrometryRun {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn spectrum_list(&self) -> Option<&SpectrumListPtr> {
        self.spectrum_list.as_ref()
    }

    /// Swap in a new spectrum list, returning the previous one
    pub fn set_spectrum_list(&mut self, list: SpectrumListPtr) -> Option<SpectrumListPtr> {
        self.spectrum_list.replace(list)
    }

    pub fn chromatogram_list(&self) -> Option<&ChromatogramListPtr> {
        self.chromatogram_list.as_ref()
    }

    pub fn set_chromatogram_list(
        &mut self,
        list: ChromatogramListPtr,
    ) -> Option<ChromatogramListPtr> {
        self.chromatogram_list.replace(list)
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.default_instrument_id.is_none()
            && self.sample_id.is_none()
            && self.default_source_file_id.is_none()
            && self.start_time.is_none()
            && self.spectrum_list.as_ref().map_or(true, |l| l.is_empty())
            && self.chromatogram_list.as_ref().map_or(true, |l| l.is_empty())
            && self.params.is_empty()
    }
}
