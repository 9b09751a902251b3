use std::sync::Arc;

use indexmap::IndexMap;

use crate::io::{SpectrumList, SpectrumListPtr};
use crate::params::{terms, CVOntology, OntologyTable, ParamDescribed, ParamGroupRef};
use crate::spectrum::NativeIdFormat;

use super::{
    DataProcessing, FileDescription, InstrumentConfiguration, MassSpectrometryRun, Sample,
    ScanSettings, Software, SourceFile,
};

/// A controlled vocabulary the document's terms are drawn from
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CV {
    pub id: String,
    pub uri: String,
    pub version: String,
    pub full_name: String,
}

impl CV {
    pub fn new<I: Into<String>, U: Into<String>, V: Into<String>, N: Into<String>>(
        id: I,
        uri: U,
        version: V,
        full_name: N,
    ) -> Self {
        Self {
            id: id.into(),
            uri: uri.into(),
            version: version.into(),
            full_name: full_name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.uri.is_empty()
            && self.version.is_empty()
            && self.full_name.is_empty()
    }
}

/// The vocabularies every document built by this crate draws from
pub fn default_cv_list() -> Vec<CV> {
    vec![
        CV::new(
            "MS",
            "https://raw.githubusercontent.com/HUPO-PSI/psi-ms-CV/master/psi-ms.obo",
            "",
            "Proteomics Standards Initiative Mass Spectrometry Ontology",
        ),
        CV::new(
            "UO",
            "http://ontologies.berkeleybop.org/uo.obo",
            "",
            "Unit Ontology",
        ),
    ]
}

const DEFAULT_VERSION: &str = "1.1.0";

/// A whole mass spectrometry document: its descriptive metadata, the registries its parts refer
/// to by id, and the run holding the data
#[derive(Debug, Clone)]
pub struct MSData {
    pub accession: String,
    pub id: String,
    pub cvs: Vec<CV>,
    pub file_description: FileDescription,
    pub param_groups: IndexMap<String, ParamGroupRef>,
    pub samples: IndexMap<String, Sample>,
    pub softwares: IndexMap<String, Software>,
    pub scan_settings: IndexMap<String, ScanSettings>,
    pub instrument_configurations: IndexMap<String, InstrumentConfiguration>,
    pub data_processings: IndexMap<String, Arc<DataProcessing>>,
    pub run: MassSpectrometryRun,
    version: String,
    filters_applied: usize,
}

impl Default for MSData {
    fn default() -> Self {
        Self {
            accession: String::new(),
            id: String::new(),
            cvs: Vec::new(),
            file_description: FileDescription::default(),
            param_groups: IndexMap::new(),
            samples: IndexMap::new(),
            softwares: IndexMap::new(),
            scan_settings: IndexMap::new(),
            instrument_configurations: IndexMap::new(),
            data_processings: IndexMap::new(),
            run: MassSpectrometryRun::default(),
            version: DEFAULT_VERSION.to_string(),
            filters_applied: 0,
        }
    }
}

impl MSData {
    pub fn new() -> Self {
        Self::default()
    }

    /// The format version of the document this was read from
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version<S: Into<String>>(&mut self, version: S) {
        self.version = version.into();
    }

    /// `true` if the document and everything it owns or refers to is empty
    pub fn is_empty(&self) -> bool {
        self.accession.is_empty()
            && self.id.is_empty()
            && self.cvs.is_empty()
            && self.file_description.is_empty()
            && self.param_groups.is_empty()
            && self.samples.is_empty()
            && self.softwares.is_empty()
            && self.scan_settings.is_empty()
            && self.instrument_configurations.is_empty()
            && self.data_processings.is_empty()
            && self.run.is_empty()
    }

    /// Every registered [`DataProcessing`], followed by those of the run's spectrum and
    /// chromatogram lists when no registered entry shares their id
    pub fn all_data_processings(&self) -> Vec<Arc<DataProcessing>> {
        let mut result: Vec<Arc<DataProcessing>> = self.data_processings.values().cloned().collect();
        let list_histories = [
            self.run.spectrum_list().and_then(|l| l.data_processing()),
            self.run.chromatogram_list().and_then(|l| l.data_processing()),
        ];
        for dp in list_histories.into_iter().flatten() {
            if !result.iter().any(|known| known.id == dp.id) {
                result.push(dp);
            }
        }
        result
    }

    /// Note that one more filter has been applied to the run's spectra
    pub fn filter_applied(&mut self) {
        self.filters_applied += 1;
    }

    pub fn count_filters_applied(&self) -> usize {
        self.filters_applied
    }

    /// Replace the run's spectrum list with `wrap(current)`, counting it as an applied filter.
    ///
    /// Returns `Ok(false)` without calling `wrap` when the run has no spectrum list.
    pub fn wrap_spectrum_list<F, E>(&mut self, wrap: F) -> Result<bool, E>
    where
        F: FnOnce(SpectrumListPtr) -> Result<SpectrumListPtr, E>,
    {
        let Some(inner) = self.run.spectrum_list().cloned() else {
            return Ok(false);
        };
        let wrapped = wrap(inner)?;
        self.run.set_spectrum_list(wrapped);
        self.filter_applied();
        Ok(true)
    }

    fn default_source_file(&self) -> Option<&SourceFile> {
        match self.run.default_source_file_id.as_deref() {
            Some(id) => self.file_description.source_file(id),
            None => self.file_description.source_files.first(),
        }
    }

    /// The native id format of the run's source file, resolved with `ontology`.
    ///
    /// Documents from format version 1.0 that do not say otherwise used bare scan numbers.
    pub fn default_native_id_format_with<O: CVOntology + ?Sized>(
        &self,
        ontology: &O,
    ) -> NativeIdFormat {
        let format = self
            .default_source_file()
            .and_then(|sf| sf.cv_param_child(terms::NATIVE_ID_FORMAT, ontology))
            .map(|p| NativeIdFormat::from_curie(p.accession))
            .unwrap_or_default();
        if format == NativeIdFormat::Unknown && self.version.starts_with("1.0") {
            NativeIdFormat::ScanNumberOnly
        } else {
            format
        }
    }

    pub fn default_native_id_format(&self) -> NativeIdFormat {
        self.default_native_id_format_with(&OntologyTable::psi_ms())
    }
}
