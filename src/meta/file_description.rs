use crate::impl_param_described;
use crate::params::{ParamContainer, ParamDescribed};

/// A file this document was generated or derived from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    pub id: String,
    /// The file name without any reference to its location
    pub name: String,
    /// A URI-formatted location where the file was retrieved
    pub location: String,
    pub params: ParamContainer,
}

impl SourceFile {
    pub fn new<I: Into<String>, N: Into<String>, L: Into<String>>(
        id: I,
        name: N,
        location: L,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            params: ParamContainer::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.name.is_empty()
            && self.location.is_empty()
            && self.params.is_empty()
    }
}

/// Information pertaining to the entire document rather than any part of the data set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDescription {
    /// Summarizes the kinds of spectra to expect in the file
    pub contents: ParamContainer,
    pub source_files: Vec<SourceFile>,
    pub contacts: Vec<ParamContainer>,
}

impl FileDescription {
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
            && self.source_files.iter().all(|sf| sf.is_empty())
            && self.contacts.iter().all(|c| c.is_empty())
    }

    pub fn source_file(&self, id: &str) -> Option<&SourceFile> {
        self.source_files.iter().find(|sf| sf.id == id)
    }
}

impl_param_described!(SourceFile);

impl ParamDescribed for FileDescription {
    fn params(&self) -> &ParamContainer {
        &self.contents
    }

    fn params_mut(&mut self) -> &mut ParamContainer {
        &mut self.contents
    }
}
