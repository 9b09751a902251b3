use crate::impl_param_described;
use crate::params::ParamContainer;

/// Description of the acquisition settings of the instrument prior to the start of the run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    /// A unique identifier
    pub id: String,
    /// List with the source files containing the acquisition settings
    pub source_file_refs: Vec<String>,
    /// Target list (or 'inclusion list') configured prior to the run
    pub targets: Vec<ParamContainer>,
    /// The controlled vocabulary and user parameters of the settings
    pub params: ParamContainer,
}

impl ScanSettings {
    pub fn new(
        id: String,
        params: ParamContainer,
        source_file_refs: Vec<String>,
        targets: Vec<ParamContainer>,
    ) -> Self {
        Self {
            id,
            source_file_refs,
            targets,
            params,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.source_file_refs.is_empty()
            && self.targets.iter().all(|t| t.is_empty())
            && self.params.is_empty()
    }
}

impl_param_described!(ScanSettings);
