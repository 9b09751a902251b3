//! Document-level metadata: what was acquired, on which instrument, and how it has been
//! processed since.
mod data_processing;
mod file_description;
mod instrument;
mod msdata;
mod run;
mod sample;
mod scan_settings;
mod software;

pub use crate::meta::data_processing::{DataProcessing, ProcessingMethod};
pub use crate::meta::file_description::{FileDescription, SourceFile};
pub use crate::meta::instrument::{Component, ComponentType, InstrumentConfiguration};
pub use crate::meta::msdata::{default_cv_list, MSData, CV};
pub use crate::meta::run::MassSpectrometryRun;
pub use crate::meta::sample::Sample;
pub use crate::meta::scan_settings::ScanSettings;
pub use crate::meta::software::Software;
