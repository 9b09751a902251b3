//! `mzlist` models a mass spectrometry run as a lazy, indexed [`SpectrumList`] plus the
//! controlled-vocabulary metadata that describes it.
//!
//! Spectra are fetched on demand from a list, and lists can be decorated by the wrappers in
//! [`processing`] to filter, transform or re-centroid spectra without touching the data they
//! decorate. The whole document is held by [`MSData`], whose run's spectrum list is the point
//! where a processing chain is attached.
pub mod io;
pub mod meta;
pub mod params;
pub mod prelude;
pub mod processing;
pub mod spectrum;
pub mod utils;

pub use crate::io::{
    ChromatogramList, ChromatogramListPtr, ChromatogramListSimple, DetailLevel,
    SpectrumAccessError, SpectrumList, SpectrumListPtr, SpectrumListSimple,
};
pub use crate::meta::{DataProcessing, MSData, MassSpectrometryRun, ProcessingMethod};
pub use crate::params::{CVParam, ParamContainer, ParamDescribed, ParamGroup, UserParam, CURIE};
pub use crate::processing::{
    SpectrumListFilter, SpectrumListNativeCentroider, SpectrumListTransformer,
    SpectrumListWrapper, SpectrumPredicate, Tribool,
};
pub use crate::spectrum::{
    BinaryDataArray, Chromatogram, MZIntensityPair, Spectrum, SpectrumIdentity, SpectrumPtr,
};
pub use crate::utils::IntegerSet;

#[cfg(feature = "checksum")]
pub use crate::io::SHA1Calculator;
