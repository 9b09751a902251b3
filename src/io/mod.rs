//! Random access to spectra and chromatograms, and checksums over the streams they come from.
//!
//! A [`SpectrumList`] is the lazy, indexed view every source of spectra presents. The
//! in-memory [`SpectrumListSimple`] is the basic implementation, and the wrappers in
//! [`crate::processing`] decorate any list without touching what it stores.
pub(crate) mod traits;
mod utils;

pub use crate::io::traits::{
    AsSpectrumList, ChromatogramList, ChromatogramListPtr, ChromatogramListSimple,
    SpectrumAccessError, SpectrumList, SpectrumListIter, SpectrumListPtr, SpectrumListSimple,
};
pub use crate::io::utils::DetailLevel;

#[cfg(feature = "checksum")]
pub use crate::io::utils::{SHA1Calculator, SHA1HashingStream};
