//! Lazy processing chains over a [`SpectrumList`](crate::io::SpectrumList).
//!
//! Every wrapper here holds a shared handle to the list it decorates and is itself a
//! [`SpectrumList`](crate::io::SpectrumList), so wrappers compose in whatever order the caller
//! builds them. Work happens when a spectrum is requested, except for
//! [`SpectrumListFilter`], which decides its membership once when it is built.
//!
//! ```
//! use std::sync::Arc;
//!
//! use mzlist::io::{SpectrumList, SpectrumListPtr, SpectrumListSimple};
//! use mzlist::processing::{IndexSetPredicate, MzWindow, SpectrumListFilter, SpectrumListTransformer};
//! use mzlist::spectrum::{Spectrum, SpectrumIdentity};
//!
//! let source: SpectrumListSimple = (0..10)
//!     .map(|i| Spectrum::new(SpectrumIdentity::new(i, format!("scan={}", i + 1))))
//!     .collect();
//! let source: SpectrumListPtr = Arc::new(source);
//!
//! let subset = SpectrumListFilter::new(
//!     source.clone(),
//!     IndexSetPredicate::new("2-4".parse().unwrap()),
//! )
//! .unwrap();
//! let windowed = SpectrumListTransformer::new(Arc::new(subset), MzWindow::new(200.0, 2000.0));
//! assert_eq!(windowed.len(), 3);
//! assert_eq!(windowed.spectrum_identity(0).unwrap().id, "scan=3");
//! ```
mod centroid;
mod filter;
mod predicates;
mod transform;
mod wrapper;

pub use centroid::SpectrumListNativeCentroider;
pub use filter::{SpectrumListFilter, SpectrumPredicate, Tribool};
pub use predicates::{
    ChargeStateSetPredicate, DefaultArrayLengthSetPredicate, FilterMode, IdSetPredicate,
    IndexSetPredicate, MSLevelSetPredicate, MzPresentPredicate, PrecursorMzSetPredicate,
    PrecursorTarget, ScanEventSetPredicate, ScanNumberSetPredicate, ScanTimeRangePredicate,
    ThermoScanFilterPredicate,
};
pub use transform::{IntensityThreshold, MzWindow, SpectrumListTransformer, SpectrumTransform};
pub use wrapper::{
    extended_data_processing, SpectrumListWrapper, SpectrumProcessingError,
    DEFAULT_DATA_PROCESSING_ID,
};
