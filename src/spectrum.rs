//! The spectrum and chromatogram data model.
//!
//! A [`Spectrum`] owns its descriptive terms and a list of shared [`BinaryDataArray`] handles.
//! The m/z and intensity arrays can be viewed as [`MZIntensityPair`]s, and
//! [`BinaryDataEncoder`] converts arrays to and from their stored byte form.
pub mod bindata;
pub(crate) mod chromatogram;
pub mod native_id;
pub(crate) mod pairs;
pub(crate) mod scan_properties;
#[allow(clippy::module_inception)]
pub(crate) mod spectrum;

pub use bindata::{
    ArrayRetrievalError, ArrayType, BinaryCompressionType, BinaryDataArray, BinaryDataArrayRef,
    BinaryDataEncoder, Precision,
};
pub use chromatogram::{Chromatogram, ChromatogramIdentity};
pub use native_id::{NativeIdError, NativeIdFormat};
pub use pairs::{MZIntensityPair, TimeIntensityPair};
pub use scan_properties::{
    Activation, IonProperties, IsolationWindow, Precursor, Product, Scan, ScanList, ScanWindow,
    SelectedIon, SignalContinuity,
};
pub use spectrum::{Spectrum, SpectrumIdentity, IDENTITY_INDEX_NONE};

/// A shared, immutable handle to a materialized [`Spectrum`]
pub type SpectrumPtr = std::sync::Arc<Spectrum>;

/// A shared, immutable handle to a materialized [`Chromatogram`]
pub type ChromatogramPtr = std::sync::Arc<Chromatogram>;
