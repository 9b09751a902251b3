mod chromatogram;
mod spectrum;

pub use chromatogram::{ChromatogramList, ChromatogramListPtr, ChromatogramListSimple};
pub use spectrum::{
    AsSpectrumList, SpectrumAccessError, SpectrumList, SpectrumListIter, SpectrumListPtr,
    SpectrumListSimple,
};
