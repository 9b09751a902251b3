//! The traits needed to call methods on lists, predicates and parameter containers
pub use crate::io::{ChromatogramList, SpectrumList};
pub use crate::params::{CVOntology, ParamDescribed};
pub use crate::processing::{SpectrumPredicate, SpectrumTransform};
pub use crate::spectrum::IonProperties;
