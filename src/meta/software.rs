use crate::impl_param_described;
use crate::params::ParamContainer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Software {
    /// A unique identifier for the software within processing metadata
    pub id: String,
    /// A string denoting a particular software version, but does no guarantee is given for its format
    pub version: String,
    /// Any associated vocabulary terms, including actual software name and type
    pub params: ParamContainer,
}

impl Software {
    pub fn new<I: Into<String>, V: Into<String>>(id: I, version: V) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            params: ParamContainer::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.version.is_empty() && self.params.is_empty()
    }
}

impl_param_described!(Software);
