use crate::impl_param_described;
use crate::params::{ParamContainer, ParamDescribed};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sample {
    pub id: String,
    pub name: Option<String>,
    pub params: ParamContainer,
}

impl Sample {
    pub fn new(id: String, name: Option<String>, params: ParamContainer) -> Self {
        Self { id, name, params }
    }

    /// The value of the "sample number" term
    pub fn number(&self) -> Option<&str> {
        self.cv_param(crate::curie!(MS:1000001))
            .map(|p| p.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.name.as_ref().map_or(true, |n| n.is_empty())
            && self.params.is_empty()
    }
}

impl_param_described!(Sample);
