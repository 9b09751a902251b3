use crate::impl_param_described;
use crate::params::ParamContainer;

/// One step of a [`DataProcessing`] pipeline, done by the referenced software
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessingMethod {
    pub order: i32,
    pub software_reference: String,
    pub params: ParamContainer,
}

impl ProcessingMethod {
    pub fn is_empty(&self) -> bool {
        self.order == 0 && self.software_reference.is_empty() && self.params.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataProcessing {
    pub id: String,
    pub methods: Vec<ProcessingMethod>,
}

impl_param_described!(ProcessingMethod);

impl DataProcessing {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            methods: Vec::new(),
        }
    }

    pub fn push(&mut self, method: ProcessingMethod) {
        self.methods.push(method)
    }

    pub fn iter(&self) -> std::slice::Iter<ProcessingMethod> {
        self.methods.iter()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// The order the next appended method should take
    pub fn next_order(&self) -> i32 {
        self.methods.len() as i32
    }

    /// A copy of `self` with one more method appended, ordered after the existing ones.
    ///
    /// `self` is left untouched.
    pub fn extended_with(&self, mut method: ProcessingMethod) -> Self {
        let mut dup = self.clone();
        method.order = dup.next_order();
        dup.push(method);
        dup
    }
}
