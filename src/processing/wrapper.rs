use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::io::{SpectrumAccessError, SpectrumList, SpectrumListPtr};
use crate::meta::{DataProcessing, ProcessingMethod};

/// The id given to the processing history a wrapper starts when its inner list has none
pub const DEFAULT_DATA_PROCESSING_ID: &str = "mzlist_conversion";

#[derive(Debug, Error)]
pub enum SpectrumProcessingError {
    /// A wrapper needs something from its inner list that the inner list cannot provide
    #[error("{wrapper} requires {capability}, which the inner spectrum list does not provide")]
    UnsupportedCapability { wrapper: String, capability: String },
    /// Reading the inner list failed while building the wrapper
    #[error("Failed to read the inner spectrum list: {0}")]
    Access(#[from] SpectrumAccessError),
}

impl From<SpectrumProcessingError> for io::Error {
    fn from(value: SpectrumProcessingError) -> Self {
        match value {
            SpectrumProcessingError::UnsupportedCapability { .. } => {
                io::Error::new(io::ErrorKind::Unsupported, value.to_string())
            }
            SpectrumProcessingError::Access(e) => e.into(),
        }
    }
}

/// The processing history of `inner` with `method` appended as its last step.
///
/// The inner list's history is copied, never modified, so other chains sharing `inner` do not
/// see the new step.
pub fn extended_data_processing(
    inner: &dyn SpectrumList,
    method: ProcessingMethod,
) -> Arc<DataProcessing> {
    let extended = match inner.data_processing() {
        Some(dp) => dp.extended_with(method),
        None => DataProcessing::new(DEFAULT_DATA_PROCESSING_ID).extended_with(method),
    };
    Arc::new(extended)
}

/// Implement [`SpectrumList`] methods by forwarding them to a field holding a
/// [`SpectrumListPtr`].
///
/// Use it inside an `impl SpectrumList for ...` block, listing the methods the wrapper does
/// not change:
///
/// ```ignore
/// impl SpectrumList for MyWrapper {
///     mzlist::delegate_spectrum_list!(inner; len, spectrum_identity, find, find_native);
///
///     fn spectrum(&self, index: usize, get_binary_data: bool) -> Result<SpectrumPtr, SpectrumAccessError> {
///         ...
///     }
/// }
/// ```
#[macro_export]
macro_rules! delegate_spectrum_list {
    (@method $field:ident, len) => {
        fn len(&self) -> usize {
            $crate::io::SpectrumList::len(&*self.$field)
        }
    };
    (@method $field:ident, spectrum_identity) => {
        fn spectrum_identity(
            &self,
            index: usize,
        ) -> Result<&$crate::spectrum::SpectrumIdentity, $crate::io::SpectrumAccessError> {
            $crate::io::SpectrumList::spectrum_identity(&*self.$field, index)
        }
    };
    (@method $field:ident, spectrum) => {
        fn spectrum(
            &self,
            index: usize,
            get_binary_data: bool,
        ) -> Result<$crate::spectrum::SpectrumPtr, $crate::io::SpectrumAccessError> {
            $crate::io::SpectrumList::spectrum(&*self.$field, index, get_binary_data)
        }
    };
    (@method $field:ident, spectrum_with_detail) => {
        fn spectrum_with_detail(
            &self,
            index: usize,
            detail_level: $crate::io::DetailLevel,
        ) -> Result<$crate::spectrum::SpectrumPtr, $crate::io::SpectrumAccessError> {
            $crate::io::SpectrumList::spectrum_with_detail(&*self.$field, index, detail_level)
        }
    };
    (@method $field:ident, find) => {
        fn find(&self, id: &str) -> usize {
            $crate::io::SpectrumList::find(&*self.$field, id)
        }
    };
    (@method $field:ident, find_native) => {
        fn find_native(&self, native_id: &str) -> usize {
            $crate::io::SpectrumList::find_native(&*self.$field, native_id)
        }
    };
    (@method $field:ident, find_abbreviated) => {
        fn find_abbreviated(&self, abbreviated: &str, delimiter: char) -> usize {
            $crate::io::SpectrumList::find_abbreviated(&*self.$field, abbreviated, delimiter)
        }
    };
    (@method $field:ident, find_name_value) => {
        fn find_name_value(&self, name: &str, value: &str) -> Vec<usize> {
            $crate::io::SpectrumList::find_name_value(&*self.$field, name, value)
        }
    };
    (@method $field:ident, find_spot_id) => {
        fn find_spot_id(&self, spot_id: &str) -> Vec<usize> {
            $crate::io::SpectrumList::find_spot_id(&*self.$field, spot_id)
        }
    };
    (@method $field:ident, data_processing) => {
        fn data_processing(&self) -> Option<std::sync::Arc<$crate::meta::DataProcessing>> {
            $crate::io::SpectrumList::data_processing(&*self.$field)
        }
    };
    (@method $field:ident, supports_native_centroiding) => {
        fn supports_native_centroiding(&self) -> bool {
            $crate::io::SpectrumList::supports_native_centroiding(&*self.$field)
        }
    };
    (@method $field:ident, centroided_spectrum) => {
        fn centroided_spectrum(
            &self,
            index: usize,
            get_binary_data: bool,
        ) -> Result<$crate::spectrum::SpectrumPtr, $crate::io::SpectrumAccessError> {
            $crate::io::SpectrumList::centroided_spectrum(&*self.$field, index, get_binary_data)
        }
    };
    ($field:ident; $($method:ident),+ $(,)?) => {
        $($crate::delegate_spectrum_list!(@method $field, $method);)+
    };
}

/// A [`SpectrumList`] that passes every call through to the list it wraps.
///
/// This is the starting point of a processing chain. It may carry its own processing history
/// while still serving the inner list's spectra untouched.
#[derive(Debug, Clone)]
pub struct SpectrumListWrapper {
    inner: SpectrumListPtr,
    data_processing: Option<Arc<DataProcessing>>,
}

impl SpectrumListWrapper {
    pub fn new(inner: SpectrumListPtr) -> Self {
        let data_processing = inner.data_processing();
        Self {
            inner,
            data_processing,
        }
    }

    /// Wrap `inner`, recording `method` at the end of a copy of its processing history
    pub fn with_processing_method(inner: SpectrumListPtr, method: ProcessingMethod) -> Self {
        let data_processing = Some(extended_data_processing(inner.as_ref(), method));
        Self {
            inner,
            data_processing,
        }
    }

    pub fn inner(&self) -> &SpectrumListPtr {
        &self.inner
    }

    pub fn into_inner(self) -> SpectrumListPtr {
        self.inner
    }
}

impl SpectrumList for SpectrumListWrapper {
    crate::delegate_spectrum_list!(
        inner;
        len,
        spectrum_identity,
        spectrum,
        spectrum_with_detail,
        find,
        find_native,
        find_abbreviated,
        find_name_value,
        find_spot_id,
        supports_native_centroiding,
        centroided_spectrum,
    );

    fn data_processing(&self) -> Option<Arc<DataProcessing>> {
        self.data_processing.clone()
    }
}
