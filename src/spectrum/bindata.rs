mod array;
mod encoding;

pub(crate) use array::find_mz_intensity_arrays;
pub use array::{ArrayRetrievalError, ArrayType, BinaryDataArray, BinaryDataArrayRef};
pub use encoding::{
    compress_zlib, decompress_zlib, to_bytes, BinaryCompressionType, BinaryDataEncoder, Bytes,
    Precision,
};
