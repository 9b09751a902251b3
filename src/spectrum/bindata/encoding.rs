//! Turning an in-memory `f64` sequence into the byte form a document stores, and back.
//!
//! Values are written little-endian at the chosen [`Precision`], optionally zlib-compressed,
//! then base64-encoded.
use std::fmt::Display;
use std::io::Write;

use bytemuck::Pod;
use flate2::write::{ZlibDecoder, ZlibEncoder};
use flate2::Compression;

use super::array::ArrayRetrievalError;
use crate::params::{terms, CURIE};

pub type Bytes = Vec<u8>;

pub fn to_bytes<T: Pod>(data: &[T]) -> Bytes {
    bytemuck::cast_slice(data).to_vec()
}

const fn is_target_little_endian() -> bool {
    u16::from_ne_bytes([1, 0]) == 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    Float32,
    #[default]
    Float64,
}

impl Precision {
    pub const fn size_of(&self) -> usize {
        match self {
            Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }

    pub const fn curie(&self) -> CURIE {
        match self {
            Self::Float32 => terms::FLOAT_32,
            Self::Float64 => terms::FLOAT_64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryCompressionType {
    #[default]
    NoCompression,
    Zlib,
}

impl BinaryCompressionType {
    pub const fn curie(&self) -> CURIE {
        match self {
            Self::NoCompression => terms::NO_COMPRESSION,
            Self::Zlib => terms::ZLIB_COMPRESSION,
        }
    }

    pub fn from_accession(accession: CURIE) -> Option<Self> {
        match accession {
            terms::NO_COMPRESSION => Some(Self::NoCompression),
            terms::ZLIB_COMPRESSION => Some(Self::Zlib),
            _ => None,
        }
    }
}

impl Display for BinaryCompressionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn compress_zlib(bytestring: &[u8]) -> Result<Bytes, ArrayRetrievalError> {
    let mut compressor = ZlibEncoder::new(Bytes::new(), Compression::best());
    compressor
        .write_all(bytestring)
        .map_err(|e| ArrayRetrievalError::DecompressionError(e.to_string()))?;
    compressor
        .finish()
        .map_err(|e| ArrayRetrievalError::DecompressionError(e.to_string()))
}

pub fn decompress_zlib(bytestring: &[u8]) -> Result<Bytes, ArrayRetrievalError> {
    let mut decompressor = ZlibDecoder::new(Bytes::new());
    decompressor
        .write_all(bytestring)
        .map_err(|e| ArrayRetrievalError::DecompressionError(e.to_string()))?;
    decompressor
        .finish()
        .map_err(|e| ArrayRetrievalError::DecompressionError(e.to_string()))
}

/// Encodes and decodes `f64` arrays with one fixed precision and compression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryDataEncoder {
    pub precision: Precision,
    pub compression: BinaryCompressionType,
}

impl BinaryDataEncoder {
    pub fn new(precision: Precision, compression: BinaryCompressionType) -> Self {
        Self {
            precision,
            compression,
        }
    }

    fn to_le_bytes(&self, data: &[f64]) -> Bytes {
        match self.precision {
            Precision::Float64 if is_target_little_endian() => to_bytes(data),
            Precision::Float64 => data.iter().flat_map(|v| v.to_le_bytes()).collect(),
            Precision::Float32 => data
                .iter()
                .flat_map(|v| (*v as f32).to_le_bytes())
                .collect(),
        }
    }

    fn from_le_bytes(&self, bytes: &[u8]) -> Result<Vec<f64>, ArrayRetrievalError> {
        let width = self.precision.size_of();
        if bytes.len() % width != 0 {
            return Err(ArrayRetrievalError::DataTypeSizeMismatch);
        }
        let values = match self.precision {
            Precision::Float64 => bytes
                .chunks_exact(8)
                .map(|c| {
                    let mut buf = [0u8; 8];
                    buf.copy_from_slice(c);
                    f64::from_le_bytes(buf)
                })
                .collect(),
            Precision::Float32 => bytes
                .chunks_exact(4)
                .map(|c| {
                    let mut buf = [0u8; 4];
                    buf.copy_from_slice(c);
                    f32::from_le_bytes(buf) as f64
                })
                .collect(),
        };
        Ok(values)
    }

    /// Encode `data` into base64 text bytes
    pub fn encode(&self, data: &[f64]) -> Result<Bytes, ArrayRetrievalError> {
        let raw = self.to_le_bytes(data);
        let payload = match self.compression {
            BinaryCompressionType::NoCompression => raw,
            BinaryCompressionType::Zlib => compress_zlib(&raw)?,
        };
        Ok(base64_simd::STANDARD.encode_type::<Bytes>(&payload))
    }

    /// Decode base64 text bytes produced by [`BinaryDataEncoder::encode`] with the same settings
    pub fn decode(&self, encoded: &[u8]) -> Result<Vec<f64>, ArrayRetrievalError> {
        let payload = base64_simd::STANDARD.decode_type::<Bytes>(encoded)?;
        let raw = match self.compression {
            BinaryCompressionType::NoCompression => payload,
            BinaryCompressionType::Zlib => decompress_zlib(&payload)?,
        };
        self.from_le_bytes(&raw)
    }
}
