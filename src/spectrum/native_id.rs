//! Working with native spectrum identifiers, the `name=value` strings like
//! `controllerType=0 controllerNumber=1 scan=19` that source formats use to name spectra.
use indexmap::IndexMap;
use thiserror::Error;

use crate::params::{terms, CURIE};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NativeIdError {
    #[error("The native ID is empty")]
    Empty,
    #[error("{0:?} is not a name=value pair")]
    BadFormat(String),
}

/// Split a native id on whitespace into its `name=value` pairs, in order
pub fn parse(id: &str) -> Result<IndexMap<String, String>, NativeIdError> {
    if id.is_empty() {
        return Err(NativeIdError::Empty);
    }
    id.split_whitespace()
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) if !value.is_empty() => Ok((name.to_string(), value.to_string())),
            _ => Err(NativeIdError::BadFormat(pair.to_string())),
        })
        .collect()
}

/// The value of one named field of a native id, without allocating
pub fn value<'a>(id: &'a str, name: &str) -> Option<&'a str> {
    id.split_whitespace()
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}

/// Join just the values of a native id, so `a=1 b=2` becomes `1.2` with `.` as the delimiter
pub fn abbreviate(id: &str, delimiter: char) -> Result<String, NativeIdError> {
    let mut result = String::with_capacity(id.len());
    for (i, pair) in id.split(' ').enumerate() {
        let (_, value) = pair
            .split_once('=')
            .ok_or_else(|| NativeIdError::BadFormat(id.to_string()))?;
        if i > 0 {
            result.push(delimiter);
        }
        result.push_str(value);
    }
    Ok(result)
}

/// The families of native id that can be translated to and from a plain scan number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NativeIdFormat {
    Thermo,
    Waters,
    /// MGF and other multi-spectrum peak lists, `index=N`
    MultiplePeakList,
    SinglePeakList,
    /// mzXML and friends, `scan=N`
    ScanNumberOnly,
    /// mzData, `spectrum=N`
    SpectrumIdentifier,
    MzMLUniqueIdentifier,
    #[default]
    Unknown,
}

impl NativeIdFormat {
    pub const fn curie(&self) -> Option<CURIE> {
        match self {
            Self::Thermo => Some(terms::THERMO_NATIVE_ID_FORMAT),
            Self::Waters => Some(terms::WATERS_NATIVE_ID_FORMAT),
            Self::MultiplePeakList => Some(terms::MULTIPLE_PEAK_LIST_NATIVE_ID_FORMAT),
            Self::SinglePeakList => Some(terms::SINGLE_PEAK_LIST_NATIVE_ID_FORMAT),
            Self::ScanNumberOnly => Some(terms::SCAN_NUMBER_ONLY_NATIVE_ID_FORMAT),
            Self::SpectrumIdentifier => Some(terms::SPECTRUM_IDENTIFIER_NATIVE_ID_FORMAT),
            Self::MzMLUniqueIdentifier => Some(terms::MZML_UNIQUE_IDENTIFIER),
            Self::Unknown => None,
        }
    }

    pub fn from_curie(curie: CURIE) -> Self {
        match curie {
            terms::THERMO_NATIVE_ID_FORMAT => Self::Thermo,
            terms::WATERS_NATIVE_ID_FORMAT => Self::Waters,
            terms::MULTIPLE_PEAK_LIST_NATIVE_ID_FORMAT => Self::MultiplePeakList,
            terms::SINGLE_PEAK_LIST_NATIVE_ID_FORMAT => Self::SinglePeakList,
            terms::SCAN_NUMBER_ONLY_NATIVE_ID_FORMAT => Self::ScanNumberOnly,
            terms::SPECTRUM_IDENTIFIER_NATIVE_ID_FORMAT => Self::SpectrumIdentifier,
            terms::MZML_UNIQUE_IDENTIFIER => Self::MzMLUniqueIdentifier,
            _ => Self::Unknown,
        }
    }
}

const THERMO_DEFAULT_CONTROLLER: &str = "controllerType=0 controllerNumber=1";

/// Extract a scan number from a native id.
///
/// Thermo ids only translate when they use the default controller. For an unknown format,
/// `scan=` and `index=` prefixes are still recognized.
pub fn translate_native_id_to_scan_number(format: NativeIdFormat, id: &str) -> Option<&str> {
    match format {
        NativeIdFormat::SpectrumIdentifier => value(id, "spectrum"),
        NativeIdFormat::MultiplePeakList => value(id, "index"),
        NativeIdFormat::Thermo => {
            if id.starts_with(THERMO_DEFAULT_CONTROLLER) {
                value(id, "scan")
            } else {
                None
            }
        }
        NativeIdFormat::ScanNumberOnly => value(id, "scan"),
        _ => {
            if id.starts_with("scan=") {
                value(id, "scan")
            } else if id.starts_with("index=") {
                value(id, "index")
            } else {
                None
            }
        }
    }
}

/// The native id a scan number would have in `format`, if the format is built on scan numbers
pub fn translate_scan_number_to_native_id(format: NativeIdFormat, scan_number: &str) -> Option<String> {
    match format {
        NativeIdFormat::Thermo => Some(format!("{THERMO_DEFAULT_CONTROLLER} scan={scan_number}")),
        NativeIdFormat::SpectrumIdentifier => Some(format!("spectrum={scan_number}")),
        NativeIdFormat::MultiplePeakList => Some(format!("index={scan_number}")),
        NativeIdFormat::ScanNumberOnly => Some(format!("scan={scan_number}")),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const THERMO_ID: &str = "controllerType=0 controllerNumber=1 scan=19";

    #[test]
    fn test_parse() {
        let parsed = parse(THERMO_ID).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed.get_index(2), Some((&"scan".to_string(), &"19".to_string())));
        assert_eq!(parse(""), Err(NativeIdError::Empty));
        assert_eq!(parse("scan="), Err(NativeIdError::BadFormat("scan=".into())));
        assert_eq!(parse("19"), Err(NativeIdError::BadFormat("19".into())));
    }

    #[test]
    fn test_value_and_abbreviate() {
        assert_eq!(value(THERMO_ID, "scan"), Some("19"));
        assert_eq!(value(THERMO_ID, "function"), None);
        assert_eq!(abbreviate(THERMO_ID, '.').unwrap(), "0.1.19");
        assert_eq!(abbreviate("scan=5", ':').unwrap(), "5");
        assert!(abbreviate("scan5", '.').is_err());
    }

    #[test]
    fn test_translation() {
        assert_eq!(
            translate_native_id_to_scan_number(NativeIdFormat::Thermo, THERMO_ID),
            Some("19")
        );
        assert_eq!(
            translate_native_id_to_scan_number(
                NativeIdFormat::Thermo,
                "controllerType=1 controllerNumber=1 scan=19"
            ),
            None
        );
        assert_eq!(
            translate_native_id_to_scan_number(NativeIdFormat::Unknown, "index=4"),
            Some("4")
        );
        assert_eq!(
            translate_native_id_to_scan_number(NativeIdFormat::Unknown, "S19"),
            None
        );
        assert_eq!(
            translate_scan_number_to_native_id(NativeIdFormat::Thermo, "19").as_deref(),
            Some(THERMO_ID)
        );
        assert_eq!(
            translate_scan_number_to_native_id(NativeIdFormat::Waters, "19"),
            None
        );
        assert_eq!(
            NativeIdFormat::from_curie(terms::SCAN_NUMBER_ONLY_NATIVE_ID_FORMAT),
            NativeIdFormat::ScanNumberOnly
        );
    }
}
