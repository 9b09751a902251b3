//! Well-known controlled vocabulary terms used throughout the data model.
use super::CURIE;
use crate::curie;

pub const SPECTRUM_TYPE: CURIE = curie!(MS:1000559);
pub const MASS_SPECTRUM: CURIE = curie!(MS:1000294);
pub const MS1_SPECTRUM: CURIE = curie!(MS:1000579);
pub const MSN_SPECTRUM: CURIE = curie!(MS:1000580);
pub const ELECTROMAGNETIC_RADIATION_SPECTRUM: CURIE = curie!(MS:1000804);
pub const EMISSION_SPECTRUM: CURIE = curie!(MS:1000805);
pub const ABSORPTION_SPECTRUM: CURIE = curie!(MS:1000806);

pub const SPECTRUM_REPRESENTATION: CURIE = curie!(MS:1000525);
pub const CENTROID_SPECTRUM: CURIE = curie!(MS:1000127);
pub const PROFILE_SPECTRUM: CURIE = curie!(MS:1000128);

pub const MS_LEVEL: CURIE = curie!(MS:1000511);
pub const FILTER_STRING: CURIE = curie!(MS:1000512);
pub const SCAN_START_TIME: CURIE = curie!(MS:1000016);
pub const PRESET_SCAN_CONFIGURATION: CURIE = curie!(MS:1000616);
pub const BASE_PEAK_MZ: CURIE = curie!(MS:1000504);
pub const BASE_PEAK_INTENSITY: CURIE = curie!(MS:1000505);
pub const TOTAL_ION_CURRENT: CURIE = curie!(MS:1000285);
pub const LOWEST_OBSERVED_MZ: CURIE = curie!(MS:1000528);
pub const HIGHEST_OBSERVED_MZ: CURIE = curie!(MS:1000527);

pub const SELECTED_ION_MZ: CURIE = curie!(MS:1000744);
pub const CHARGE_STATE: CURIE = curie!(MS:1000041);
pub const PEAK_INTENSITY: CURIE = curie!(MS:1000042);
pub const ISOLATION_WINDOW_TARGET_MZ: CURIE = curie!(MS:1000827);

pub const BINARY_DATA_ARRAY: CURIE = curie!(MS:1000513);
pub const MZ_ARRAY: CURIE = curie!(MS:1000514);
pub const INTENSITY_ARRAY: CURIE = curie!(MS:1000515);
pub const CHARGE_ARRAY: CURIE = curie!(MS:1000516);
pub const SIGNAL_TO_NOISE_ARRAY: CURIE = curie!(MS:1000517);
pub const TIME_ARRAY: CURIE = curie!(MS:1000595);
pub const WAVELENGTH_ARRAY: CURIE = curie!(MS:1000617);

pub const BINARY_DATA_TYPE: CURIE = curie!(MS:1000518);
pub const FLOAT_32: CURIE = curie!(MS:1000521);
pub const FLOAT_64: CURIE = curie!(MS:1000523);
pub const BINARY_DATA_COMPRESSION_TYPE: CURIE = curie!(MS:1000572);
pub const ZLIB_COMPRESSION: CURIE = curie!(MS:1000574);
pub const NO_COMPRESSION: CURIE = curie!(MS:1000576);

pub const NATIVE_ID_FORMAT: CURIE = curie!(MS:1000767);
pub const THERMO_NATIVE_ID_FORMAT: CURIE = curie!(MS:1000768);
pub const WATERS_NATIVE_ID_FORMAT: CURIE = curie!(MS:1000769);
pub const MULTIPLE_PEAK_LIST_NATIVE_ID_FORMAT: CURIE = curie!(MS:1000774);
pub const SINGLE_PEAK_LIST_NATIVE_ID_FORMAT: CURIE = curie!(MS:1000775);
pub const SCAN_NUMBER_ONLY_NATIVE_ID_FORMAT: CURIE = curie!(MS:1000776);
pub const SPECTRUM_IDENTIFIER_NATIVE_ID_FORMAT: CURIE = curie!(MS:1000777);
pub const MZML_UNIQUE_IDENTIFIER: CURIE = curie!(MS:1001530);

pub const DATA_PROCESSING_ACTION: CURIE = curie!(MS:1000543);
pub const PEAK_PICKING: CURIE = curie!(MS:1000035);
pub const LOW_INTENSITY_DATA_POINT_REMOVAL: CURIE = curie!(MS:1000594);

pub const SHA1: CURIE = curie!(MS:1000569);

pub const MZ_UNIT: CURIE = curie!(MS:1000040);
pub const DETECTOR_COUNTS_UNIT: CURIE = curie!(MS:1000131);
pub const SECOND_UNIT: CURIE = curie!(UO:0000010);
pub const MINUTE_UNIT: CURIE = curie!(UO:0000031);

/// `(term, name, is_a parents)` for every term above
pub const TERMS: &[(CURIE, &str, &[CURIE])] = &[
    (SPECTRUM_TYPE, "spectrum type", &[]),
    (MASS_SPECTRUM, "mass spectrum", &[SPECTRUM_TYPE]),
    (MS1_SPECTRUM, "MS1 spectrum", &[MASS_SPECTRUM]),
    (MSN_SPECTRUM, "MSn spectrum", &[MASS_SPECTRUM]),
    (
        ELECTROMAGNETIC_RADIATION_SPECTRUM,
        "electromagnetic radiation spectrum",
        &[SPECTRUM_TYPE],
    ),
    (
        EMISSION_SPECTRUM,
        "emission spectrum",
        &[ELECTROMAGNETIC_RADIATION_SPECTRUM],
    ),
    (
        ABSORPTION_SPECTRUM,
        "absorption spectrum",
        &[ELECTROMAGNETIC_RADIATION_SPECTRUM],
    ),
    (SPECTRUM_REPRESENTATION, "spectrum representation", &[]),
    (CENTROID_SPECTRUM, "centroid spectrum", &[SPECTRUM_REPRESENTATION]),
    (PROFILE_SPECTRUM, "profile spectrum", &[SPECTRUM_REPRESENTATION]),
    (MS_LEVEL, "ms level", &[]),
    (FILTER_STRING, "filter string", &[]),
    (SCAN_START_TIME, "scan start time", &[]),
    (PRESET_SCAN_CONFIGURATION, "preset scan configuration", &[]),
    (BASE_PEAK_MZ, "base peak m/z", &[]),
    (BASE_PEAK_INTENSITY, "base peak intensity", &[]),
    (TOTAL_ION_CURRENT, "total ion current", &[]),
    (LOWEST_OBSERVED_MZ, "lowest observed m/z", &[]),
    (HIGHEST_OBSERVED_MZ, "highest observed m/z", &[]),
    (SELECTED_ION_MZ, "selected ion m/z", &[]),
    (CHARGE_STATE, "charge state", &[]),
    (PEAK_INTENSITY, "peak intensity", &[]),
    (ISOLATION_WINDOW_TARGET_MZ, "isolation window target m/z", &[]),
    (BINARY_DATA_ARRAY, "binary data array", &[]),
    (MZ_ARRAY, "m/z array", &[BINARY_DATA_ARRAY]),
    (INTENSITY_ARRAY, "intensity array", &[BINARY_DATA_ARRAY]),
    (CHARGE_ARRAY, "charge array", &[BINARY_DATA_ARRAY]),
    (SIGNAL_TO_NOISE_ARRAY, "signal to noise array", &[BINARY_DATA_ARRAY]),
    (TIME_ARRAY, "time array", &[BINARY_DATA_ARRAY]),
    (WAVELENGTH_ARRAY, "wavelength array", &[BINARY_DATA_ARRAY]),
    (BINARY_DATA_TYPE, "binary data type", &[]),
    (FLOAT_32, "32-bit float", &[BINARY_DATA_TYPE]),
    (FLOAT_64, "64-bit float", &[BINARY_DATA_TYPE]),
    (BINARY_DATA_COMPRESSION_TYPE, "binary data compression type", &[]),
    (ZLIB_COMPRESSION, "zlib compression", &[BINARY_DATA_COMPRESSION_TYPE]),
    (NO_COMPRESSION, "no compression", &[BINARY_DATA_COMPRESSION_TYPE]),
    (NATIVE_ID_FORMAT, "native spectrum identifier format", &[]),
    (THERMO_NATIVE_ID_FORMAT, "Thermo nativeID format", &[NATIVE_ID_FORMAT]),
    (WATERS_NATIVE_ID_FORMAT, "Waters nativeID format", &[NATIVE_ID_FORMAT]),
    (
        MULTIPLE_PEAK_LIST_NATIVE_ID_FORMAT,
        "multiple peak list nativeID format",
        &[NATIVE_ID_FORMAT],
    ),
    (
        SINGLE_PEAK_LIST_NATIVE_ID_FORMAT,
        "single peak list nativeID format",
        &[NATIVE_ID_FORMAT],
    ),
    (
        SCAN_NUMBER_ONLY_NATIVE_ID_FORMAT,
        "scan number only nativeID format",
        &[NATIVE_ID_FORMAT],
    ),
    (
        SPECTRUM_IDENTIFIER_NATIVE_ID_FORMAT,
        "spectrum identifier nativeID format",
        &[NATIVE_ID_FORMAT],
    ),
    (MZML_UNIQUE_IDENTIFIER, "mzML unique identifier", &[NATIVE_ID_FORMAT]),
    (DATA_PROCESSING_ACTION, "data processing action", &[]),
    (PEAK_PICKING, "peak picking", &[DATA_PROCESSING_ACTION]),
    (
        LOW_INTENSITY_DATA_POINT_REMOVAL,
        "low intensity data point removal",
        &[DATA_PROCESSING_ACTION],
    ),
    (SHA1, "SHA-1", &[]),
    (MZ_UNIT, "m/z", &[]),
    (DETECTOR_COUNTS_UNIT, "number of detector counts", &[]),
    (SECOND_UNIT, "second", &[]),
    (MINUTE_UNIT, "minute", &[]),
];

pub fn term_name(curie: &CURIE) -> Option<&'static str> {
    TERMS
        .iter()
        .find(|(c, _, _)| c == curie)
        .map(|(_, name, _)| *name)
}
