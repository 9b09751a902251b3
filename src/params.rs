//! Controlled vocabulary parameters and the containers that hold them.
//!
//! Most metadata in a mass spectrometry run is expressed as [`CVParam`] terms drawn from the
//! PSI-MS and Unit Ontology controlled vocabularies, with free-form [`UserParam`] entries filling
//! in where no term exists. A [`ParamContainer`] owns both kinds, and may also *reference* any
//! number of shared [`ParamGroup`]s. Lookups fall through to those groups in the order they were
//! registered, so a group acts like a set of inherited defaults.
pub mod terms;

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::str::{self, FromStr};
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlledVocabulary {
    MS,
    UO,
    Unknown,
}

const MS_CV: &str = "MS";
const UO_CV: &str = "UO";
const UNKNOWN_CV: &str = "?";

impl ControlledVocabulary {
    pub const fn prefix(&self) -> &'static str {
        match &self {
            Self::MS => MS_CV,
            Self::UO => UO_CV,
            Self::Unknown => UNKNOWN_CV,
        }
    }

    pub fn as_option(&self) -> Option<Self> {
        match self {
            Self::Unknown => None,
            _ => Some(*self),
        }
    }

    /// Create a [`CVParam`] from this vocabulary without a value
    pub fn param<S: Into<String>>(&self, accession: u32, name: S) -> CVParam {
        CVParam::new(CURIE::new(*self, accession), name)
    }

    /// Create a [`CVParam`] from this vocabulary with a value
    pub fn param_val<S: Into<String>, V: ToString>(
        &self,
        accession: u32,
        name: S,
        value: V,
    ) -> CVParam {
        self.param(accession, name).with_value(value)
    }
}

impl FromStr for ControlledVocabulary {
    type Err = CURIEParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MS" | "PSI-MS" => Ok(Self::MS),
            "UO" => Ok(Self::UO),
            _ => Err(CURIEParsingError::UnknownControlledVocabulary(s.to_string())),
        }
    }
}

/// A compact controlled vocabulary identifier, `<prefix>:<accession>`.
///
/// This is the identity of a [`CVParam`]. Use the [`curie!`](crate::curie) macro to write
/// one as a constant.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CURIE {
    pub controlled_vocabulary: ControlledVocabulary,
    pub accession: u32,
}

impl CURIE {
    pub const fn new(controlled_vocabulary: ControlledVocabulary, accession: u32) -> Self {
        Self {
            controlled_vocabulary,
            accession,
        }
    }
}

impl Display for CURIE {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{:07}",
            self.controlled_vocabulary.prefix(),
            self.accession
        )
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CURIEParsingError {
    #[error("{0} is not a recognized controlled vocabulary")]
    UnknownControlledVocabulary(String),
    #[error("Expected a numeric accession, got {0}")]
    AccessionParsingError(String),
    #[error("Missing a ':' separator in {0}")]
    MissingSeparator(String),
}

impl FromStr for CURIE {
    type Err = CURIEParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, accession) = s
            .split_once(':')
            .ok_or_else(|| CURIEParsingError::MissingSeparator(s.to_string()))?;
        let cv: ControlledVocabulary = prefix.parse()?;
        let accession = accession
            .parse()
            .map_err(|_| CURIEParsingError::AccessionParsingError(accession.to_string()))?;
        Ok(CURIE::new(cv, accession))
    }
}

/// Build a [`CURIE`] from its textual form, e.g. `curie!(MS:1000511)`
#[macro_export]
macro_rules! curie {
    (MS:$acc:literal) => {
        $crate::params::CURIE::new($crate::params::ControlledVocabulary::MS, $acc)
    };
    (UO:$acc:literal) => {
        $crate::params::CURIE::new($crate::params::ControlledVocabulary::UO, $acc)
    };
}

/// Units that a term's value might have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    // Mass
    MZ,
    Mass,
    PartsPerMillion,
    Nanometer,

    // Time
    Minute,
    Second,
    Millisecond,

    // Intensity
    DetectorCounts,
    PercentBasePeak,
    PercentBasePeakTimes100,
    AbsorbanceUnit,
    CountsPerSecond,

    // Collision Energy
    Electronvolt,
    PercentElectronVolt,

    #[default]
    Unknown,
}

impl Unit {
    pub const fn for_param(&self) -> (&'static str, &'static str) {
        match self {
            Self::Millisecond => ("UO:0000028", "millisecond"),
            Self::Second => ("UO:0000010", "second"),
            Self::Minute => ("UO:0000031", "minute"),

            Self::MZ => ("MS:1000040", "m/z"),
            Self::Mass => ("UO:0000221", "dalton"),
            Self::PartsPerMillion => ("UO:0000169", "parts per million"),
            Self::Nanometer => ("UO:0000018", "nanometer"),

            Self::DetectorCounts => ("MS:1000131", "number of detector counts"),
            Self::PercentBasePeak => ("MS:1000132", "percent of base peak"),
            Self::PercentBasePeakTimes100 => ("MS:1000905", "percent of base peak times 100"),
            Self::AbsorbanceUnit => ("UO:0000269", "absorbance unit"),
            Self::CountsPerSecond => ("MS:1000814", "counts per second"),

            Self::Electronvolt => ("UO:0000266", "electronvolt"),
            Self::PercentElectronVolt => ("UO:0000187", "percent"),

            Self::Unknown => ("", ""),
        }
    }

    pub fn from_name(name: &str) -> Unit {
        match name {
            "millisecond" => Self::Millisecond,
            "second" => Self::Second,
            "minute" => Self::Minute,

            "m/z" => Self::MZ,
            "dalton" => Self::Mass,
            "parts per million" => Self::PartsPerMillion,
            "nanometer" => Self::Nanometer,

            "number of detector counts" => Self::DetectorCounts,
            "percent of base peak" => Self::PercentBasePeak,
            "percent of base peak times 100" => Self::PercentBasePeakTimes100,
            "absorbance unit" => Self::AbsorbanceUnit,
            "counts per second" => Self::CountsPerSecond,

            "electronvolt" => Self::Electronvolt,
            "percent" => Self::PercentElectronVolt,
            _ => Unit::Unknown,
        }
    }

    pub fn from_accession(acc: &str) -> Unit {
        match acc {
            "UO:0000028" => Self::Millisecond,
            "UO:0000010" => Self::Second,
            "UO:0000031" => Self::Minute,

            "MS:1000040" => Self::MZ,
            "UO:0000221" => Self::Mass,
            "UO:0000169" => Self::PartsPerMillion,
            "UO:0000018" => Self::Nanometer,

            "MS:1000131" => Self::DetectorCounts,
            "MS:1000132" => Self::PercentBasePeak,
            "MS:1000905" => Self::PercentBasePeakTimes100,
            "UO:0000269" => Self::AbsorbanceUnit,
            "MS:1000814" => Self::CountsPerSecond,

            "UO:0000266" => Self::Electronvolt,
            "UO:0000187" => Self::PercentElectronVolt,
            _ => Unit::Unknown,
        }
    }

    /// The controlled vocabulary identifier of this unit, if it has one
    pub fn curie(&self) -> Option<CURIE> {
        let (acc, _) = self.for_param();
        acc.parse().ok()
    }

    pub fn from_curie(curie: &CURIE) -> Unit {
        Self::from_accession(&curie.to_string())
    }
}

/// A controlled vocabulary term, with an optional value and unit.
///
/// Two [`CVParam`] values are equal when their accession, value and unit agree. The name is
/// a label for display and does not participate in equality.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CVParam {
    pub accession: CURIE,
    pub name: String,
    pub value: String,
    pub unit: Unit,
}

impl Default for CURIE {
    fn default() -> Self {
        CURIE::new(ControlledVocabulary::Unknown, 0)
    }
}

impl PartialEq for CVParam {
    fn eq(&self, other: &Self) -> bool {
        self.accession == other.accession && self.value == other.value && self.unit == other.unit
    }
}

impl Eq for CVParam {}

impl CVParam {
    pub fn new<S: Into<String>>(accession: CURIE, name: S) -> Self {
        Self {
            accession,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a term whose name is looked up from the built-in [`terms`] table
    pub fn from_curie(accession: CURIE) -> Self {
        Self::new(accession, terms::term_name(&accession).unwrap_or_default())
    }

    pub fn with_value<V: ToString>(mut self, value: V) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn coerce<T: str::FromStr>(&self) -> Result<T, T::Err> {
        self.value.parse::<T>()
    }

    /// Interpret the value as a time and convert it to seconds using the unit
    pub fn time_in_seconds(&self) -> Option<f64> {
        let value: f64 = self.coerce().ok()?;
        match self.unit {
            Unit::Minute => Some(value * 60.0),
            Unit::Millisecond => Some(value / 1000.0),
            _ => Some(value),
        }
    }

    pub fn curie(&self) -> String {
        self.accession.to_string()
    }
}

impl Display for CVParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.accession, self.name)?;
        if !self.value.is_empty() {
            write!(f, " = {}", self.value)?;
        }
        if !matches!(self.unit, Unit::Unknown) {
            write!(f, " ({})", self.unit.for_param().1)?;
        }
        Ok(())
    }
}

/// A free-form parameter that does not come from a controlled vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserParam {
    pub name: String,
    pub value: String,
    /// The data type of the value, usually an XML Schema type name like `xsd:float`
    pub dtype: Option<String>,
    pub unit: Unit,
}

impl UserParam {
    pub fn new<S: Into<String>, V: ToString>(name: S, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
            ..Default::default()
        }
    }

    pub fn with_dtype<S: Into<String>>(mut self, dtype: S) -> Self {
        self.dtype = Some(dtype.into());
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn coerce<T: str::FromStr>(&self) -> Result<T, T::Err> {
        self.value.parse::<T>()
    }
}

/// A named bundle of parameters shared between many containers.
///
/// Groups are referenced, never copied, and are not mutated through the containers that
/// reference them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamGroup {
    pub id: String,
    pub params: ParamContainer,
}

impl ParamGroup {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            params: ParamContainer::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.params.is_empty()
    }
}

pub type ParamGroupRef = Arc<ParamGroup>;

/// Owns [`CVParam`] and [`UserParam`] entries and holds references to [`ParamGroup`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamContainer {
    pub cv_params: Vec<CVParam>,
    pub user_params: Vec<UserParam>,
    pub param_groups: Vec<ParamGroupRef>,
}

impl ParamContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cv_params.is_empty()
            && self.user_params.is_empty()
            && self.param_groups.iter().all(|g| g.is_empty())
    }

    pub fn clear(&mut self) {
        self.cv_params.clear();
        self.user_params.clear();
        self.param_groups.clear();
    }

    /// Find the first term with exactly this accession, searching owned terms and then
    /// each referenced group in order
    pub fn cv_param(&self, accession: CURIE) -> Option<&CVParam> {
        self.cv_params
            .iter()
            .find(|p| p.accession == accession)
            .or_else(|| {
                self.param_groups
                    .iter()
                    .find_map(|g| g.params.cv_param(accession))
            })
    }

    /// Find the first term that is `accession` or any of its descendants in `ontology`
    pub fn cv_param_child<O: CVOntology + ?Sized>(
        &self,
        accession: CURIE,
        ontology: &O,
    ) -> Option<&CVParam> {
        self.cv_params
            .iter()
            .find(|p| ontology.is_descendant(p.accession, accession))
            .or_else(|| {
                self.param_groups
                    .iter()
                    .find_map(|g| g.params.cv_param_child(accession, ontology))
            })
    }

    /// Every term, owned or inherited, that is `accession` or one of its descendants
    pub fn cv_param_children<'a, O: CVOntology + ?Sized>(
        &'a self,
        accession: CURIE,
        ontology: &O,
    ) -> Vec<&'a CVParam> {
        let mut found: Vec<&CVParam> = self
            .cv_params
            .iter()
            .filter(|p| ontology.is_descendant(p.accession, accession))
            .collect();
        for group in self.param_groups.iter() {
            found.extend(group.params.cv_param_children(accession, ontology));
        }
        found
    }

    pub fn user_param(&self, name: &str) -> Option<&UserParam> {
        self.user_params
            .iter()
            .find(|p| p.name == name)
            .or_else(|| {
                self.param_groups
                    .iter()
                    .find_map(|g| g.params.user_param(name))
            })
    }

    /// Update the owned term with this accession in place, or append a new one.
    ///
    /// Referenced groups are never touched, so a term inherited from a group is shadowed
    /// by the newly appended owned term.
    pub fn set<V: ToString>(&mut self, accession: CURIE, value: V, unit: Unit) {
        if let Some(param) = self
            .cv_params
            .iter_mut()
            .find(|p| p.accession == accession)
        {
            param.value = value.to_string();
            param.unit = unit;
        } else {
            self.cv_params.push(
                CVParam::from_curie(accession)
                    .with_value(value)
                    .with_unit(unit),
            );
        }
    }

    /// Remove every owned term with this accession
    pub fn remove(&mut self, accession: CURIE) -> usize {
        let n = self.cv_params.len();
        self.cv_params.retain(|p| p.accession != accession);
        n - self.cv_params.len()
    }
}

/// Anything that carries a [`ParamContainer`].
///
/// All of the lookup behavior is provided, implementers only expose the container.
pub trait ParamDescribed {
    fn params(&self) -> &ParamContainer;
    fn params_mut(&mut self) -> &mut ParamContainer;

    fn add_param(&mut self, param: CVParam) {
        self.params_mut().cv_params.push(param);
    }

    fn add_user_param(&mut self, param: UserParam) {
        self.params_mut().user_params.push(param);
    }

    fn add_param_group(&mut self, group: ParamGroupRef) {
        self.params_mut().param_groups.push(group);
    }

    fn cv_param(&self, accession: CURIE) -> Option<&CVParam> {
        self.params().cv_param(accession)
    }

    fn cv_param_child<O: CVOntology + ?Sized>(
        &self,
        accession: CURIE,
        ontology: &O,
    ) -> Option<&CVParam> {
        self.params().cv_param_child(accession, ontology)
    }

    fn has_cv_param(&self, accession: CURIE) -> bool {
        self.cv_param(accession).is_some()
    }

    fn has_cv_param_child<O: CVOntology + ?Sized>(&self, accession: CURIE, ontology: &O) -> bool {
        self.cv_param_child(accession, ontology).is_some()
    }

    fn user_param(&self, name: &str) -> Option<&UserParam> {
        self.params().user_param(name)
    }

    fn set<V: ToString>(&mut self, accession: CURIE, value: V, unit: Unit) {
        self.params_mut().set(accession, value, unit)
    }

    /// Set a term that carries no value, like a spectrum type
    fn set_flag(&mut self, accession: CURIE) {
        self.params_mut().set(accession, "", Unit::Unknown)
    }
}

impl ParamDescribed for ParamContainer {
    fn params(&self) -> &ParamContainer {
        self
    }

    fn params_mut(&mut self) -> &mut ParamContainer {
        self
    }
}

#[macro_export]
macro_rules! impl_param_described {
    ($($t:ty), +) => {$(

        impl $crate::params::ParamDescribed for $t {
            fn params(&self) -> &$crate::params::ParamContainer {
                return &self.params
            }

            fn params_mut(&mut self) -> &mut $crate::params::ParamContainer {
                return &mut self.params
            }
        }
    )+};
}

impl_param_described!(ParamGroup);

/// The `is_a` relation of a controlled vocabulary.
///
/// `is_descendant(x, x)` must be `true`.
pub trait CVOntology {
    fn is_descendant(&self, candidate: CURIE, ancestor: CURIE) -> bool;
}

impl<F: Fn(CURIE, CURIE) -> bool> CVOntology for F {
    fn is_descendant(&self, candidate: CURIE, ancestor: CURIE) -> bool {
        self(candidate, ancestor)
    }
}

/// An in-memory `is_a` graph, enough to answer [`CVOntology`] queries over a known set of terms.
#[derive(Debug, Clone, Default)]
pub struct OntologyTable {
    parents: HashMap<CURIE, Vec<CURIE>>,
    names: HashMap<CURIE, String>,
}

impl OntologyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The subset of PSI-MS known to [`terms`]
    pub fn psi_ms() -> Self {
        let mut this = Self::new();
        for (curie, name, parents) in terms::TERMS {
            this.add_term(*curie, *name, parents.iter().copied());
        }
        this
    }

    pub fn add_term<S: Into<String>, I: IntoIterator<Item = CURIE>>(
        &mut self,
        curie: CURIE,
        name: S,
        parents: I,
    ) {
        self.names.insert(curie, name.into());
        self.parents.entry(curie).or_default().extend(parents);
    }

    pub fn name(&self, curie: &CURIE) -> Option<&str> {
        self.names.get(curie).map(|s| s.as_str())
    }

    pub fn parents(&self, curie: &CURIE) -> &[CURIE] {
        self.parents.get(curie).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl CVOntology for OntologyTable {
    fn is_descendant(&self, candidate: CURIE, ancestor: CURIE) -> bool {
        if candidate == ancestor {
            return true;
        }
        let mut seen = HashSet::new();
        let mut stack = vec![candidate];
        while let Some(term) = stack.pop() {
            for parent in self.parents(&term) {
                if *parent == ancestor {
                    return true;
                }
                if seen.insert(*parent) {
                    stack.push(*parent);
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn shared_group() -> ParamGroupRef {
        let mut group = ParamGroup::new("CommonMS1SpectrumParams");
        group.set_flag(terms::MS1_SPECTRUM);
        group.add_user_param(UserParam::new("instrument", "LTQ-FT"));
        Arc::new(group)
    }

    #[test]
    fn test_curie_roundtrip() {
        let c: CURIE = "MS:1000511".parse().unwrap();
        assert_eq!(c, curie!(MS:1000511));
        assert_eq!(c.to_string(), "MS:1000511");
        assert_eq!(curie!(UO:0000010).to_string(), "UO:0000010");
        assert!("XX:1".parse::<CURIE>().is_err());
        assert!("MS1000511".parse::<CURIE>().is_err());
    }

    #[test]
    fn test_cvparam_equality_ignores_name() {
        let a = CVParam::new(terms::MS_LEVEL, "ms level").with_value(2);
        let b = CVParam::new(terms::MS_LEVEL, "").with_value(2);
        assert_eq!(a, b);
        assert_ne!(a, b.clone().with_value(1));
        assert_ne!(a, b.with_unit(Unit::Second));
    }

    #[test]
    fn test_group_fallthrough() {
        let group = shared_group();
        let mut container = ParamContainer::new();
        container.set(terms::MS_LEVEL, 1, Unit::Unknown);
        assert!(!container.has_cv_param(terms::MS1_SPECTRUM));

        container.add_param_group(group.clone());
        assert!(container.has_cv_param(terms::MS1_SPECTRUM));
        assert_eq!(container.user_param("instrument").unwrap().value, "LTQ-FT");

        let mut fresh = ParamContainer::new();
        fresh.set(terms::MS_LEVEL, 1, Unit::Unknown);
        assert!(!fresh.has_cv_param(terms::MS1_SPECTRUM));
        assert!(fresh.user_param("instrument").is_none());
    }

    #[test]
    fn test_owned_terms_win() {
        let mut group = ParamGroup::new("g");
        group.set(terms::MS_LEVEL, 2, Unit::Unknown);
        let mut container = ParamContainer::new();
        container.add_param_group(Arc::new(group));
        assert_eq!(container.cv_param(terms::MS_LEVEL).unwrap().value, "2");

        container.set(terms::MS_LEVEL, 1, Unit::Unknown);
        assert_eq!(container.cv_param(terms::MS_LEVEL).unwrap().value, "1");
        // The group itself is untouched
        assert_eq!(
            container.param_groups[0].cv_param(terms::MS_LEVEL).unwrap().value,
            "2"
        );
    }

    #[test]
    fn test_set_updates_in_place() {
        let mut container = ParamContainer::new();
        container.set(terms::SCAN_START_TIME, 5.0, Unit::Minute);
        container.set(terms::SCAN_START_TIME, 300.0, Unit::Second);
        assert_eq!(container.cv_params.len(), 1);
        let p = container.cv_param(terms::SCAN_START_TIME).unwrap();
        assert_eq!(p.unit, Unit::Second);
        assert_eq!(p.name, "scan start time");
        assert_eq!(p.time_in_seconds(), Some(300.0));
    }

    #[test]
    fn test_nested_groups() {
        let inner = Arc::new({
            let mut g = ParamGroup::new("inner");
            g.set_flag(terms::CENTROID_SPECTRUM);
            g
        });
        let outer = Arc::new({
            let mut g = ParamGroup::new("outer");
            g.add_param_group(inner);
            g
        });
        let mut container = ParamContainer::new();
        container.add_param_group(outer);
        assert!(container.has_cv_param(terms::CENTROID_SPECTRUM));
    }

    #[test]
    fn test_cv_param_child() {
        let ontology = OntologyTable::psi_ms();
        let mut container = ParamContainer::new();
        container.set_flag(terms::MSN_SPECTRUM);
        container.add_param_group(shared_group());

        let p = container
            .cv_param_child(terms::SPECTRUM_TYPE, &ontology)
            .unwrap();
        assert_eq!(p.accession, terms::MSN_SPECTRUM);
        assert!(container.has_cv_param_child(terms::MASS_SPECTRUM, &ontology));
        assert!(!container.has_cv_param_child(terms::SPECTRUM_REPRESENTATION, &ontology));
        assert_eq!(
            container
                .cv_param_children(terms::SPECTRUM_TYPE, &ontology)
                .len(),
            2
        );

        let exact_only = |a: CURIE, b: CURIE| a == b;
        assert!(!container.has_cv_param_child(terms::SPECTRUM_TYPE, &exact_only));
    }

    #[test]
    fn test_ontology_is_descendant() {
        let ontology = OntologyTable::psi_ms();
        assert!(ontology.is_descendant(terms::MS1_SPECTRUM, terms::SPECTRUM_TYPE));
        assert!(ontology.is_descendant(terms::MZ_ARRAY, terms::BINARY_DATA_ARRAY));
        assert!(!ontology.is_descendant(terms::SPECTRUM_TYPE, terms::MS1_SPECTRUM));
        assert_eq!(ontology.name(&terms::MS_LEVEL), Some("ms level"));
    }
}
