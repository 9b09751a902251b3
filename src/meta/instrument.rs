use crate::impl_param_described;
use crate::params::ParamContainer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComponentType {
    IonSource,
    Analyzer,
    Detector,
    #[default]
    Unknown,
}

/// One stage of the instrument, in the order ions encounter it
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub component_type: ComponentType,
    pub order: u8,
    pub params: ParamContainer,
}

impl Component {
    pub fn new(component_type: ComponentType, order: u8) -> Self {
        Self {
            component_type,
            order,
            params: ParamContainer::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.component_type, ComponentType::Unknown)
            && self.order == 0
            && self.params.is_empty()
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct InstrumentConfiguration {
    pub id: String,
    pub components: Vec<Component>,
    pub params: ParamContainer,
    pub software_reference: String,
    pub scan_settings_reference: Option<String>,
}

impl InstrumentConfiguration {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    fn nth_of(&self, component_type: ComponentType, index: usize) -> Option<&Component> {
        self.components
            .iter()
            .filter(|c| c.component_type == component_type)
            .nth(index)
    }

    pub fn source(&self, index: usize) -> Option<&Component> {
        self.nth_of(ComponentType::IonSource, index)
    }

    pub fn analyzer(&self, index: usize) -> Option<&Component> {
        self.nth_of(ComponentType::Analyzer, index)
    }

    pub fn detector(&self, index: usize) -> Option<&Component> {
        self.nth_of(ComponentType::Detector, index)
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.components.iter().all(|c| c.is_empty())
            && self.params.is_empty()
            && self.software_reference.is_empty()
            && self.scan_settings_reference.is_none()
    }
}

impl_param_described!(InstrumentConfiguration, Component);
