use crate::constants::{DEFAULT_NAME_T, DEFAULT_NAME_TRANSPORT_PROPERTIES, DEFAULT_SOLVER_TYPE};
use serde::Deserialize;

/// Options of the `VV` settings section.
///
/// Built once when the module is configured and never mutated afterwards.
/// `solver_kind` starts as the literal the user declared (possibly empty); a
/// successful configuration replaces it with the resolved kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    #[serde(rename = "solverType")]
    pub solver_kind: String,
    #[serde(rename = "nameT")]
    pub temperature_field_name: String,
    #[serde(rename = "nameTransportProperties")]
    pub transport_properties_document_name: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            solver_kind: DEFAULT_SOLVER_TYPE.to_owned(),
            temperature_field_name: DEFAULT_NAME_T.to_owned(),
            transport_properties_document_name: DEFAULT_NAME_TRANSPORT_PROPERTIES.to_owned(),
        }
    }
}
