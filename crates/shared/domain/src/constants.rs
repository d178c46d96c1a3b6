//! Settings keys, defaults and channel prefixes shared by the adapter and its front ends.

/// Settings section holding the volume coupling options.
pub const SECTION: &str = "VV";

/// Key of the optional user-declared solver type.
pub const KEY_SOLVER_TYPE: &str = "solverType";
/// Key of the temperature field name.
pub const KEY_NAME_T: &str = "nameT";
/// Key of the transport properties dictionary name.
pub const KEY_NAME_TRANSPORT_PROPERTIES: &str = "nameTransportProperties";

pub const DEFAULT_SOLVER_TYPE: &str = "";
pub const DEFAULT_NAME_T: &str = "T";
pub const DEFAULT_NAME_TRANSPORT_PROPERTIES: &str = "transportProperties";

/// Declared solver type that explicitly requests auto-detection.
pub const SOLVER_TYPE_NONE: &str = "none";

/// Prefix of every temperature coupling channel (`Temperature`, `TemperatureFlux`, ...).
pub const TEMPERATURE: &str = "Temperature";
