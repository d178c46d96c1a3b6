use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, IntoStaticStr};

/// Classification of the coupled solver's physical model.
///
/// `Unknown` is what an empty, `none` or unrecognized declaration parses to.
/// It is never a valid outcome of a successful configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SolverKind {
    Basic,
    Compressible,
    Incompressible,
    #[default]
    Unknown,
}

impl SolverKind {
    /// Every kind a configuration may resolve to, in declaration order.
    pub const RESOLVED: [Self; 3] = [Self::Basic, Self::Compressible, Self::Incompressible];

    /// Interprets a declared solver type. Only the exact lowercase literals are recognized.
    #[must_use]
    pub fn from_declared(declared: &str) -> Self {
        match declared {
            "basic" => Self::Basic,
            "compressible" => Self::Compressible,
            "incompressible" => Self::Incompressible,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}
