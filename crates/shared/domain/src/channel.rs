use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Direction of a coupling channel as seen from the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
pub enum ChannelRole {
    /// Values flow from the coupling layer into the solver.
    #[strum(serialize = "reader")]
    Read,
    /// Values flow from the solver into the coupling layer.
    #[strum(serialize = "writer")]
    Write,
}

bitflags! {
    /// Set of roles a handler family can serve.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    pub struct RoleSet: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;

        const ALL = Self::READ.bits() | Self::WRITE.bits();
    }
}

impl From<ChannelRole> for RoleSet {
    fn from(role: ChannelRole) -> Self {
        match role {
            ChannelRole::Read => Self::READ,
            ChannelRole::Write => Self::WRITE,
        }
    }
}

impl RoleSet {
    #[must_use]
    pub fn supports(self, role: ChannelRole) -> bool {
        self.contains(role.into())
    }
}
