//! Argument and parameter types used by the proprietary configuration Commands
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeSupport {
    Disabled = 0,
    Enabled = 1,
}

impl From<bool> for ModeSupport {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum BandLockOperation {
    Remove = 0,
    Permanent = 1,
    /// Lock until the next power cycle
    Volatile = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum TraceOperation {
    Deactivate = 0,
    Activate = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum TraceSetId {
    Coredump = 1,
    LteAndIp = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum PcoMode {
    Legacy = 0,
    Extended = 1,
}
