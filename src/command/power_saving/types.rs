//! Argument and parameter types used by Power saving Commands
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum PsmMode {
    Disable = 0,
    Enable = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum EdrxMode {
    Disable = 0,
    Enable = 1,
    /// Enable, and report eDRX parameter changes with +CEDRXP
    EnableWithUrc = 2,
    /// Disable eDRX and reset all parameters to factory defaults
    DisableAndReset = 3,
}

/// Access technology an eDRX request applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdrxActType {
    /// E-UTRAN (WB-S1 mode), i.e. LTE-M
    LteM = 4,
    /// E-UTRAN (NB-S1 mode), i.e. NB-IoT
    NbIot = 5,
}
