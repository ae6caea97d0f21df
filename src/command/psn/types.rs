//! Argument and parameter types used by Packet Switched Data Services Commands
use atat::atat_derive::{AtatEnum, AtatLen};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, AtatLen)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ContextId(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum EPSNetworkRegistrationUrcConfig {
    /// 0: network registration URC disabled
    UrcDisabled = 0,
    /// 1: network registration URC +CEREG: <stat> enabled
    UrcEnabled = 1,
    /// 2: network registration and location information URC
    UrcVerbose = 2,
    /// 3: as 2, plus EMM cause information
    UrcVerboseWithCause = 3,
    /// 4: as 2, plus PSM timers
    UrcPsm = 4,
    /// 5: as 4, plus EMM cause information
    UrcPsmEnabled = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AuthProtocol {
    None = 0,
    Pap = 1,
    Chap = 2,
}
