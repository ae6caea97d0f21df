//! ### 7.38/7.40 - Power saving Commands
//!
//! Requests for Power Saving Mode and extended DRX. Both are requests only:
//! the network decides which timers are actually granted, and the granted PSM
//! timers are reported through `+CEREG` (see [`crate::command::psn`]).

pub mod types;

use atat::atat_derive::AtatCmd;
use types::{EdrxActType, EdrxMode, PsmMode};

use super::NoResponse;

/// 7.38 Power saving mode setting +CPSMS
///
/// Requests PSM with the given Requested_Periodic-TAU (T3412 extended) and
/// Requested_Active-Time (T3324), both as GPRS timer encoded 8 bit strings.
/// The legacy Requested_Periodic-RAU and Requested_GPRS-READY-timer
/// parameters are left empty.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CPSMS", NoResponse)]
pub struct SetPowerSavingMode<'a> {
    #[at_arg(position = 0)]
    pub mode: PsmMode,
    #[at_arg(position = 1, len = 8)]
    pub periodic_rau: Option<&'a str>,
    #[at_arg(position = 2, len = 8)]
    pub gprs_ready_timer: Option<&'a str>,
    #[at_arg(position = 3, len = 8)]
    pub periodic_tau: Option<&'a str>,
    #[at_arg(position = 4, len = 8)]
    pub active_time: Option<&'a str>,
}

/// 7.38 Power saving mode setting +CPSMS
///
/// Disables the use of PSM with `AT+CPSMS=0`. The requested timers are kept
/// by the modem rather than reset to their defaults; the next
/// [`SetPowerSavingMode`] always sends both timers again.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CPSMS", NoResponse)]
pub struct DisablePowerSavingMode {
    #[at_arg(position = 0)]
    pub mode: PsmMode,
}

/// 7.40 eDRX setting +CEDRXS
///
/// Requests the use of eDRX for the given access technology with the
/// Requested_eDRX_value as a 4 bit string, e.g. `"1001"`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CEDRXS", NoResponse)]
pub struct SetEdrxSetting<'a> {
    #[at_arg(position = 0)]
    pub mode: EdrxMode,
    #[at_arg(position = 1)]
    pub act_type: EdrxActType,
    #[at_arg(position = 2, len = 4)]
    pub edrx_value: &'a str,
}

/// 7.40 eDRX setting +CEDRXS
///
/// With [`EdrxMode::DisableAndReset`] the use of eDRX is disabled and all
/// parameters are reset to their defaults.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CEDRXS", NoResponse)]
pub struct ResetEdrxSetting {
    #[at_arg(position = 0)]
    pub mode: EdrxMode,
}
