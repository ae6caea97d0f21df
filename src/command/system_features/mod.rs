//! Proprietary modem configuration Commands
//!
//! The `%X` commands select the supported radio access technologies, lock
//! bands and configure modem tracing and PCO handling.
pub mod types;

use atat::atat_derive::AtatCmd;
use types::{BandLockOperation, ModeSupport, PcoMode, TraceOperation, TraceSetId};

use super::NoResponse;

/// %XSYSTEMMODE - System mode
///
/// Selects which of LTE-M, NB-IoT and GNSS the modem may use, together with
/// the preference between the two LTE modes. Only accepted while the modem
/// is offline or powered off.
#[derive(Clone, AtatCmd)]
#[at_cmd("%XSYSTEMMODE", NoResponse)]
pub struct SetSystemMode {
    #[at_arg(position = 0)]
    pub lte_m: ModeSupport,
    #[at_arg(position = 1)]
    pub nb_iot: ModeSupport,
    #[at_arg(position = 2)]
    pub gnss: ModeSupport,
    #[at_arg(position = 3)]
    pub preference: u8,
}

/// %XBANDLOCK - Band lock
///
/// Restricts the LTE bands the modem may search, given as a binary string
/// where the rightmost character is band 1.
#[derive(Clone, AtatCmd)]
#[at_cmd("%XBANDLOCK", NoResponse)]
pub struct SetBandLock<'a> {
    #[at_arg(position = 0)]
    pub operation: BandLockOperation,
    #[at_arg(position = 1, len = 88)]
    pub mask: &'a str,
}

/// %XMODEMTRACE - Modem trace activation
#[derive(Clone, AtatCmd)]
#[at_cmd("%XMODEMTRACE", NoResponse)]
pub struct SetModemTrace {
    #[at_arg(position = 0)]
    pub operation: TraceOperation,
    #[at_arg(position = 1)]
    pub set_id: TraceSetId,
}

/// %XEPCO - Protocol configuration options
///
/// Selects between extended and legacy PCO. Some networks only accept the
/// legacy format.
#[derive(Clone, AtatCmd)]
#[at_cmd("%XEPCO", NoResponse)]
pub struct SetPcoMode {
    #[at_arg(position = 0)]
    pub mode: PcoMode,
}
