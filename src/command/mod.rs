//! AT Commands used for LTE link control
//!
//! Standard commands follow 3GPP TS 27.007; the `%X` commands are
//! proprietary modem configuration commands.

pub mod mobile_control;
pub mod network_service;
pub mod power_saving;
pub mod psn;
pub mod system_features;

use atat::atat_derive::{AtatResp, AtatUrc};

#[derive(Clone, AtatResp)]
pub struct NoResponse;

#[derive(Debug, Clone, AtatUrc)]
pub enum Urc {
    #[at_urc("+CEREG")]
    EPSNetworkRegistration(psn::urc::EPSNetworkRegistration),
}
