//! Unsolicited responses for Packet Switched Data Services Commands
use atat::atat_derive::AtatResp;
use heapless::String;

/// 10.1.22 EPS network registration status +CEREG
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct EPSNetworkRegistration {
    #[at_arg(position = 0)]
    pub stat: u8,
    #[at_arg(position = 1)]
    pub tac: Option<String<4>>,
    #[at_arg(position = 2)]
    pub ci: Option<String<8>>,
    #[at_arg(position = 3)]
    pub act: Option<u8>,
    #[at_arg(position = 4)]
    pub cause_type: Option<u8>,
    #[at_arg(position = 5)]
    pub reject_cause: Option<u8>,
    #[at_arg(position = 6)]
    pub active_time: Option<String<8>>,
    #[at_arg(position = 7)]
    pub periodic_tau: Option<String<8>>,
}

impl EPSNetworkRegistration {
    /// Notification carrying only a status code.
    pub const fn from_stat(stat: u8) -> Self {
        Self {
            stat,
            tac: None,
            ci: None,
            act: None,
            cause_type: None,
            reject_cause: None,
            active_time: None,
            periodic_tau: None,
        }
    }
}
