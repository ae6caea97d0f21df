//! Responses for Packet Switched Data Services Commands
use atat::atat_derive::AtatResp;
use heapless::String;

/// 10.1.22 EPS network registration status +CEREG
///
/// Fields follow the read response positions after the `+CEREG:` prefix.
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct EPSNetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: u8,
    #[at_arg(position = 1)]
    pub stat: u8,
    #[at_arg(position = 2)]
    pub tac: Option<String<4>>,
    #[at_arg(position = 3)]
    pub ci: Option<String<8>>,
    #[at_arg(position = 4)]
    pub act: Option<u8>,
    #[at_arg(position = 5)]
    pub cause_type: Option<u8>,
    #[at_arg(position = 6)]
    pub reject_cause: Option<u8>,
    /// Assigned T3324, GPRS Timer 2 encoded
    #[at_arg(position = 7)]
    pub active_time: Option<String<8>>,
    /// Assigned T3412 extended, GPRS Timer 3 encoded
    #[at_arg(position = 8)]
    pub periodic_tau: Option<String<8>>,
}
