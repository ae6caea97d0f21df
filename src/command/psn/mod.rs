//! ### 10 - Packet Switched Data Services Commands
//!
//! PDP context definition and authentication for the default EPS bearer, and
//! the EPS network registration status command used both to subscribe to
//! registration notifications and to read back the PSM timers granted by the
//! network.

pub mod responses;
pub mod types;
pub mod urc;

use atat::atat_derive::AtatCmd;
use responses::EPSNetworkRegistrationStatus;
use types::{AuthProtocol, ContextId, EPSNetworkRegistrationUrcConfig};

use super::NoResponse;

/// 10.1.1 PDP context definition +CGDCONT
///
/// Defines the connection parameters for a PDP context, identified by the
/// local context identification parameter <cid>. The initial EPS bearer
/// established during the LTE attach uses <cid>=0, so this has to be issued
/// before the attach to take effect for it.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGDCONT", NoResponse)]
pub struct SetPDPContextDefinition<'a> {
    #[at_arg(position = 0)]
    pub cid: ContextId,
    #[at_arg(position = 1, len = 6)]
    pub pdp_type: &'a str,
    #[at_arg(position = 2, len = 99)]
    pub apn: &'a str,
}

/// 10.1.31 Define PDP context authentication parameters +CGAUTH
///
/// Sets the authentication parameters sent in the protocol configuration
/// options of the PDN connection request for <cid>. Username and password are
/// omitted when <auth_prot> is [`AuthProtocol::None`].
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGAUTH", NoResponse)]
pub struct SetPDNAuthentication<'a> {
    #[at_arg(position = 0)]
    pub cid: ContextId,
    #[at_arg(position = 1)]
    pub auth_prot: AuthProtocol,
    #[at_arg(position = 2, len = 64)]
    pub username: Option<&'a str>,
    #[at_arg(position = 3, len = 64)]
    pub password: Option<&'a str>,
}

/// 10.1.22 EPS network registration status +CEREG
///
/// Configures the network registration URC related to EPS domain. With
/// <n>=5 the URC is
/// `+CEREG: <stat>[,[<tac>],[<ci>],[<AcT>][,[<cause_type>],[<reject_cause>][,[<Active-Time>],[<Periodic-TAU>]]]]`
/// whenever the registration status or the cell changes.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CEREG", NoResponse)]
pub struct SetEPSNetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: EPSNetworkRegistrationUrcConfig,
}

/// 10.1.22 EPS network registration status +CEREG
///
/// The read command returns the current <n> followed by the same information
/// as the URC. <Active-Time> and <Periodic-TAU> are only present when <n>=4
/// or <n>=5 and the network granted PSM.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CEREG?", EPSNetworkRegistrationStatus)]
pub struct GetEPSNetworkRegistrationStatus;

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::written;
    use atat::serde_at::de::from_str;
    use heapless::String;

    #[test]
    fn serialize_cereg() {
        assert_eq!(
            written(&SetEPSNetworkRegistrationStatus {
                n: EPSNetworkRegistrationUrcConfig::UrcPsmEnabled,
            }),
            "AT+CEREG=5"
        );
        assert_eq!(written(&GetEPSNetworkRegistrationStatus), "AT+CEREG?");
    }

    #[test]
    fn serialize_pdp_context() {
        assert_eq!(
            written(&SetPDPContextDefinition {
                cid: ContextId(0),
                pdp_type: "IP",
                apn: "telenor.smart",
            }),
            "AT+CGDCONT=0,\"IP\",\"telenor.smart\""
        );
    }

    #[test]
    fn deserialize_cereg_read() {
        let res: EPSNetworkRegistrationStatus = from_str(
            "+CEREG: 5,1,\"0A0B\",\"01020304\",7,0,0,\"00000110\",\"01000010\"\r\n",
        )
        .unwrap();

        assert_eq!(res.n, 5);
        assert_eq!(res.stat, 1);
        assert_eq!(res.tac, Some(String::try_from("0A0B").unwrap()));
        assert_eq!(res.ci, Some(String::try_from("01020304").unwrap()));
        assert_eq!(res.act, Some(7));
        assert_eq!(res.active_time, Some(String::try_from("00000110").unwrap()));
        assert_eq!(res.periodic_tau, Some(String::try_from("01000010").unwrap()));
    }

    #[test]
    fn deserialize_cereg_read_without_psm() {
        let res: EPSNetworkRegistrationStatus =
            from_str("+CEREG: 5,1,\"0A0B\",\"01020304\",7\r\n").unwrap();

        assert_eq!(res.stat, 1);
        assert_eq!(res.active_time, None);
        assert_eq!(res.periodic_tau, None);
    }
}
