//! ### 7 - Network service

pub mod types;

use atat::atat_derive::AtatCmd;
use types::{OperatorFormat, OperatorSelectionMode};

use super::NoResponse;

/// 7.3 PLMN selection +COPS
///
/// Forces an attempt to select and register with the GSM/UMTS/EPS network
/// operator, that can be chosen in the list of network operators returned by
/// the test command. With <mode>=1 the modem is locked to <oper> and will not
/// register with any other PLMN.
#[derive(Clone, AtatCmd)]
#[at_cmd("+COPS", NoResponse, timeout_ms = 180000)]
pub struct SetOperatorSelection<'a> {
    #[at_arg(position = 0)]
    pub mode: OperatorSelectionMode,
    #[at_arg(position = 1)]
    pub format: OperatorFormat,
    #[at_arg(position = 2, len = 6)]
    pub oper: &'a str,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::written;

    #[test]
    fn serialize_plmn_lock() {
        assert_eq!(
            written(&SetOperatorSelection {
                mode: OperatorSelectionMode::Manual,
                format: OperatorFormat::Numeric,
                oper: "24201",
            }),
            "AT+COPS=1,2,\"24201\""
        );
    }
}
