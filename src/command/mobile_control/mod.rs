//! ### 5 - Mobile termination control and status Commands

pub mod types;

use atat::atat_derive::AtatCmd;
use types::Functionality;

use super::NoResponse;

/// 8.2 Set phone functionality +CFUN
///
/// Selects the level of functionality <fun> in the MT. Switching to
/// [`Functionality::Normal`] starts the network attach in the currently
/// selected system mode; [`Functionality::Offline`] detaches and switches the
/// RF off while keeping the configuration.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CFUN", NoResponse, timeout_ms = 180000)]
pub struct SetModuleFunctionality {
    #[at_arg(position = 0)]
    pub fun: Functionality,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::written;

    #[test]
    fn serialize_functionality() {
        assert_eq!(
            written(&SetModuleFunctionality {
                fun: Functionality::Normal
            }),
            "AT+CFUN=1"
        );
        assert_eq!(
            written(&SetModuleFunctionality {
                fun: Functionality::Offline
            }),
            "AT+CFUN=4"
        );
        assert_eq!(
            written(&SetModuleFunctionality {
                fun: Functionality::PowerOff
            }),
            "AT+CFUN=0"
        );
    }
}
