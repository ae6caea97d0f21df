use embassy_time::Duration;

use crate::command::{
    power_saving::types::EdrxActType,
    psn::types::{AuthProtocol, ContextId},
    system_features::{types::ModeSupport, SetSystemMode},
};

/// Radio access technologies the modem is allowed to attach with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetworkMode {
    NbIot,
    NbIotGps,
    #[default]
    LteM,
    LteMGps,
}

impl NetworkMode {
    /// The mode to attach with first, and the one to fall back to if the
    /// first attach times out.
    pub const fn preference(self) -> RadioAccessPreference {
        let (lte_m, gnss) = match self {
            Self::NbIot => (false, false),
            Self::NbIotGps => (false, true),
            Self::LteM => (true, false),
            Self::LteMGps => (true, true),
        };

        RadioAccessPreference {
            preferred: SystemMode {
                lte_m,
                nb_iot: !lte_m,
                gnss,
            },
            fallback: SystemMode {
                lte_m: !lte_m,
                nb_iot: lte_m,
                gnss,
            },
        }
    }
}

/// One `%XSYSTEMMODE` selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemMode {
    pub lte_m: bool,
    pub nb_iot: bool,
    pub gnss: bool,
}

impl SystemMode {
    pub fn command(&self) -> SetSystemMode {
        SetSystemMode {
            lte_m: ModeSupport::from(self.lte_m),
            nb_iot: ModeSupport::from(self.nb_iot),
            gnss: ModeSupport::from(self.gnss),
            preference: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadioAccessPreference {
    pub preferred: SystemMode,
    pub fallback: SystemMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdrxConfig<'a> {
    pub act_type: EdrxActType,
    /// Requested eDRX value, 4 bit string
    pub value: &'a str,
}

/// Requested PSM timers, as 8 bit GPRS timer strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsmConfig<'a> {
    /// Requested periodic TAU (T3412 extended)
    pub periodic_tau: &'a str,
    /// Requested active time (T3324)
    pub active_time: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdpContext<'a> {
    pub cid: ContextId,
    pub pdp_type: &'a str,
    pub apn: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdnAuth<'a> {
    pub cid: ContextId,
    pub protocol: AuthProtocol,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
}

/// Link configuration, built once at startup.
///
/// Every optional configuration command is enabled by its field here; unset
/// options are simply not sent during `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config<'a> {
    pub network_mode: NetworkMode,
    /// Retry the attach once with the fallback mode on timeout.
    pub use_fallback: bool,
    /// How long to wait for registration on each attach attempt.
    pub network_timeout: Duration,

    pub edrx: EdrxConfig<'a>,
    /// Send the eDRX request as the first configuration command.
    pub edrx_on_init: bool,
    pub psm: PsmConfig<'a>,

    pub modem_trace: bool,
    /// Volatile band lock mask, rightmost character is band 1.
    pub band_lock: Option<&'a str>,
    /// Numeric PLMN to lock to, e.g. `"24201"`.
    pub plmn_lock: Option<&'a str>,
    pub legacy_pco: bool,
    pub pdp_context: Option<PdpContext<'a>>,
    pub pdn_auth: Option<PdnAuth<'a>>,
}

impl<'a> Config<'a> {
    pub const fn new() -> Self {
        Self {
            network_mode: NetworkMode::LteM,
            use_fallback: true,
            network_timeout: Duration::from_secs(600),
            edrx: EdrxConfig {
                act_type: EdrxActType::LteM,
                value: "1001",
            },
            edrx_on_init: false,
            psm: PsmConfig {
                periodic_tau: "00000011",
                active_time: "00100001",
            },
            modem_trace: false,
            band_lock: None,
            plmn_lock: None,
            legacy_pco: false,
            pdp_context: None,
            pdn_auth: None,
        }
    }
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::written;

    #[test]
    fn mode_pairs() {
        let pairs = [
            (NetworkMode::NbIot, "0,1,0,0", "1,0,0,0"),
            (NetworkMode::NbIotGps, "0,1,1,0", "1,0,1,0"),
            (NetworkMode::LteM, "1,0,0,0", "0,1,0,0"),
            (NetworkMode::LteMGps, "1,0,1,0", "0,1,1,0"),
        ];

        for (mode, preferred, fallback) in pairs {
            let pref = mode.preference();
            assert_eq!(
                written(&pref.preferred.command()),
                std::format!("AT%XSYSTEMMODE={}", preferred)
            );
            assert_eq!(
                written(&pref.fallback.command()),
                std::format!("AT%XSYSTEMMODE={}", fallback)
            );
        }
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.network_mode, NetworkMode::LteM);
        assert!(config.use_fallback);
        assert_eq!(config.network_timeout, Duration::from_secs(600));
        assert!(!config.edrx_on_init);
        assert_eq!(config.psm.periodic_tau, "00000011");
        assert_eq!(config.psm.active_time, "00100001");
        assert_eq!(config.band_lock, None);
        assert_eq!(config.plmn_lock, None);
    }
}
