use embassy_time::Duration;

use crate::command::psn::{responses::EPSNetworkRegistrationStatus, urc::EPSNetworkRegistration};
use crate::error::Error;
use crate::timer::{decode_timer, TimerKind, TIMER_DISABLED};

/// EPS registration status as reported by `+CEREG`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    #[default]
    None,
    NotRegistering,
    Home,
    Searching,
    Denied,
    OutOfCoverage,
    Roaming,
}

impl Status {
    /// Registered, either on the home network or roaming.
    pub fn is_registered(self) -> bool {
        matches!(self, Self::Home | Self::Roaming)
    }
}

impl From<u8> for Status {
    fn from(v: u8) -> Self {
        match v {
            0 => Self::NotRegistering,
            1 => Self::Home,
            2 => Self::Searching,
            3 => Self::Denied,
            4 => Self::OutOfCoverage,
            5 => Self::Roaming,
            _ => Self::None,
        }
    }
}

/// Convert the 3GPP registration status from a CEREG URC to [`Status`].
impl From<&EPSNetworkRegistration> for Status {
    fn from(v: &EPSNetworkRegistration) -> Self {
        Self::from(v.stat)
    }
}

impl From<&EPSNetworkRegistrationStatus> for Status {
    fn from(v: &EPSNetworkRegistrationStatus) -> Self {
        Self::from(v.stat)
    }
}

/// PSM timers granted by the network.
///
/// A value of [`TIMER_DISABLED`] means the network deactivated the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PsmTimers {
    /// Periodic TAU (T3412 extended) in seconds
    pub tau_seconds: i32,
    /// Active time (T3324) in seconds
    pub active_time_seconds: i32,
}

impl PsmTimers {
    pub fn periodic_tau(&self) -> Option<Duration> {
        seconds(self.tau_seconds)
    }

    pub fn active_time(&self) -> Option<Duration> {
        seconds(self.active_time_seconds)
    }
}

fn seconds(value: i32) -> Option<Duration> {
    if value == TIMER_DISABLED {
        None
    } else {
        Some(Duration::from_secs(value as u64))
    }
}

impl TryFrom<&EPSNetworkRegistrationStatus> for PsmTimers {
    type Error = Error;

    fn try_from(v: &EPSNetworkRegistrationStatus) -> Result<Self, Self::Error> {
        let (Some(active_time), Some(periodic_tau)) = (&v.active_time, &v.periodic_tau) else {
            return Err(Error::Parse);
        };

        Ok(Self {
            tau_seconds: decode_timer(TimerKind::PeriodicTau, periodic_tau)?,
            active_time_seconds: decode_timer(TimerKind::ActiveTime, active_time)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use heapless::String;

    fn status(active_time: Option<&str>, periodic_tau: Option<&str>) -> EPSNetworkRegistrationStatus {
        EPSNetworkRegistrationStatus {
            n: 5,
            stat: 1,
            tac: None,
            ci: None,
            act: None,
            cause_type: None,
            reject_cause: None,
            active_time: active_time.map(|s| String::try_from(s).unwrap()),
            periodic_tau: periodic_tau.map(|s| String::try_from(s).unwrap()),
        }
    }

    #[test]
    fn registered_only_home_and_roaming() {
        for stat in 0..=10u8 {
            assert_eq!(
                Status::from(stat).is_registered(),
                stat == 1 || stat == 5,
                "stat {}",
                stat
            );
        }
    }

    #[test]
    fn status_from_read_response() {
        assert_eq!(Status::from(&status(None, None)), Status::Home);

        let roaming = EPSNetworkRegistrationStatus {
            stat: 5,
            ..status(None, None)
        };
        assert!(Status::from(&roaming).is_registered());

        let searching = EPSNetworkRegistrationStatus {
            stat: 2,
            ..status(None, None)
        };
        assert_eq!(Status::from(&searching), Status::Searching);
        assert!(!Status::from(&searching).is_registered());
    }

    #[test]
    fn timers_from_status() {
        let timers = PsmTimers::try_from(&status(Some("00000110"), Some("01000010"))).unwrap();
        assert_eq!(
            timers,
            PsmTimers {
                tau_seconds: 72000,
                active_time_seconds: 12,
            }
        );
        assert_eq!(timers.periodic_tau(), Some(Duration::from_secs(72000)));
        assert_eq!(timers.active_time(), Some(Duration::from_secs(12)));
    }

    #[test]
    fn deactivated_timer() {
        let timers = PsmTimers::try_from(&status(Some("11100000"), Some("01000010"))).unwrap();
        assert_eq!(timers.active_time_seconds, TIMER_DISABLED);
        assert_eq!(timers.active_time(), None);
    }

    #[test]
    fn missing_timer_is_parse_error() {
        assert_eq!(
            PsmTimers::try_from(&status(Some("00000110"), None)),
            Err(Error::Parse)
        );
        assert_eq!(
            PsmTimers::try_from(&status(None, Some("01000010"))),
            Err(Error::Parse)
        );
    }

    #[test]
    fn bad_encoding_propagates() {
        assert_eq!(
            PsmTimers::try_from(&status(Some("0000011"), Some("01000010"))),
            Err(Error::InvalidEncoding)
        );
    }
}
