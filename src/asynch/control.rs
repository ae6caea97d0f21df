use atat::{asynch::AtatClient, AtatCmd};

use crate::{
    command::{
        mobile_control::{types::Functionality, SetModuleFunctionality},
        power_saving::{
            types::{EdrxMode, PsmMode},
            DisablePowerSavingMode, ResetEdrxSetting, SetEdrxSetting, SetPowerSavingMode,
        },
        psn::{
            types::EPSNetworkRegistrationUrcConfig, GetEPSNetworkRegistrationStatus,
            SetEPSNetworkRegistrationStatus,
        },
    },
    config::Config,
    error::Error,
    registration::{PsmTimers, Status},
    traits::UrcSource,
};

use super::attach::{AttachSequencer, AttachState};

/// LTE link control for one modem.
///
/// All operations take `&mut self`, so concurrent attaches on the same link
/// are ruled out at compile time.
pub struct LinkControl<'c, AT: AtatClient, U: UrcSource> {
    at_client: AT,
    urc_source: &'c U,
    config: Config<'c>,
    attach_state: AttachState,
}

impl<'c, AT: AtatClient, U: UrcSource> LinkControl<'c, AT, U> {
    pub fn new(at_client: AT, urc_source: &'c U, config: Config<'c>) -> Self {
        Self {
            at_client,
            urc_source,
            config,
            attach_state: AttachState::Init,
        }
    }

    pub fn config(&self) -> &Config<'c> {
        &self.config
    }

    /// State the last `init`/`connect` ended in.
    pub fn attach_state(&self) -> AttachState {
        self.attach_state
    }

    /// Send the configuration commands enabled in [`Config`].
    pub async fn init(&mut self) -> Result<(), Error> {
        let mut sequencer =
            AttachSequencer::new(&mut self.at_client, self.urc_source, &self.config);
        let res = sequencer.configure().await;
        self.attach_state = sequencer.state();
        res
    }

    /// Attach to the network, falling back to the alternate system mode once
    /// if enabled.
    pub async fn connect(&mut self) -> Result<(), Error> {
        let mut sequencer =
            AttachSequencer::new(&mut self.at_client, self.urc_source, &self.config);
        let res = sequencer.attach().await;
        self.attach_state = sequencer.state();
        res
    }

    pub async fn init_and_connect(&mut self) -> Result<(), Error> {
        self.init().await?;
        self.connect().await
    }

    pub async fn offline(&mut self) -> Result<(), Error> {
        self.set_functionality(Functionality::Offline).await
    }

    pub async fn power_off(&mut self) -> Result<(), Error> {
        self.set_functionality(Functionality::PowerOff).await
    }

    pub async fn normal(&mut self) -> Result<(), Error> {
        self.set_functionality(Functionality::Normal).await
    }

    async fn set_functionality(&mut self, fun: Functionality) -> Result<(), Error> {
        self.send(&SetModuleFunctionality { fun }).await?;
        Ok(())
    }

    /// Request PSM with the configured timers, or disable it.
    pub async fn psm_request(&mut self, enable: bool) -> Result<(), Error> {
        if enable {
            let psm = self.config.psm;
            self.send(&SetPowerSavingMode {
                mode: PsmMode::Enable,
                periodic_rau: None,
                gprs_ready_timer: None,
                periodic_tau: Some(psm.periodic_tau),
                active_time: Some(psm.active_time),
            })
            .await?;
        } else {
            self.send(&DisablePowerSavingMode {
                mode: PsmMode::Disable,
            })
            .await?;
        }
        Ok(())
    }

    /// Request eDRX with the configured value, or disable it.
    pub async fn edrx_request(&mut self, enable: bool) -> Result<(), Error> {
        if enable {
            let edrx = self.config.edrx;
            self.send(&SetEdrxSetting {
                mode: EdrxMode::Enable,
                act_type: edrx.act_type,
                edrx_value: edrx.value,
            })
            .await?;
        } else {
            self.send(&ResetEdrxSetting {
                mode: EdrxMode::DisableAndReset,
            })
            .await?;
        }
        Ok(())
    }

    /// Read the PSM timers granted by the network.
    pub async fn read_psm_timers(&mut self) -> Result<PsmTimers, Error> {
        self.send(&SetEPSNetworkRegistrationStatus {
            n: EPSNetworkRegistrationUrcConfig::UrcPsmEnabled,
        })
        .await?;

        let status = match self.send(&GetEPSNetworkRegistrationStatus).await {
            Ok(status) => status,
            Err(atat::Error::Parse) => return Err(Error::Parse),
            Err(e) => return Err(e.into()),
        };

        debug!("EPS registration status: {:?}", Status::from(&status));

        let timers = PsmTimers::try_from(&status)?;
        debug!(
            "PSM timers: TAU {} s, active time {} s",
            timers.tau_seconds,
            timers.active_time_seconds
        );
        Ok(timers)
    }

    /// Send an AT command to the modem. Useful for configuration this driver
    /// does not cover, but it may interfere with the link state it manages.
    pub async fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        self.at_client.send_retry(cmd).await.map_err(|e| {
            error!("Command failed: {:?}", e);
            e
        })
    }
}
