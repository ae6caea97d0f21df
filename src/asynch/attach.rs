use core::pin::pin;

use atat::{asynch::AtatClient, AtatCmd};
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::{
    command::{
        mobile_control::{types::Functionality, SetModuleFunctionality},
        network_service::{
            types::{OperatorFormat, OperatorSelectionMode},
            SetOperatorSelection,
        },
        power_saving::{types::EdrxMode, SetEdrxSetting},
        psn::{
            types::EPSNetworkRegistrationUrcConfig, SetEPSNetworkRegistrationStatus,
            SetPDNAuthentication, SetPDPContextDefinition,
        },
        system_features::{
            types::{BandLockOperation, PcoMode, TraceOperation, TraceSetId},
            SetBandLock, SetModemTrace, SetPcoMode,
        },
    },
    config::{Config, SystemMode},
    error::Error,
    traits::{UrcSource, UrcStream},
};

use super::{
    gate::{GateOutcome, NotificationGate},
    urc_handler::RegistrationHandler,
};

type Gate = NotificationGate<CriticalSectionRawMutex>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttachState {
    #[default]
    Init,
    /// Configuration commands are being sent. A successful `configure()`
    /// leaves the sequencer here until `attach()` starts.
    Configuring,
    AwaitingRegistration,
    /// Waiting for registration with the fallback system mode.
    Retrying,
    Registered,
    Failed,
}

/// Result of a single attach attempt.
#[derive(Debug, PartialEq)]
pub enum AttachOutcome {
    Registered,
    TimedOut,
    TransportError(atat::Error),
}

/// Runs the configuration commands and the attach procedure.
///
/// A sequencer borrows the AT client mutably, so only one attach can be in
/// flight per client.
pub struct AttachSequencer<'s, 'c, AT: AtatClient, U: UrcSource> {
    at_client: &'s mut AT,
    urc_source: &'s U,
    config: &'s Config<'c>,
    state: AttachState,
}

impl<'s, 'c, AT: AtatClient, U: UrcSource> AttachSequencer<'s, 'c, AT, U> {
    pub fn new(at_client: &'s mut AT, urc_source: &'s U, config: &'s Config<'c>) -> Self {
        Self {
            at_client,
            urc_source,
            config,
            state: AttachState::Init,
        }
    }

    pub fn state(&self) -> AttachState {
        self.state
    }

    async fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        self.at_client.send_retry(cmd).await.map_err(|e| {
            error!("Command failed: {:?}", e);
            e
        })
    }

    /// Send the one-shot configuration commands enabled in the config.
    ///
    /// Stops at the first failing command. Commands already sent are not
    /// undone.
    pub async fn configure(&mut self) -> Result<(), Error> {
        self.state = AttachState::Configuring;

        let res = self.send_configuration().await;
        if res.is_err() {
            self.state = AttachState::Failed;
        }
        res
    }

    async fn send_configuration(&mut self) -> Result<(), Error> {
        let config = self.config;

        if config.edrx_on_init {
            self.send(&SetEdrxSetting {
                mode: EdrxMode::Enable,
                act_type: config.edrx.act_type,
                edrx_value: config.edrx.value,
            })
            .await?;
        }

        if config.modem_trace {
            self.send(&SetModemTrace {
                operation: TraceOperation::Activate,
                set_id: TraceSetId::LteAndIp,
            })
            .await?;
        }

        self.send(&SetEPSNetworkRegistrationStatus {
            n: EPSNetworkRegistrationUrcConfig::UrcPsmEnabled,
        })
        .await?;

        // Band and PLMN locks are volatile and must be set before every
        // activation
        if let Some(mask) = config.band_lock {
            self.send(&SetBandLock {
                operation: BandLockOperation::Volatile,
                mask,
            })
            .await?;
        }

        if let Some(plmn) = config.plmn_lock {
            self.send(&SetOperatorSelection {
                mode: OperatorSelectionMode::Manual,
                format: OperatorFormat::Numeric,
                oper: plmn,
            })
            .await?;
        }

        if config.legacy_pco {
            self.send(&SetPcoMode {
                mode: PcoMode::Legacy,
            })
            .await?;
            info!("Using legacy LTE PCO mode");
        }

        if let Some(ctx) = config.pdp_context {
            self.send(&SetPDPContextDefinition {
                cid: ctx.cid,
                pdp_type: ctx.pdp_type,
                apn: ctx.apn,
            })
            .await?;
            info!("PDP context {}: {} {}", ctx.cid.0, ctx.pdp_type, ctx.apn);
        }

        if let Some(auth) = config.pdn_auth {
            self.send(&SetPDNAuthentication {
                cid: auth.cid,
                auth_prot: auth.protocol,
                username: auth.username,
                password: auth.password,
            })
            .await?;
            info!("PDN auth for context {}: {:?}", auth.cid.0, auth.protocol);
        }

        Ok(())
    }

    /// Attach with the preferred system mode, retrying once with the fallback
    /// mode if enabled.
    ///
    /// The registration handler is subscribed for the duration of this call
    /// only.
    pub async fn attach(&mut self) -> Result<(), Error> {
        let gate = Gate::new();
        gate.reset();

        let urc_source = self.urc_source;
        let subscription = match urc_source.subscribe() {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to install registration handler: {:?}", e);
                self.state = AttachState::Failed;
                return Err(e);
            }
        };
        let mut handler = RegistrationHandler::new(subscription, &gate);

        let preference = self.config.network_mode.preference();
        let mut mode = preference.preferred;
        self.state = AttachState::AwaitingRegistration;

        let res = loop {
            match self.attempt(&mode, &gate, &mut handler).await {
                AttachOutcome::Registered => break Ok(()),
                AttachOutcome::TransportError(e) => break Err(Error::Atat(e)),
                AttachOutcome::TimedOut => {
                    info!("Network connection attempt timed out");

                    if !self.config.use_fallback || self.state == AttachState::Retrying {
                        break Err(Error::RegistrationTimeout);
                    }

                    if let Err(e) = self
                        .send(&SetModuleFunctionality {
                            fun: Functionality::Offline,
                        })
                        .await
                    {
                        break Err(Error::Atat(e));
                    }

                    info!("Using fallback network mode");
                    mode = preference.fallback;
                    self.state = AttachState::Retrying;
                }
            }
        };

        drop(handler);

        self.state = match res {
            Ok(()) => AttachState::Registered,
            Err(_) => AttachState::Failed,
        };
        res
    }

    async fn attempt<S: UrcStream>(
        &mut self,
        mode: &SystemMode,
        gate: &Gate,
        handler: &mut RegistrationHandler<'_, S, CriticalSectionRawMutex>,
    ) -> AttachOutcome {
        debug!("Network mode: {:?}", mode);

        if let Err(e) = self.send(&mode.command()).await {
            return AttachOutcome::TransportError(e);
        }

        if let Err(e) = self
            .send(&SetModuleFunctionality {
                fun: Functionality::Normal,
            })
            .await
        {
            return AttachOutcome::TransportError(e);
        }

        let mut wait = pin!(gate.wait(self.config.network_timeout));
        loop {
            match select(wait.as_mut(), handler.next_urc()).await {
                Either::First(GateOutcome::Registered) => return AttachOutcome::Registered,
                Either::First(GateOutcome::TimedOut) => return AttachOutcome::TimedOut,
                Either::Second(urc) => handler.handle_urc(urc),
            }
        }
    }
}
