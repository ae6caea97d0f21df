use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::{command::Urc, registration::Status, traits::UrcStream};

use super::gate::NotificationGate;

/// Opens the gate on `+CEREG` reporting home or roaming registration.
///
/// Holding the handler keeps the URC subscription alive; dropping it
/// unsubscribes.
pub struct RegistrationHandler<'g, S: UrcStream, M: RawMutex> {
    subscription: S,
    gate: &'g NotificationGate<M>,
}

impl<'g, S: UrcStream, M: RawMutex> RegistrationHandler<'g, S, M> {
    pub fn new(subscription: S, gate: &'g NotificationGate<M>) -> Self {
        Self { subscription, gate }
    }

    pub async fn next_urc(&mut self) -> Urc {
        self.subscription.next_urc().await
    }

    pub fn handle_urc(&self, event: Urc) {
        match event {
            Urc::EPSNetworkRegistration(reg) => {
                let status = Status::from(&reg);
                debug!("EPS registration status: {:?}", status);
                if status.is_registered() {
                    self.gate.signal();
                }
            }
        }
    }
}
