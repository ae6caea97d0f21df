use atat::UrcChannel;
use embassy_sync::{
    blocking_mutex::raw::RawMutex,
    pubsub::{PubSubChannel, Subscriber},
};

use crate::{command::Urc, error::Error};

/// A channel the registration handler can subscribe to for the duration of
/// one attach.
pub trait UrcSource {
    type Subscription<'a>: UrcStream
    where
        Self: 'a;

    fn subscribe(&self) -> Result<Self::Subscription<'_>, Error>;
}

#[allow(async_fn_in_trait)]
pub trait UrcStream {
    async fn next_urc(&mut self) -> Urc;
}

impl<const CAPACITY: usize, const SUBSCRIBERS: usize> UrcSource
    for UrcChannel<Urc, CAPACITY, SUBSCRIBERS>
{
    type Subscription<'a> = atat::UrcSubscription<'a, Urc, CAPACITY, SUBSCRIBERS> where Self: 'a;

    fn subscribe(&self) -> Result<Self::Subscription<'_>, Error> {
        UrcChannel::subscribe(self).map_err(|atat::urc_channel::Error::MaximumSubscribersReached| {
            Error::SubscriberOverflow(embassy_sync::pubsub::Error::MaximumSubscribersReached)
        })
    }
}

impl<M: RawMutex, const CAP: usize, const SUBS: usize, const PUBS: usize> UrcSource
    for PubSubChannel<M, Urc, CAP, SUBS, PUBS>
{
    type Subscription<'a> = Subscriber<'a, M, Urc, CAP, SUBS, PUBS> where Self: 'a;

    fn subscribe(&self) -> Result<Self::Subscription<'_>, Error> {
        Ok(self.subscriber()?)
    }
}

impl<M: RawMutex, const CAP: usize, const SUBS: usize, const PUBS: usize> UrcStream
    for Subscriber<'_, M, Urc, CAP, SUBS, PUBS>
{
    async fn next_urc(&mut self) -> Urc {
        self.next_message_pure().await
    }
}
