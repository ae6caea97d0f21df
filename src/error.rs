#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// A command could not be exchanged with the modem.
    Atat(atat::Error),

    /// No qualifying registration notification arrived before the last
    /// permitted wait expired.
    RegistrationTimeout,

    /// The `+CEREG` read response did not have the expected shape.
    Parse,

    /// A GPRS timer field did not hold a valid 8 bit binary string.
    InvalidEncoding,

    /// No free subscriber slot on the URC channel.
    SubscriberOverflow(embassy_sync::pubsub::Error),
}

impl From<atat::Error> for Error {
    fn from(e: atat::Error) -> Self {
        Self::Atat(e)
    }
}

impl From<embassy_sync::pubsub::Error> for Error {
    fn from(e: embassy_sync::pubsub::Error) -> Self {
        Self::SubscriberOverflow(e)
    }
}
