//! Argument and parameter types used by Mobile termination control Commands
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Functionality {
    /// Power off and store settings to NVM
    PowerOff = 0,
    /// Normal mode: full functionality, RF on
    Normal = 1,
    /// Offline mode: RF off, settings kept
    Offline = 4,
}
