#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod asynch;
pub mod command;
pub mod config;
pub mod error;
pub mod registration;
pub mod timer;
pub mod traits;

#[cfg(test)]
mod test_helpers;

pub use asynch::LinkControl;
pub use config::Config;
pub use error::Error;
pub use registration::PsmTimers;
