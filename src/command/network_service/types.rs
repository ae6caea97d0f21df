//! Argument and parameter types used by Network service Commands and Responses
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum OperatorSelectionMode {
    Automatic = 0,
    Manual = 1,
    Deregister = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum OperatorFormat {
    Long = 0,
    Short = 1,
    /// MCC and MNC, e.g. "24201"
    Numeric = 2,
}
