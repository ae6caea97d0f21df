pub mod attach;
pub mod control;
pub mod gate;
pub mod urc_handler;

pub use attach::{AttachOutcome, AttachSequencer, AttachState};
pub use control::LinkControl;
pub use gate::{GateOutcome, NotificationGate};
