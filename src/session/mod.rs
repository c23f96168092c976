//! Session state machine.
//!
//! - `state`: `Session`, its transitions and `ToggleOutcome`
//! - `draw`: the teacher's current question or word
//! - `view`: screen mode, open card, group statuses
//! - `snapshot`: serializable session view for renderers

pub mod draw;
pub mod snapshot;
pub mod state;
pub mod view;

pub use draw::Drawn;
pub use snapshot::{GroupSnapshot, SessionSnapshot};
pub use state::{Session, ToggleOutcome};
pub use view::{GroupStatus, Mode, View};
