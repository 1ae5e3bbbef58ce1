//! Interactive lookup session.
//!
//! The session is a two-state machine (`Prompting`, `Terminated`). Each pass
//! through `Prompting` reads one IP address, looks it up, renders the result and
//! offers an HTML export, then asks whether to continue.

mod input;
mod run;

pub use input::{is_affirmative, parse_ip_input, IpInput};
pub use run::{run_session, SessionReport, SessionState};
