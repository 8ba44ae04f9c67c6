pub mod input;
pub mod storage;
pub mod types;

pub use input::{parse_attribute, parse_participant};
pub use storage::{get_roster_path, load_roster, save_roster};
pub use types::{Participant, RosterState, ScoredParticipant};
