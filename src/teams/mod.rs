pub mod partition;
pub mod types;

pub use partition::{
    form_teams, partition_into_teams, partition_with_threshold, rank_participants,
    score_participants, validate_team_size,
};
pub use types::{PartitionError, Team};
