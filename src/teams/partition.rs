use std::collections::VecDeque;

use super::types::{PartitionError, Team};
use crate::roster::{Participant, ScoredParticipant};
use crate::scoring::{calculate_score, Weights, DEFAULT_HIGH_SCORE_THRESHOLD};

/// Check a requested team size. Zero and negative sizes are rejected.
pub fn validate_team_size(team_size: i64) -> Result<usize, PartitionError> {
    usize::try_from(team_size)
        .ok()
        .filter(|&size| size > 0)
        .ok_or(PartitionError::InvalidConfiguration { team_size })
}

/// Score every participant, keeping roster order.
pub fn score_participants(
    participants: &[Participant],
    weights: &Weights,
) -> Vec<ScoredParticipant> {
    participants
        .iter()
        .map(|p| ScoredParticipant::new(p.clone(), calculate_score(p, weights).score))
        .collect()
}

/// Score every participant and sort descending by score.
///
/// The sort is stable, so participants with equal scores keep roster order.
/// The result satisfies the ordering precondition of [`partition_into_teams`].
pub fn rank_participants(
    participants: &[Participant],
    weights: &Weights,
) -> Vec<ScoredParticipant> {
    let mut scored = score_participants(participants, weights);

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}

/// Split a roster into teams using the default high-score threshold (7.0).
///
/// `roster` must already be sorted descending by score; see
/// [`rank_participants`].
pub fn partition_into_teams(
    roster: &[ScoredParticipant],
    team_size: usize,
) -> Result<Vec<Team>, PartitionError> {
    partition_with_threshold(roster, team_size, DEFAULT_HIGH_SCORE_THRESHOLD)
}

/// Split a score-sorted roster into teams of at most `team_size`.
///
/// Each team opens with the best remaining high scorer (score >= `threshold`)
/// if one is left, then fills from the low pool, falling back to the high
/// pool only once the low pool is empty. Every participant lands in exactly
/// one team; only the last team can be short.
pub fn partition_with_threshold(
    roster: &[ScoredParticipant],
    team_size: usize,
    threshold: f64,
) -> Result<Vec<Team>, PartitionError> {
    if team_size == 0 {
        return Err(PartitionError::InvalidConfiguration { team_size: 0 });
    }

    let (high, low): (Vec<_>, Vec<_>) = roster
        .iter()
        .cloned()
        .partition(|p| p.score >= threshold);
    let mut high = VecDeque::from(high);
    let mut low = VecDeque::from(low);

    tracing::debug!(high = high.len(), low = low.len(), team_size, "partitioning roster");

    let mut teams = Vec::new();
    while !high.is_empty() || !low.is_empty() {
        // team_size may far exceed what is left, so size from the pools
        let mut members = Vec::with_capacity(team_size.min(high.len() + low.len()));

        if let Some(leader) = high.pop_front() {
            members.push(leader);
        }

        while members.len() < team_size {
            match low.pop_front().or_else(|| high.pop_front()) {
                Some(next) => members.push(next),
                None => break,
            }
        }

        let team = Team { members };
        if !team.has_high_scorer(threshold) {
            tracing::warn!(team = teams.len() + 1, "team formed without a high scorer");
        }
        teams.push(team);
    }

    Ok(teams)
}

/// Full pipeline: validate the size, rank the participants, partition them.
pub fn form_teams(
    participants: &[Participant],
    weights: &Weights,
    team_size: i64,
    threshold: f64,
) -> Result<Vec<Team>, PartitionError> {
    let team_size = validate_team_size(team_size)?;
    let ranked = rank_participants(participants, weights);
    partition_with_threshold(&ranked, team_size, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scored(name: &str, score: f64) -> ScoredParticipant {
        ScoredParticipant::new(Participant::new(name, score, score, score, score), score)
    }

    fn roster(scores: &[f64]) -> Vec<ScoredParticipant> {
        scores
            .iter()
            .map(|&s| scored(&format!("p{}", s), s))
            .collect()
    }

    fn team_scores(teams: &[Team]) -> Vec<Vec<f64>> {
        teams
            .iter()
            .map(|t| t.members.iter().map(|m| m.score).collect())
            .collect()
    }

    #[test]
    fn test_high_scorer_leads_each_team() {
        let teams = partition_into_teams(&roster(&[9.0, 8.0, 7.0, 6.0, 5.0, 4.0]), 3).unwrap();
        assert_eq!(
            team_scores(&teams),
            vec![vec![9.0, 6.0, 5.0], vec![8.0, 4.0, 7.0]]
        );
    }

    #[test]
    fn test_no_high_scorers() {
        let teams = partition_into_teams(&roster(&[6.0, 5.0, 4.0, 3.0]), 2).unwrap();
        assert_eq!(team_scores(&teams), vec![vec![6.0, 5.0], vec![4.0, 3.0]]);
    }

    #[test]
    fn test_no_high_scorers_short_last_team() {
        let teams = partition_into_teams(&roster(&[6.0, 5.0, 4.0, 3.0, 2.0]), 2).unwrap();
        assert_eq!(
            team_scores(&teams),
            vec![vec![6.0, 5.0], vec![4.0, 3.0], vec![2.0]]
        );
    }

    #[test]
    fn test_surplus_high_scorers_fill_later_teams() {
        let teams =
            partition_into_teams(&roster(&[9.5, 9.0, 8.5, 8.0, 7.5, 7.0, 3.0]), 2).unwrap();
        assert_eq!(
            team_scores(&teams),
            vec![vec![9.5, 3.0], vec![9.0, 8.5], vec![8.0, 7.5], vec![7.0]]
        );
    }

    #[test]
    fn test_high_scorers_run_out() {
        let teams = partition_into_teams(&roster(&[8.0, 6.0, 5.0, 4.0, 3.0, 2.0]), 2).unwrap();
        assert_eq!(
            team_scores(&teams),
            vec![vec![8.0, 6.0], vec![5.0, 4.0], vec![3.0, 2.0]]
        );
        assert!(teams[0].has_high_scorer(7.0));
        assert!(!teams[1].has_high_scorer(7.0));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let teams = partition_into_teams(&roster(&[7.0, 6.99, 6.98]), 1).unwrap();
        assert_eq!(team_scores(&teams), vec![vec![7.0], vec![6.99], vec![6.98]]);

        let teams = partition_into_teams(&roster(&[7.0, 6.9, 6.8, 6.7]), 2).unwrap();
        assert_eq!(team_scores(&teams), vec![vec![7.0, 6.9], vec![6.8, 6.7]]);
    }

    #[test]
    fn test_single_participant() {
        for size in [1, 2, 5] {
            let teams = partition_into_teams(&roster(&[3.0]), size).unwrap();
            assert_eq!(teams.len(), 1);
            assert_eq!(teams[0].len(), 1);
        }
    }

    #[test]
    fn test_team_size_larger_than_roster() {
        let teams = partition_into_teams(&roster(&[9.0, 8.0, 5.0]), 10).unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(team_scores(&teams), vec![vec![9.0, 5.0, 8.0]]);
    }

    #[test]
    fn test_huge_team_size_gives_one_short_team() {
        let teams = partition_into_teams(&roster(&[5.0]), usize::MAX).unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].len(), 1);

        let teams = partition_into_teams(&roster(&[9.0, 5.0]), 1 << 40).unwrap();
        assert_eq!(team_scores(&teams), vec![vec![9.0, 5.0]]);
    }

    #[test]
    fn test_form_teams_huge_size() {
        let participants = vec![Participant::new("a", 5.0, 5.0, 5.0, 5.0)];
        let teams = form_teams(&participants, &Weights::default(), i64::MAX, 7.0).unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].len(), 1);
    }

    #[test]
    fn test_score_participants_keeps_roster_order() {
        let participants = vec![
            Participant::new("low", 2.0, 2.0, 2.0, 2.0),
            Participant::new("high", 9.0, 9.0, 9.0, 9.0),
        ];
        let scored = score_participants(&participants, &Weights::default());
        let names: Vec<_> = scored.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["low", "high"]);
        assert_eq!(scored[1].score, 9.0);
    }

    #[test]
    fn test_empty_roster() {
        let teams = partition_into_teams(&[], 3).unwrap();
        assert!(teams.is_empty());
    }

    #[test]
    fn test_zero_team_size_rejected() {
        let err = partition_into_teams(&roster(&[9.0]), 0).unwrap_err();
        assert_eq!(err, PartitionError::InvalidConfiguration { team_size: 0 });
    }

    #[test]
    fn test_validate_team_size() {
        assert_eq!(validate_team_size(3), Ok(3));
        assert_eq!(
            validate_team_size(0),
            Err(PartitionError::InvalidConfiguration { team_size: 0 })
        );
        assert_eq!(
            validate_team_size(-2),
            Err(PartitionError::InvalidConfiguration { team_size: -2 })
        );
    }

    #[test]
    fn test_custom_threshold() {
        let teams = partition_with_threshold(&roster(&[6.0, 5.0, 4.0, 3.0]), 2, 5.0).unwrap();
        // high = [6, 5], low = [4, 3]
        assert_eq!(team_scores(&teams), vec![vec![6.0, 4.0], vec![5.0, 3.0]]);
    }

    #[test]
    fn test_rank_participants_sorts_descending() {
        let participants = vec![
            Participant::new("low", 2.0, 2.0, 2.0, 2.0),
            Participant::new("high", 9.0, 9.0, 9.0, 9.0),
            Participant::new("mid", 5.0, 5.0, 5.0, 5.0),
        ];
        let ranked = rank_participants(&participants, &Weights::default());
        let names: Vec<_> = ranked.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_participants_ties_keep_roster_order() {
        let participants = vec![
            Participant::new("first", 5.0, 5.0, 5.0, 5.0),
            Participant::new("second", 5.0, 5.0, 5.0, 5.0),
            Participant::new("third", 5.0, 5.0, 5.0, 5.0),
        ];
        let ranked = rank_participants(&participants, &Weights::default());
        let names: Vec<_> = ranked.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_form_teams_pipeline() {
        let participants = vec![
            Participant::new("c", 4.0, 4.0, 4.0, 4.0),
            Participant::new("a", 9.0, 9.0, 9.0, 9.0),
            Participant::new("b", 6.0, 6.0, 6.0, 6.0),
            Participant::new("d", 8.0, 8.0, 8.0, 8.0),
        ];
        let teams = form_teams(&participants, &Weights::default(), 2, 7.0).unwrap();
        let names: Vec<Vec<_>> = teams
            .iter()
            .map(|t| t.members.iter().map(|m| m.name()).collect())
            .collect();
        assert_eq!(names, vec![vec!["a", "b"], vec!["d", "c"]]);
    }

    #[test]
    fn test_form_teams_rejects_negative_size() {
        let participants = vec![Participant::new("a", 9.0, 9.0, 9.0, 9.0)];
        assert!(form_teams(&participants, &Weights::default(), -1, 7.0).is_err());
    }

    fn sorted_scores() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(0.0f64..10.0, 0..40).prop_map(|mut v| {
            v.sort_by(|a, b| b.partial_cmp(a).unwrap());
            v
        })
    }

    proptest! {
        #[test]
        fn prop_every_participant_placed_once(scores in sorted_scores(), size in 1usize..8) {
            let input = roster(&scores);
            let teams = partition_into_teams(&input, size).unwrap();

            let mut placed: Vec<f64> = teams
                .iter()
                .flat_map(|t| t.members.iter().map(|m| m.score))
                .collect();
            let mut expected = scores.clone();
            placed.sort_by(|a, b| a.partial_cmp(b).unwrap());
            expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
            prop_assert_eq!(placed, expected);
        }

        #[test]
        fn prop_only_last_team_short(scores in sorted_scores(), size in 1usize..8) {
            let teams = partition_into_teams(&roster(&scores), size).unwrap();

            prop_assert_eq!(teams.is_empty(), scores.is_empty());
            for (i, team) in teams.iter().enumerate() {
                prop_assert!(!team.is_empty());
                prop_assert!(team.len() <= size);
                if i + 1 < teams.len() {
                    prop_assert_eq!(team.len(), size);
                }
            }
        }

        #[test]
        fn prop_high_scorers_spread_first(scores in sorted_scores(), size in 1usize..8) {
            let teams = partition_into_teams(&roster(&scores), size).unwrap();
            let high_count = scores.iter().filter(|&&s| s >= 7.0).count();

            for team in teams.iter().take(high_count) {
                prop_assert!(team.members[0].score >= 7.0);
            }
        }
    }
}
