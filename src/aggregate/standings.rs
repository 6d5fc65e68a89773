use ahash::RandomState;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

use crate::formats::{
    CompetitionResult, GroupedCompetitionResult, PlayerRef, TeamRef, Verdict,
    calculate_grouped_results,
};
use crate::model::{
    AggregationConfig, CompetitionConfig, CompetitionInput, Group, LowestStrokesConfig,
    MatchWinsConfig, Participant, ParticipantType, StrokeBasis,
};
use crate::score::assign_ranks;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundCompetitionData {
    pub round_id: String,
    #[serde(default)]
    pub round_number: Option<u32>,
    /// Used for any competition input that carries no groups of its own.
    #[serde(default)]
    pub groups: Vec<Group>,
    pub competition_inputs: Vec<CompetitionInput>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContributorBonusAward {
    pub round_id: String,
    #[serde(default)]
    pub round_number: Option<u32>,
    pub round_participant_id: String,
    pub bonus_points: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundValue {
    pub round_id: String,
    pub round_number: Option<u32>,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandingEntry {
    /// Person id for individuals, tournament team id for teams.
    pub entity_id: String,
    pub display_name: String,
    pub total: f64,
    pub rounds_played: u32,
    pub per_round: Vec<RoundValue>,
    pub rank: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Higher is better.
    Desc,
    Asc,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResult {
    pub leaderboard: Vec<StandingEntry>,
    pub sort_direction: SortDirection,
}

/// Running totals in first-seen order.
#[derive(Default)]
struct Tally {
    entries: Vec<StandingEntry>,
    index: HashMap<String, usize, RandomState>,
}

impl Tally {
    fn add(
        &mut self,
        entity_id: &str,
        display_name: &str,
        round: &RoundCompetitionData,
        value: f64,
    ) {
        let idx = match self.index.get(entity_id) {
            Some(&idx) => idx,
            None => {
                self.entries.push(StandingEntry {
                    entity_id: entity_id.to_string(),
                    display_name: display_name.to_string(),
                    total: 0.0,
                    rounds_played: 0,
                    per_round: Vec::new(),
                    rank: 0,
                });
                self.index.insert(entity_id.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[idx];
        entry.total += value;
        match entry.per_round.last_mut() {
            Some(last) if last.round_id == round.round_id => last.value += value,
            _ => {
                entry.rounds_played += 1;
                entry.per_round.push(RoundValue {
                    round_id: round.round_id.clone(),
                    round_number: round.round_number,
                    value,
                });
            }
        }
    }

    fn finish(mut self, sort_direction: SortDirection) -> StandingsResult {
        self.entries.sort_by(|a, b| match sort_direction {
            SortDirection::Desc => b.total.total_cmp(&a.total),
            SortDirection::Asc => a.total.total_cmp(&b.total),
        });
        assign_ranks(&mut self.entries, |e| e.total, |e, rank| e.rank = rank);
        StandingsResult {
            leaderboard: self.entries,
            sort_direction,
        }
    }
}

/// Tournament standings under the configured aggregation method.
///
/// A competition that fails to calculate is logged and skipped, so one bad
/// round never sinks the table.
#[must_use]
pub fn calculate_standings(
    config: &AggregationConfig,
    rounds: &[RoundCompetitionData],
    participant_type: ParticipantType,
    contributor_bonuses: &[ContributorBonusAward],
) -> StandingsResult {
    match config {
        AggregationConfig::SumStableford => {
            aggregate_sum_stableford(rounds, participant_type, contributor_bonuses)
        }
        AggregationConfig::LowestStrokes(c) => {
            aggregate_lowest_strokes(rounds, participant_type, c)
        }
        AggregationConfig::MatchWins(c) => aggregate_match_wins(rounds, participant_type, c),
    }
}

fn safe_calculate<'a>(
    round: &RoundCompetitionData,
    input: &'a CompetitionInput,
) -> Option<GroupedCompetitionResult> {
    let input: Cow<'a, CompetitionInput> = if input.groups.is_empty() && !round.groups.is_empty() {
        let mut with_groups = input.clone();
        with_groups.groups.clone_from(&round.groups);
        Cow::Owned(with_groups)
    } else {
        Cow::Borrowed(input)
    };

    match calculate_grouped_results(&input) {
        Ok(result) => Some(result),
        Err(e) => {
            warn!(
                "standings: skipped competition {} in round {}: {e}",
                input.competition.id, round.round_id
            );
            None
        }
    }
}

fn participants_by_id(input: &CompetitionInput) -> HashMap<&str, &Participant, RandomState> {
    input
        .participants
        .iter()
        .map(|p| (p.round_participant_id.as_str(), p))
        .collect()
}

fn individual_only(participant_type: ParticipantType, method: &str) -> bool {
    if participant_type == ParticipantType::Team {
        warn!("standings: {method} only applies to individuals");
        return false;
    }
    true
}

fn aggregate_sum_stableford(
    rounds: &[RoundCompetitionData],
    participant_type: ParticipantType,
    contributor_bonuses: &[ContributorBonusAward],
) -> StandingsResult {
    let mut tally = Tally::default();
    if !individual_only(participant_type, "sum_stableford") {
        return tally.finish(SortDirection::Desc);
    }

    for round in rounds {
        let Some(input) = round
            .competition_inputs
            .iter()
            .find(|i| matches!(i.competition.config, CompetitionConfig::Stableford(_)))
        else {
            debug!("standings: round {} has no stableford competition", round.round_id);
            continue;
        };
        let Some(grouped) = safe_calculate(round, input) else {
            continue;
        };

        for result in grouped.results() {
            if let CompetitionResult::Stableford(stableford) = result {
                for entry in &stableford.leaderboard {
                    tally.add(
                        &entry.person_id,
                        &entry.display_name,
                        round,
                        f64::from(entry.total_points),
                    );
                }
            }
        }

        let by_id = participants_by_id(input);
        for bonus in contributor_bonuses.iter().filter(|b| b.round_id == round.round_id) {
            match by_id.get(bonus.round_participant_id.as_str()) {
                Some(p) => tally.add(&p.person_id, &p.display_name, round, bonus.bonus_points),
                None => debug!(
                    "standings: bonus for unknown participant {} in round {}",
                    bonus.round_participant_id, round.round_id
                ),
            }
        }
    }

    tally.finish(SortDirection::Desc)
}

fn aggregate_lowest_strokes(
    rounds: &[RoundCompetitionData],
    participant_type: ParticipantType,
    config: &LowestStrokesConfig,
) -> StandingsResult {
    let mut tally = Tally::default();
    if !individual_only(participant_type, "lowest_strokes") {
        return tally.finish(SortDirection::Asc);
    }

    for round in rounds {
        let Some(input) = round
            .competition_inputs
            .iter()
            .find(|i| matches!(i.competition.config, CompetitionConfig::StrokePlay(_)))
        else {
            debug!("standings: round {} has no stroke play competition", round.round_id);
            continue;
        };
        let Some(grouped) = safe_calculate(round, input) else {
            continue;
        };

        for result in grouped.results() {
            let CompetitionResult::StrokePlay(stroke_play) = result else {
                continue;
            };
            for entry in stroke_play.leaderboard.iter().filter(|e| e.holes_completed > 0) {
                let value = match config.scoring_basis {
                    StrokeBasis::GrossStrokes => entry.gross_total,
                    StrokeBasis::NetStrokes => entry.net_total,
                };
                tally.add(&entry.person_id, &entry.display_name, round, f64::from(value));
            }
        }
    }

    tally.finish(SortDirection::Asc)
}

/// Points one side takes from a match, with the aggregation's own
/// win/half values in place of the match's when set.
fn match_points(
    winner: Option<Verdict>,
    side: Verdict,
    awarded: f64,
    config: &MatchWinsConfig,
) -> f64 {
    match winner {
        Some(Verdict::Halved) => config.points_per_half.unwrap_or(awarded),
        Some(w) if w == side => config.points_per_win.unwrap_or(awarded),
        _ => awarded,
    }
}

fn team_key(team: &TeamRef) -> &str {
    team.tournament_team_id.as_deref().unwrap_or(&team.team_id)
}

fn credit_player(
    tally: &mut Tally,
    round: &RoundCompetitionData,
    input: &CompetitionInput,
    by_id: &HashMap<&str, &Participant, RandomState>,
    participant_type: ParticipantType,
    player: &PlayerRef,
    points: f64,
) {
    match participant_type {
        ParticipantType::Individual => {
            let person_id = by_id
                .get(player.round_participant_id.as_str())
                .map_or(player.round_participant_id.as_str(), |p| p.person_id.as_str());
            tally.add(person_id, &player.display_name, round, points);
        }
        ParticipantType::Team => {
            match input.teams.iter().find(|t| t.has_member(&player.round_participant_id)) {
                Some(team) => tally.add(team.standings_id(), &team.name, round, points),
                None => debug!(
                    "standings: {} is not on a team in round {}",
                    player.round_participant_id, round.round_id
                ),
            }
        }
    }
}

fn aggregate_match_wins(
    rounds: &[RoundCompetitionData],
    participant_type: ParticipantType,
    config: &MatchWinsConfig,
) -> StandingsResult {
    let mut tally = Tally::default();

    for round in rounds {
        for input in &round.competition_inputs {
            let Some(grouped) = safe_calculate(round, input) else {
                continue;
            };
            let by_id = participants_by_id(input);

            for result in grouped.results() {
                match result {
                    CompetitionResult::MatchPlay(match_play) => {
                        for m in &match_play.matches {
                            let s = &m.status;
                            let a = match_points(s.winner, Verdict::A, s.points_a, config);
                            let b = match_points(s.winner, Verdict::B, s.points_b, config);
                            credit_player(
                                &mut tally,
                                round,
                                input,
                                &by_id,
                                participant_type,
                                &m.player_a,
                                a,
                            );
                            credit_player(
                                &mut tally,
                                round,
                                input,
                                &by_id,
                                participant_type,
                                &m.player_b,
                                b,
                            );
                        }
                    }
                    CompetitionResult::BestBall(best_ball)
                        if participant_type == ParticipantType::Team =>
                    {
                        for m in &best_ball.matches {
                            let s = &m.status;
                            let a = match_points(s.winner, Verdict::A, s.points_a, config);
                            let b = match_points(s.winner, Verdict::B, s.points_b, config);
                            tally.add(team_key(&m.team_a), &m.team_a.name, round, a);
                            tally.add(team_key(&m.team_b), &m.team_b.name, round, b);
                        }
                    }
                    CompetitionResult::HiLo(hi_lo) if participant_type == ParticipantType::Team => {
                        for m in &hi_lo.matches {
                            let a = match_points(m.winner, Verdict::A, m.points_a, config);
                            let b = match_points(m.winner, Verdict::B, m.points_b, config);
                            tally.add(team_key(&m.team_a), &m.team_a.name, round, a);
                            tally.add(team_key(&m.team_b), &m.team_b.name, round, b);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    tally.finish(SortDirection::Desc)
}
