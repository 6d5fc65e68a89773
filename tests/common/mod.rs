#![allow(dead_code)]

use rusty_golf_engine::model::{
    Competition, CompetitionConfig, CompetitionInput, GameDecision, Group, GroupScope, Hole,
    Participant, ResolvedScore, Team,
};

/// Par 4s with stroke index equal to the hole number.
pub fn holes(count: u32) -> Vec<Hole> {
    (1..=count)
        .map(|n| Hole {
            hole_number: n,
            par: 4,
            stroke_index: i32::try_from(n).unwrap(),
        })
        .collect()
}

pub fn player(id: &str, handicap: f64) -> Participant {
    let name = format!("Player{}", id.to_uppercase());
    Participant::new(id, format!("person-{id}"), name, handicap)
}

/// Scratch players `a`, `b`, ... named PlayerA, PlayerB, ...
pub fn scratch_players(ids: &[&str]) -> Vec<Participant> {
    ids.iter().map(|id| player(id, 0.0)).collect()
}

/// One score per hole, starting at hole 1.
pub fn card(id: &str, strokes: &[i32]) -> Vec<ResolvedScore> {
    strokes
        .iter()
        .enumerate()
        .map(|(i, s)| ResolvedScore::new(id, u32::try_from(i).unwrap() + 1, *s))
        .collect()
}

/// The same gross score on holes 1..=count.
pub fn flat_card(id: &str, strokes: i32, count: usize) -> Vec<ResolvedScore> {
    card(id, &vec![strokes; count])
}

pub fn team(id: &str, name: &str, members: &[&str]) -> Team {
    Team {
        team_id: id.to_string(),
        name: name.to_string(),
        tournament_team_id: None,
        member_participant_ids: members.iter().map(|m| (*m).to_string()).collect(),
    }
}

pub fn group(id: &str, number: u32, members: &[&str]) -> Group {
    Group {
        round_group_id: id.to_string(),
        group_number: number,
        name: Some(format!("Group {number}")),
        member_participant_ids: members.iter().map(|m| (*m).to_string()).collect(),
    }
}

pub fn decision(hole: u32, wolf: &str, partner: Option<&str>) -> GameDecision {
    GameDecision {
        hole_number: hole,
        wolf_player_id: wolf.to_string(),
        partner_player_id: partner.map(str::to_string),
    }
}

pub fn competition(config: CompetitionConfig) -> Competition {
    Competition {
        id: "comp-1".to_string(),
        name: config.format_type().label().to_string(),
        config,
        group_scope: GroupScope::All,
    }
}

pub fn input(
    config: CompetitionConfig,
    holes: Vec<Hole>,
    participants: Vec<Participant>,
    scores: Vec<ResolvedScore>,
) -> CompetitionInput {
    CompetitionInput {
        competition: competition(config),
        holes,
        participants,
        scores,
        teams: Vec::new(),
        groups: Vec::new(),
        game_decisions: Vec::new(),
    }
}
