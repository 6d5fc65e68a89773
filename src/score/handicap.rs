/// Most strokes a player can receive over a round.
pub const MAX_PLAYING_HANDICAP: i32 = 54;

fn parse_or_zero(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => 0.0,
    }
}

/// Walks the override cascade: round override, then tournament override,
/// then the handicap snapshot taken for the round. Unparseable values count
/// as zero.
#[must_use]
pub fn resolve_effective_handicap(
    round_override: Option<&str>,
    tournament_override: Option<&str>,
    snapshot: &str,
) -> f64 {
    if let Some(value) = round_override {
        return parse_or_zero(value);
    }
    if let Some(value) = tournament_override {
        return parse_or_zero(value);
    }
    parse_or_zero(snapshot)
}

/// Rounds to the nearest whole stroke (halves up) and clamps to 0..=54.
#[must_use]
pub fn get_playing_handicap(handicap: f64) -> i32 {
    if !handicap.is_finite() {
        return 0;
    }
    let rounded = (handicap + 0.5).floor();
    rounded.clamp(0.0, f64::from(MAX_PLAYING_HANDICAP)) as i32
}

/// 2 strokes once the handicap laps the card, 1 if it reaches the index.
#[must_use]
pub fn get_strokes_on_hole(playing_handicap: i32, stroke_index: i32) -> i32 {
    if playing_handicap >= stroke_index + 18 {
        2
    } else if playing_handicap >= stroke_index {
        1
    } else {
        0
    }
}
