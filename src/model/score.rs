use serde::{Deserialize, Serialize};

/// Gross strokes relative to par, as shown on a scorecard.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleBogeyOrWorse,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            i32::MIN..=-4 => Self::Condor,
            -3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3 => Self::TripleBogey,
            _ => Self::QuadrupleBogeyOrWorse,
        }
    }

    #[must_use]
    pub fn from_strokes(strokes: i32, par: i32) -> Self {
        Self::from_diff(strokes - par)
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_diff(value)
    }
}

/// "Eagle", "Birdie", "Par", "+1", "+2", ...
#[must_use]
pub fn par_label(diff: i32) -> String {
    match diff {
        i32::MIN..=-2 => "Eagle".to_string(),
        -1 => "Birdie".to_string(),
        0 => "Par".to_string(),
        _ => format!("+{diff}"),
    }
}
