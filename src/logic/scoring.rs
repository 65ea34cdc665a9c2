//! Game result validation: first to 11, deuce games won by exactly 2.

use crate::models::ScoreError;

/// Points needed to win a game.
pub const WINNING_SCORE: u32 = 11;
/// Margin required once a game goes past 11.
pub const DEUCE_MARGIN: u32 = 2;

/// Check that two scores describe a finished game.
///
/// Valid when the higher score is exactly 11 with any lead, or above 11 with a lead of exactly 2.
/// Ties never validate.
pub fn validate_scores(score_1: u32, score_2: u32) -> Result<(), ScoreError> {
    let max = score_1.max(score_2);
    let min = score_1.min(score_2);
    let diff = max - min;

    if max < WINNING_SCORE {
        return Err(ScoreError::BelowEleven);
    }
    if diff == 0 || (max > WINNING_SCORE && diff != DEUCE_MARGIN) {
        return Err(ScoreError::MustWinByTwo);
    }
    Ok(())
}
