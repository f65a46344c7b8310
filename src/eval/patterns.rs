//! Shape scores and the two scoring ladders
//!
//! The constants double as pruning thresholds for the candidate generator,
//! so their relative order matters more than their magnitudes.

use super::shape::{Shape, ShapeCounts};

/// Shape scores
pub struct ShapeScore;

impl ShapeScore {
    /// Five in a row - immediate win
    pub const LIVE_FIVE: i32 = 10_000;
    /// Open four: _MMMM_
    pub const LIVE_FOUR: i32 = 10_000;
    /// Closed or broken four: OMMMM_ / M_MMM
    pub const SLEEP_FOUR: i32 = 1_000;
    /// Open three: _MMM_ with room to spare
    pub const LIVE_THREE: i32 = 100;
    /// Closed three
    pub const SLEEP_THREE: i32 = 10;
    /// Open two
    pub const LIVE_TWO: i32 = 8;
    /// Closed two
    pub const SLEEP_TWO: i32 = 2;

    /// Alpha-beta window bounds
    pub const MAX: i32 = i32::MAX;
    pub const MIN: i32 = -i32::MAX;
}

/// Fixed scores of the board ladder's priority tier
mod priority {
    pub const MY_LIVE_FOUR: i32 = 9050;
    pub const MY_SLEEP_FOUR: i32 = 9040;
    pub const THEIR_LIVE_FOUR: i32 = 9030;
    pub const THEIR_FOUR_AND_THREE: i32 = 9020;
    pub const MY_LIVE_THREE: i32 = 9010;
    pub const THEIR_DOUBLE_THREE: i32 = 9000;
}

/// Value of placing a stone, from one side's shape counts.
pub fn point_score(counts: &ShapeCounts) -> i32 {
    if counts.has(Shape::LiveFive) {
        return ShapeScore::LIVE_FIVE;
    }
    if counts.has(Shape::LiveFour) {
        return ShapeScore::LIVE_FOUR;
    }

    let sleep_fours = counts[Shape::SleepFour] as i32;
    let live_threes = counts[Shape::LiveThree] as i32;
    let mut score = 0;

    // A lone sleep four without a live three is only worth a live three
    if sleep_fours > 1 || (sleep_fours > 0 && live_threes > 0) {
        score += sleep_fours * ShapeScore::SLEEP_FOUR;
    } else if sleep_fours > 0 {
        score += ShapeScore::LIVE_THREE;
    }

    if live_threes > 1 {
        score += 5 * ShapeScore::LIVE_THREE;
    } else if live_threes > 0 {
        score += ShapeScore::LIVE_THREE;
    }

    score += counts[Shape::SleepThree] as i32 * ShapeScore::SLEEP_THREE;
    score += counts[Shape::LiveTwo] as i32 * ShapeScore::LIVE_TWO;
    score += counts[Shape::SleepTwo] as i32 * ShapeScore::SLEEP_TWO;
    score
}

/// Whole-board `(mine, theirs)` scores from both sides' shape counts.
///
/// The branch order is load-bearing: the priority tier returns fixed scores
/// before any additive term is considered.
pub fn board_score(mine: &ShapeCounts, theirs: &ShapeCounts) -> (i32, i32) {
    if mine.has(Shape::LiveFive) {
        return (ShapeScore::LIVE_FIVE, 0);
    }
    if theirs.has(Shape::LiveFive) {
        return (0, ShapeScore::LIVE_FIVE);
    }

    // Two sleep fours cannot both be blocked: as good as a live four
    let mut mine = *mine;
    let mut theirs = *theirs;
    if mine[Shape::SleepFour] >= 2 {
        mine[Shape::LiveFour] += 1;
    }
    if theirs[Shape::SleepFour] >= 2 {
        theirs[Shape::LiveFour] += 1;
    }

    if mine.has(Shape::LiveFour) {
        return (priority::MY_LIVE_FOUR, 0);
    }
    if mine.has(Shape::SleepFour) {
        return (priority::MY_SLEEP_FOUR, 0);
    }
    if theirs.has(Shape::LiveFour) {
        return (0, priority::THEIR_LIVE_FOUR);
    }
    if theirs.has(Shape::SleepFour) && theirs.has(Shape::LiveThree) {
        return (0, priority::THEIR_FOUR_AND_THREE);
    }
    if mine.has(Shape::LiveThree) && !theirs.has(Shape::SleepFour) {
        return (priority::MY_LIVE_THREE, 0);
    }
    if theirs[Shape::LiveThree] > 1
        && !mine.has(Shape::LiveThree)
        && !mine.has(Shape::SleepThree)
    {
        return (0, priority::THEIR_DOUBLE_THREE);
    }

    let (mut my_score, mut their_score) = (0, 0);

    // Their four is already blocked
    if theirs.has(Shape::SleepFour) {
        my_score += 40;
    }

    match mine[Shape::LiveThree] {
        0 => {}
        1 => my_score += 100,
        _ => my_score += 5000,
    }
    match theirs[Shape::LiveThree] {
        0 => {}
        1 => their_score += 400,
        _ => their_score += 2000,
    }

    my_score += mine[Shape::SleepThree] as i32 * 10;
    their_score += theirs[Shape::SleepThree] as i32 * 10;

    my_score += mine[Shape::LiveTwo] as i32 * 6;
    their_score += theirs[Shape::LiveTwo] as i32 * 6;

    my_score += mine[Shape::SleepTwo] as i32 * 2;
    their_score += theirs[Shape::SleepTwo] as i32 * 2;

    (my_score, their_score)
}
