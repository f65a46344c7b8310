//! Shape detection along a single line through a point
//!
//! This is the only place pattern knowledge lives. Both the evaluators and the
//! terminal win check go through [`classify`].
//!
//! A 9-cell window is read around the anchor (4 cells each side). Cells off the
//! board read as opponent stones, so the edge behaves like a blocking wall. The
//! anchor itself always counts as a mover stone, which lets the same routine
//! score hypothetical placements on empty cells.

use std::ops::{Index, IndexMut};

use crate::board::{Board, Pos, Players};

/// The four line directions: horizontal, vertical and both diagonals
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, -1), (1, 1)];

const WINDOW: usize = 9;
const CENTER: usize = 4;

/// Shape categories, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    None = 0,
    SleepTwo,
    LiveTwo,
    SleepThree,
    LiveThree,
    SleepFour,
    LiveFour,
    LiveFive,
}

impl Shape {
    pub const COUNT: usize = 8;
}

/// Occurrences of each shape for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeCounts([u32; Shape::COUNT]);

impl ShapeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, shape: Shape) -> u32 {
        self.0[shape as usize]
    }

    #[inline]
    pub fn add(&mut self, shape: Shape) {
        self.0[shape as usize] += 1;
    }

    #[inline]
    pub fn has(&self, shape: Shape) -> bool {
        self.get(shape) > 0
    }
}

impl Index<Shape> for ShapeCounts {
    type Output = u32;

    fn index(&self, shape: Shape) -> &u32 {
        &self.0[shape as usize]
    }
}

impl IndexMut<Shape> for ShapeCounts {
    fn index_mut(&mut self, shape: Shape) -> &mut u32 {
        &mut self.0[shape as usize]
    }
}

/// Cells already accounted for in one direction during a whole-board scan
#[derive(Debug, Clone)]
pub struct VisitedGrid {
    size: usize,
    cells: Vec<bool>,
}

impl VisitedGrid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    #[inline]
    pub fn is_visited(&self, pos: Pos) -> bool {
        self.cells[pos.row as usize * self.size + pos.col as usize]
    }

    #[allow(clippy::cast_sign_loss)]
    fn mark(&mut self, row: i32, col: i32) {
        let size = self.size as i32;
        if row >= 0 && row < size && col >= 0 && col < size {
            self.cells[(row * size + col) as usize] = true;
        }
    }
}

/// Window cell relative to the player pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Mine,
    Theirs,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The 9-cell window plus the mover run and open range through its centre
#[derive(Debug, Clone, Copy)]
struct Line {
    cells: [Cell; WINDOW],
    /// Mover run, inclusive window indices
    left: usize,
    right: usize,
    /// Run extended over every non-opponent cell
    open_left: usize,
    open_right: usize,
}

impl Line {
    fn read(board: &Board, pos: Pos, players: Players, (dr, dc): (i32, i32)) -> Self {
        let mut cells = [Cell::Theirs; WINDOW];
        for (i, cell) in cells.iter_mut().enumerate() {
            let (row, col) = pos.offset(dr, dc, i as i32 - CENTER as i32);
            *cell = match board.cell(row, col) {
                None => Cell::Theirs,
                Some(stone) if stone == players.mine => Cell::Mine,
                Some(stone) if stone == players.theirs => Cell::Theirs,
                Some(_) => Cell::Empty,
            };
        }
        Self::from_cells(cells)
    }

    fn from_cells(cells: [Cell; WINDOW]) -> Self {
        let (mut left, mut right) = (CENTER, CENTER);
        while right < WINDOW - 1 && cells[right + 1] == Cell::Mine {
            right += 1;
        }
        while left > 0 && cells[left - 1] == Cell::Mine {
            left -= 1;
        }

        let (mut open_left, mut open_right) = (left, right);
        while open_right < WINDOW - 1 && cells[open_right + 1] != Cell::Theirs {
            open_right += 1;
        }
        while open_left > 0 && cells[open_left - 1] != Cell::Theirs {
            open_left -= 1;
        }

        Self {
            cells,
            left,
            right,
            open_left,
            open_right,
        }
    }

    #[inline]
    fn run_len(&self) -> usize {
        self.right - self.left + 1
    }

    #[inline]
    fn open_len(&self) -> usize {
        self.open_right - self.open_left + 1
    }

    /// Window index `k` cells beyond the run on `side`
    #[inline]
    fn flank_index(&self, side: Side, k: usize) -> Option<usize> {
        match side {
            Side::Left => self.left.checked_sub(k),
            Side::Right => Some(self.right + k).filter(|&i| i < WINDOW),
        }
    }

    /// Cell `k` cells beyond the run on `side`; outside the window reads as a wall
    #[inline]
    fn flank(&self, side: Side, k: usize) -> Cell {
        self.flank_index(side, k).map_or(Cell::Theirs, |i| self.cells[i])
    }

    /// Window indices covering flank cells `from..=to` on `side`, low index first
    fn flank_span(&self, side: Side, from: usize, to: usize) -> (usize, usize) {
        match side {
            Side::Left => (self.left.saturating_sub(to), self.left.saturating_sub(from)),
            Side::Right => ((self.right + from).min(WINDOW - 1), (self.right + to).min(WINDOW - 1)),
        }
    }
}

/// Receives shapes and visited marks for one classification
struct Recorder<'a> {
    counts: &'a mut ShapeCounts,
    visited: Option<&'a mut VisitedGrid>,
    origin: Pos,
    dir: (i32, i32),
}

impl Recorder<'_> {
    #[inline]
    fn found(&mut self, shape: Shape) {
        self.counts.add(shape);
    }

    /// Mark window indices `from..=to` as visited
    fn mark(&mut self, from: usize, to: usize) {
        let Some(visited) = self.visited.as_deref_mut() else {
            return;
        };
        for i in from..=to {
            let (row, col) = self.origin.offset(self.dir.0, self.dir.1, i as i32 - CENTER as i32);
            visited.mark(row, col);
        }
    }

    fn mark_flank(&mut self, line: &Line, side: Side, from: usize, to: usize) {
        let (lo, hi) = line.flank_span(side, from, to);
        self.mark(lo, hi);
    }
}

/// Classify the shape through `pos` along `dir` for `players.mine`, adding
/// every shape found to `counts`.
///
/// With `visited`, the cells each shape was derived from are marked so a
/// whole-board scan does not derive the same shape again from another anchor.
pub fn classify(
    board: &Board,
    pos: Pos,
    players: Players,
    dir: (i32, i32),
    counts: &mut ShapeCounts,
    visited: Option<&mut VisitedGrid>,
) {
    let line = Line::read(board, pos, players, dir);
    let mut rec = Recorder {
        counts,
        visited,
        origin: pos,
        dir,
    };
    classify_line(&line, &mut rec);
}

fn classify_line(line: &Line, rec: &mut Recorder<'_>) {
    // Not enough room for five: nothing here can ever matter.
    if line.open_len() < 5 {
        rec.mark(line.open_left, line.open_right);
        return;
    }
    rec.mark(line.left, line.right);

    match line.run_len() {
        5.. => rec.found(Shape::LiveFive),
        4 => classify_four(line, rec),
        3 => classify_three(line, rec),
        2 => classify_two(line, rec),
        _ => classify_one(line, rec),
    }
}

/// `_MMMM_` live, `_MMMMO` sleep, `OMMMMO` nothing
fn classify_four(line: &Line, rec: &mut Recorder<'_>) {
    match (line.flank(Side::Left, 1), line.flank(Side::Right, 1)) {
        (Cell::Empty, Cell::Empty) => rec.found(Shape::LiveFour),
        (Cell::Empty, _) | (_, Cell::Empty) => rec.found(Shape::SleepFour),
        _ => {}
    }
}

/// Three in a row: broken fours (`M_MMM`) first, then live/sleep three
fn classify_three(line: &Line, rec: &mut Recorder<'_>) {
    let mut broken_four = false;
    let mut open = 0;

    for side in [Side::Left, Side::Right] {
        match (line.flank(side, 1), line.flank(side, 2)) {
            (Cell::Empty, Cell::Mine) => {
                rec.mark_flank(line, side, 1, 2);
                rec.found(Shape::SleepFour);
                broken_four = true;
                open += 1;
            }
            (Cell::Empty, _) => open += 1,
            _ => {}
        }
    }

    match (broken_four, open) {
        (true, _) => {}
        (false, 2) if line.open_len() > 5 => rec.found(Shape::LiveThree),
        (false, 1..=2) => rec.found(Shape::SleepThree),
        _ => {}
    }
}

/// What a two-stone run becomes when extended across one flank gap
fn two_promotion(line: &Line, side: Side) -> Option<(Shape, usize)> {
    let other_open = line.flank(side.other(), 1) == Cell::Empty;
    match (line.flank(side, 1), line.flank(side, 2), line.flank(side, 3)) {
        // MM_MM
        (Cell::Empty, Cell::Mine, Cell::Mine) => Some((Shape::SleepFour, 3)),
        // _MM_M_
        (Cell::Empty, Cell::Mine, Cell::Empty) if other_open => Some((Shape::LiveThree, 2)),
        // OMM_M_
        (Cell::Empty, Cell::Mine, Cell::Empty) => Some((Shape::SleepThree, 2)),
        // _MM_MO
        (Cell::Empty, Cell::Mine, Cell::Theirs) if other_open => Some((Shape::SleepThree, 2)),
        _ => None,
    }
}

/// Two in a row: promoted to a four or three across a gap, else a live/sleep two
fn classify_two(line: &Line, rec: &mut Recorder<'_>) {
    let mut promoted = false;
    let mut open = 0;

    for side in [Side::Left, Side::Right] {
        if line.flank(side, 1) != Cell::Empty {
            continue;
        }
        open += 1;
        if let Some((shape, reach)) = two_promotion(line, side) {
            rec.mark_flank(line, side, 1, reach);
            rec.found(shape);
            promoted = true;
        }
    }

    match (promoted, open) {
        (true, _) => {}
        (false, 2) => rec.found(Shape::LiveTwo),
        (false, 1) => rec.found(Shape::SleepTwo),
        _ => {}
    }
}

/// Lone stone: split twos such as `_M_M_` and `_M__M_`.
///
/// Split twos are read rightwards; the leftward check only catches the pair
/// whose right side is walled off, so each pair is counted from one anchor.
fn classify_one(line: &Line, rec: &mut Recorder<'_>) {
    let left_open = line.flank(Side::Left, 1) == Cell::Empty;

    if left_open
        && line.flank(Side::Left, 2) == Cell::Mine
        && line.flank(Side::Left, 3) == Cell::Empty
        && line.flank(Side::Right, 1) == Cell::Theirs
    {
        rec.mark_flank(line, Side::Left, 1, 2);
        rec.found(Shape::SleepTwo);
    }

    if line.flank(Side::Right, 1) != Cell::Empty {
        return;
    }
    match (
        line.flank(Side::Right, 2),
        line.flank(Side::Right, 3),
        line.flank(Side::Right, 4),
    ) {
        (Cell::Mine, Cell::Empty, _) => {
            rec.mark_flank(line, Side::Right, 1, 2);
            rec.found(if left_open { Shape::LiveTwo } else { Shape::SleepTwo });
        }
        (Cell::Empty, Cell::Mine, Cell::Empty) => {
            rec.mark_flank(line, Side::Right, 1, 3);
            rec.found(Shape::LiveTwo);
        }
        _ => {}
    }
}
