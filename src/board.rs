//! # Board
//!
//! Herein is the Boggle board: a 4×4 grid of [cubes](Cube), the lexicon that
//! judges the player's words, and the selection state machine that turns cube
//! activations into words.
//!
//! The player builds a word by activating cubes one at a time. The first
//! activation starts a selection. Each further activation of an unselected
//! cube adjacent to the tail of the selection extends it. Activating the tail
//! again commits the word so far, recording it if the lexicon knows it, and
//! always clears the selection. Anything else is quietly ignored.

use std::{
	array,
	cell::RefCell,
	error::Error,
	fmt::{self, Display, Formatter},
	rc::Rc
};

use fixedstr::str64;
use log::{debug, trace};

use crate::{
	cube::{Cube, CubeId, CubeStatus, Face},
	dictionary::Dictionary,
	gambler::{Die, Shuffler, SIDES}
};

////////////////////////////////////////////////////////////////////////////////
//                                 Constants.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The number of rows in the grid.
pub const ROWS: usize = 4;

/// The number of columns in the grid.
pub const COLUMNS: usize = 4;

/// The number of cubes on the board.
pub const CUBE_COUNT: usize = ROWS * COLUMNS;

/// The sixteen letter cubes of the standard game, indexed by [`CubeId`].
pub const CUBE_FACES: [[&str; SIDES]; CUBE_COUNT] = [
	["A", "A", "C", "I", "O", "T"],
	["T", "Y", "A", "B", "I", "L"],
	["J", "M", "O", "QU", "A", "B"],
	["A", "C", "D", "E", "M", "P"],
	["A", "C", "E", "L", "S", "R"],
	["A", "D", "E", "N", "V", "Z"],
	["A", "H", "M", "O", "R", "S"],
	["B", "F", "I", "O", "R", "X"],
	["D", "E", "N", "O", "S", "W"],
	["D", "K", "N", "O", "T", "U"],
	["E", "E", "F", "H", "I", "Y"],
	["E", "G", "I", "N", "T", "V"],
	["E", "G", "K", "L", "U", "Y"],
	["E", "H", "I", "N", "P", "S"],
	["E", "L", "P", "S", "T", "U"],
	["G", "I", "L", "R", "U", "W"]
];

/// A word assembled from the faces of the board. Sixteen faces of at most
/// three bytes apiece always fit.
pub type Word = str64;

////////////////////////////////////////////////////////////////////////////////
//                                   Board.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete state of a game of Boggle.
#[derive(Clone, Debug)]
#[must_use]
pub struct Board
{
	/// The words that the player may complete.
	lexicon: Rc<Dictionary>,

	/// The cubes, indexed by identity.
	cubes: [Cube; CUBE_COUNT],

	/// The identities of the cubes occupying each grid slot, linearized in
	/// row-major order. Shaking permutes the slots, but a cube's home
	/// position, and hence its neighbors, never changes.
	slots: [CubeId; CUBE_COUNT],

	/// The identities of the selected cubes, in order of selection. Empty
	/// when no selection is in progress.
	path: Vec<CubeId>,

	/// The faces of the selected cubes, concatenated in order of selection.
	word_so_far: Word,

	/// The words completed so far, in order of completion.
	completed_words: Vec<Word>
}

// Public interface.
impl Board
{
	/// Construct a board holding the standard cubes, each in the slot matching
	/// its identity and showing its first face. The cubes of this board are
	/// detached: [`Cube::activate`] refuses to reach it. Use
	/// [`shared`](Self::shared) for a board whose cubes may be activated
	/// directly.
	///
	/// # Arguments
	///
	/// * `lexicon` - The words that the player may complete.
	///
	/// # Returns
	///
	/// The new board.
	pub fn new(lexicon: Rc<Dictionary>) -> Self
	{
		Self {
			lexicon,
			cubes: array::from_fn(|id| Cube::new(id, CUBE_FACES[id].map(Face::from))),
			slots: array::from_fn(|slot| slot),
			path: Vec::new(),
			word_so_far: Word::new(),
			completed_words: Vec::new()
		}
	}

	/// Construct a shared board whose cubes report their activations back to
	/// it. Otherwise identical to [`new`](Self::new).
	///
	/// # Arguments
	///
	/// * `lexicon` - The words that the player may complete.
	///
	/// # Returns
	///
	/// The new board.
	#[must_use]
	pub fn shared(lexicon: Rc<Dictionary>) -> Rc<RefCell<Self>>
	{
		Rc::new_cyclic(|owner| {
			let mut board = Self::new(lexicon);
			board.cubes.iter_mut().for_each(|cube| cube.attach(owner.clone()));
			RefCell::new(board)
		})
	}

	/// Get the cube currently occupying the specified slot.
	///
	/// # Arguments
	///
	/// * `row` - The row, in `0..4`.
	/// * `col` - The column, in `0..4`.
	///
	/// # Returns
	///
	/// The cube at `(row, col)`.
	///
	/// # Errors
	///
	/// [`BoardError::OutOfBounds`] if either coordinate is off the grid.
	pub fn cube(&self, row: usize, col: usize) -> Result<&Cube, BoardError>
	{
		if row >= ROWS || col >= COLUMNS
		{
			return Err(BoardError::OutOfBounds { row, col })
		}
		Ok(&self.cubes[self.slots[row * COLUMNS + col]])
	}

	/// Get the cube with the specified identity, wherever it currently sits.
	///
	/// # Arguments
	///
	/// * `id` - The identity of the cube.
	///
	/// # Returns
	///
	/// The requested cube.
	///
	/// # Errors
	///
	/// [`BoardError::UnknownCube`] if no cube has the identity.
	pub fn cube_by_id(&self, id: CubeId) -> Result<&Cube, BoardError>
	{
		self.cubes.get(id).ok_or(BoardError::UnknownCube(id))
	}

	/// Get the home coordinates of the specified cube, i.e., the slot that it
	/// occupies before any shake. Adjacency is judged by home coordinates, so
	/// they stay fixed for the lifetime of the board.
	///
	/// # Arguments
	///
	/// * `id` - The identity of the cube.
	///
	/// # Returns
	///
	/// The `(row, col)` of the cube.
	///
	/// # Errors
	///
	/// [`BoardError::UnknownCube`] if no cube has the identity.
	pub fn position(&self, id: CubeId) -> Result<(usize, usize), BoardError>
	{
		if id >= CUBE_COUNT
		{
			return Err(BoardError::UnknownCube(id))
		}
		Ok((id / COLUMNS, id % COLUMNS))
	}

	/// Check whether two cubes are adjacent, i.e., horizontal, vertical or
	/// diagonal neighbors by [home coordinates](Self::position). A cube is
	/// never adjacent to itself, and cubes that do not belong to the board are
	/// never adjacent to anything.
	///
	/// # Arguments
	///
	/// * `cube1` - The first cube.
	/// * `cube2` - The second cube.
	///
	/// # Returns
	///
	/// `true` if the cubes are adjacent, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn adjacent(&self, cube1: &Cube, cube2: &Cube) -> bool
	{
		self.are_adjacent(cube1.id(), cube2.id())
	}

	/// Shake the board. First the shuffler permutes the cubes among the grid
	/// slots, then every cube is rolled with the die, in slot order.
	///
	/// # Arguments
	///
	/// * `shuffler` - Decides where each cube lands.
	/// * `die` - Decides which face of each cube shows.
	///
	/// # Errors
	///
	/// [`BoardError::SelectionInProgress`] if the player is in the middle of a
	/// selection. The board is unchanged.
	pub fn shake_cubes<S, D>(
		&mut self,
		shuffler: &mut S,
		die: &mut D
	) -> Result<(), BoardError>
		where S: Shuffler, D: Die
	{
		if !self.is_idle()
		{
			return Err(BoardError::SelectionInProgress)
		}
		shuffler.shuffle(&mut self.slots);
		for &id in &self.slots
		{
			self.cubes[id].roll(die);
		}
		debug!("shook cubes:\n{}", self);
		Ok(())
	}

	/// Mark every cube as [unselected](CubeStatus::Unselected). The selection
	/// itself is left alone.
	pub fn unselect_all(&mut self)
	{
		self.cubes.iter_mut()
			.for_each(|cube| cube.set_status(CubeStatus::Unselected));
	}

	/// Report that the player has activated the specified cube, and advance
	/// the selection state machine accordingly.
	///
	/// # Arguments
	///
	/// * `id` - The identity of the activated cube.
	///
	/// # Returns
	///
	/// The effect of the activation.
	///
	/// # Errors
	///
	/// [`BoardError::UnknownCube`] if no cube has the identity. The board is
	/// unchanged.
	pub fn report_selection(&mut self, id: CubeId) -> Result<Selection, BoardError>
	{
		if id >= CUBE_COUNT
		{
			return Err(BoardError::UnknownCube(id))
		}
		let selection = match self.path.last().copied()
		{
			None =>
			{
				self.cubes[id].set_status(CubeStatus::MostRecentlySelected);
				self.path.push(id);
				self.word_so_far = Word::from(self.cubes[id].letter().as_str());
				Selection::Started
			}
			Some(tail) if tail == id => self.commit(),
			Some(tail) if !self.path.contains(&id) && self.are_adjacent(tail, id) =>
			{
				self.cubes[tail].set_status(CubeStatus::Selected);
				self.cubes[id].set_status(CubeStatus::MostRecentlySelected);
				let letter = self.cubes[id].letter();
				self.word_so_far.push(&letter);
				self.path.push(id);
				Selection::Extended
			}
			Some(_) => Selection::Ignored
		};
		trace!("cube {}: {:?} => {}", id, selection, self.word_so_far);
		Ok(selection)
	}

	/// Abandon the current selection, if any, without committing it.
	pub fn cancel_selection(&mut self)
	{
		if !self.is_idle()
		{
			debug!("cancelled: {}", self.word_so_far);
		}
		self.clear_selection();
	}

	/// Check whether a selection is in progress.
	///
	/// # Returns
	///
	/// `true` if no cube is selected, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_idle(&self) -> bool
	{
		self.path.is_empty()
	}

	/// Get the identities of the selected cubes, in order of selection.
	#[inline]
	#[must_use]
	pub fn selection_path(&self) -> &[CubeId]
	{
		&self.path
	}

	/// Get the word spelled by the current selection. Empty when idle.
	#[inline]
	#[must_use]
	pub fn word_so_far(&self) -> &str
	{
		self.word_so_far.as_str()
	}

	/// Get the words completed so far, in order of completion.
	#[inline]
	#[must_use]
	pub fn completed_words(&self) -> &[Word]
	{
		&self.completed_words
	}

	/// Get the total score of the completed words, according to the standard
	/// Boggle scoring table.
	///
	/// # Returns
	///
	/// The total score.
	#[must_use]
	pub fn score(&self) -> u32
	{
		self.completed_words.iter().map(|word| word_score(word)).sum()
	}
}

// Private implementation details.
impl Board
{
	/// Check whether the two cubes have neighboring home coordinates. They are
	/// neighbors when their Euclidean distance is strictly between 0 and 1.5,
	/// which admits exactly the orthogonal (1) and diagonal (√2) neighbors.
	///
	/// # Arguments
	///
	/// * `a` - The identity of the first cube.
	/// * `b` - The identity of the second cube.
	///
	/// # Returns
	///
	/// `true` if the cubes are adjacent, `false` otherwise.
	fn are_adjacent(&self, a: CubeId, b: CubeId) -> bool
	{
		match (self.position(a), self.position(b))
		{
			(Ok((row_a, col_a)), Ok((row_b, col_b))) =>
			{
				let dr = row_a as f64 - row_b as f64;
				let dc = col_a as f64 - col_b as f64;
				let distance = (dr * dr + dc * dc).sqrt();
				distance > 0.0 && distance < 1.5
			}
			_ => false
		}
	}

	/// Commit the word so far. The word is recorded only if the lexicon
	/// contains it and it hasn't been recorded already; the selection is
	/// cleared regardless.
	///
	/// # Returns
	///
	/// [`Selection::Committed`] or [`Selection::Discarded`], as appropriate.
	fn commit(&mut self) -> Selection
	{
		let word = self.word_so_far;
		let selection =
			if self.lexicon.contains(word.as_str())
				&& !self.completed_words.contains(&word)
			{
				debug!("completed word: {}", word);
				self.completed_words.push(word);
				Selection::Committed(word)
			}
			else
			{
				debug!("discarded word: {}", word);
				Selection::Discarded(word)
			};
		self.clear_selection();
		selection
	}

	/// Clear the selection and unselect every cube.
	fn clear_selection(&mut self)
	{
		self.unselect_all();
		self.path.clear();
		self.word_so_far.clear();
	}
}

/// Render the grid as four lines of space-separated faces, colored by status.
impl Display for Board
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for (row, ids) in self.slots.chunks_exact(COLUMNS).enumerate()
		{
			if row > 0
			{
				writeln!(f)?;
			}
			for (col, &id) in ids.iter().enumerate()
			{
				if col > 0
				{
					write!(f, " ")?;
				}
				write!(f, "{}", self.cubes[id])?;
			}
		}
		Ok(())
	}
}

/// Compute the score of a single word. `QU` counts as two letters.
///
/// # Arguments
///
/// * `word` - The word to score.
///
/// # Returns
///
/// The score of the word.
#[must_use]
pub fn word_score(word: &str) -> u32
{
	match word.chars().count()
	{
		0 ..= 2 => 0,
		3 | 4 => 1,
		5 => 2,
		6 => 3,
		7 => 5,
		_ => 11
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                Selections.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The effect of a single cube activation on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection
{
	/// The cube started a new selection.
	Started,

	/// The cube extended the current selection.
	Extended,

	/// The tail was activated again, and the word so far was recorded.
	Committed(Word),

	/// The tail was activated again, but the word so far was unknown or
	/// already completed, so it was dropped.
	Discarded(Word),

	/// The cube was neither adjacent to the tail nor eligible, so nothing
	/// happened.
	Ignored
}

/// The complete enumeration of [`Board`] errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError
{
	/// No cube has the given identity.
	UnknownCube(CubeId),

	/// The given coordinates lie outside the grid.
	OutOfBounds {
		/// The requested row.
		row: usize,

		/// The requested column.
		col: usize
	},

	/// The board cannot be shaken while a selection is in progress.
	SelectionInProgress,

	/// The cube does not belong to a live board.
	Detached,

	/// The board is already borrowed, so the cube cannot report to it.
	Busy
}

impl Display for BoardError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::UnknownCube(id) => write!(f, "no cube has id {}", id),
			Self::OutOfBounds { row, col } =>
				write!(f, "({}, {}) lies outside the grid", row, col),
			Self::SelectionInProgress =>
				write!(f, "cannot shake while a selection is in progress"),
			Self::Detached => write!(f, "cube does not belong to a board"),
			Self::Busy => write!(f, "board is already in use")
		}
	}
}

impl Error for BoardError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
