//! # Cubes
//!
//! A Boggle cube is a six-sided die bearing a letter on each face. One face of
//! the standard set bears the digraph `QU`, which always counts as a single
//! face. A [`Cube`] belongs to exactly one [`Board`], which tracks its
//! position in the grid and drives its [status](CubeStatus) while the player
//! assembles a word.

use std::{
	cell::RefCell,
	fmt::{self, Display, Formatter},
	rc::Weak
};

use crossterm::style::Stylize;
use fixedstr::str4;
use log::trace;

use crate::{
	board::{Board, BoardError, Selection},
	gambler::{Die, SIDES}
};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// The identity of a cube. Identities are assigned at construction time and
/// never change, even when a shake moves the cube to another grid slot.
pub type CubeId = usize;

/// The content of a single face: one letter, or the digraph `QU`.
pub type Face = str4;

/// The selection status of a cube, as seen by the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CubeStatus
{
	/// The cube is not part of the current selection.
	#[default]
	Unselected,

	/// The cube is part of the current selection, but is not its tail.
	Selected,

	/// The cube is the tail of the current selection. Activating it again
	/// commits the word so far.
	MostRecentlySelected
}

/// A single letter cube.
#[derive(Clone, Debug)]
#[must_use]
pub struct Cube
{
	/// The identity of the cube.
	id: CubeId,

	/// The faces of the cube, in their fixed order.
	faces: [Face; SIDES],

	/// The index of the face currently showing.
	top: usize,

	/// The selection status of the cube.
	status: CubeStatus,

	/// The board that owns the cube. The cube never keeps its board alive; the
	/// reference exists only so that [`activate`](Self::activate) can report
	/// the player's choice.
	board: Weak<RefCell<Board>>
}

impl Cube
{
	/// Construct a new cube that does not (yet) belong to any board. The first
	/// face is showing and the cube is [unselected](CubeStatus::Unselected).
	///
	/// # Arguments
	///
	/// * `id` - The identity of the cube.
	/// * `faces` - The faces of the cube.
	///
	/// # Returns
	///
	/// The new cube.
	pub fn new(id: CubeId, faces: [Face; SIDES]) -> Self
	{
		Self {
			id,
			faces,
			top: 0,
			status: CubeStatus::Unselected,
			board: Weak::new()
		}
	}

	/// Attach the cube to its owning board.
	///
	/// # Arguments
	///
	/// * `board` - The owning board.
	#[inline]
	pub(crate) fn attach(&mut self, board: Weak<RefCell<Board>>)
	{
		self.board = board;
	}

	/// Get the identity of the cube.
	#[inline]
	#[must_use]
	pub fn id(&self) -> CubeId { self.id }

	/// Get the faces of the cube, in their fixed order.
	#[inline]
	#[must_use]
	pub fn faces(&self) -> &[Face; SIDES] { &self.faces }

	/// Get the face currently showing.
	#[inline]
	#[must_use]
	pub fn letter(&self) -> Face { self.faces[self.top] }

	/// Get the selection status of the cube.
	#[inline]
	#[must_use]
	pub fn status(&self) -> CubeStatus { self.status }

	/// Set the selection status of the cube.
	///
	/// # Arguments
	///
	/// * `status` - The new status.
	#[inline]
	pub fn set_status(&mut self, status: CubeStatus)
	{
		self.status = status;
	}

	/// Roll the cube, showing whichever face the die selects.
	///
	/// # Arguments
	///
	/// * `die` - The die that chooses the face.
	///
	/// # Returns
	///
	/// The face now showing.
	///
	/// # Panics
	///
	/// If the die produces a face index outside `0..6`.
	pub fn roll<D: Die>(&mut self, die: &mut D) -> Face
	{
		let index = die.roll();
		assert!(index < SIDES, "die rolled {} on a {}-sided cube", index, SIDES);
		self.top = index;
		trace!("cube {} rolled {}", self.id, self.letter());
		self.letter()
	}

	/// Report to the owning board that the player has chosen this cube. This is
	/// exactly [`Board::report_selection`] with the cube's identity.
	///
	/// # Returns
	///
	/// The effect of the selection on the board.
	///
	/// # Errors
	///
	/// * [`BoardError::Detached`] if the cube has no live board.
	/// * [`BoardError::Busy`] if the board is already borrowed, e.g., because
	///   the caller is holding a reference to this very cube through it.
	pub fn activate(&self) -> Result<Selection, BoardError>
	{
		let owner = self.board.upgrade().ok_or(BoardError::Detached)?;
		let mut board = owner.try_borrow_mut().map_err(|_| BoardError::Busy)?;
		board.report_selection(self.id)
	}
}

/// Render the showing face, colored by status.
impl Display for Cube
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		let letter = self.letter();
		let letter = letter.as_str();
		match self.status
		{
			CubeStatus::MostRecentlySelected => write!(f, "{}", letter.green()),
			CubeStatus::Selected => write!(f, "{}", letter.blue()),
			CubeStatus::Unselected => write!(f, "{}", letter.white())
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
