//! End-to-end games played through the public interface, activating cubes the
//! way a front end would: by asking each cube to report itself to its board.

use std::{collections::HashSet, rc::Rc};

use boggle::{
	board::{Board, Selection, Word, CUBE_COUNT},
	cube::{CubeStatus, Face},
	dictionary::Dictionary,
	gambler::{PredictableDie, PredictableShuffler, RandomShuffler, SixSidedDie}
};

/// Build a dictionary over the given words.
fn lexicon(words: &[&str]) -> Rc<Dictionary>
{
	let mut dictionary = Dictionary::new();
	dictionary.populate(words);
	Rc::new(dictionary)
}

/// Ensure the canonical game: spell PUT through the cubes themselves, commit
/// it, then fail to extend PU to a distant cube and drop it.
#[test]
fn test_canonical_game()
{
	let board = Board::shared(lexicon(&["GET", "PUT", "APT"]));
	board
		.borrow_mut()
		.shake_cubes(&mut PredictableShuffler, &mut PredictableDie::new(4))
		.unwrap();
	let activate = |id| {
		let cube = board.borrow().cube_by_id(id).unwrap().clone();
		cube.activate().unwrap()
	};
	assert_eq!(activate(13), Selection::Started);
	assert_eq!(activate(12), Selection::Extended);
	assert_eq!(activate(9), Selection::Extended);
	assert_eq!(board.borrow().word_so_far(), "PUT");
	assert_eq!(activate(9), Selection::Committed(Word::from("PUT")));
	assert_eq!(board.borrow().completed_words(), &[Word::from("PUT")]);
	assert_eq!(board.borrow().word_so_far(), "");

	activate(13);
	activate(12);
	assert_eq!(activate(11), Selection::Ignored);
	assert_eq!(board.borrow().word_so_far(), "PU");
	assert_eq!(activate(12), Selection::Discarded(Word::from("PU")));
	assert_eq!(board.borrow().completed_words(), &[Word::from("PUT")]);
	assert_eq!(board.borrow().word_so_far(), "");
	for id in 0..CUBE_COUNT
	{
		assert_eq!(
			board.borrow().cube_by_id(id).unwrap().status(),
			CubeStatus::Unselected
		);
	}
}

/// Ensure that random shakes only ever permute the cubes, and that every cube
/// shows one of its own faces.
#[test]
fn test_random_shakes()
{
	let mut board = Board::new(lexicon(&[]));
	let mut shuffler = RandomShuffler::seeded(2024);
	let mut die = SixSidedDie::seeded(4202);
	for _ in 0..100
	{
		board.shake_cubes(&mut shuffler, &mut die).unwrap();
		let mut ids = HashSet::new();
		for row in 0..4
		{
			for col in 0..4
			{
				let cube = board.cube(row, col).unwrap();
				assert!(ids.insert(cube.id()));
				assert!(cube.faces().contains(&cube.letter()));
				let id = cube.id();
				assert_eq!(board.position(id), Ok((id / 4, id % 4)));
			}
		}
		assert_eq!(ids.len(), CUBE_COUNT);
	}
}

/// Ensure that every word along a walk of neighboring home coordinates is
/// accepted and spelled correctly, whatever the shake.
#[test]
fn test_word_follows_path()
{
	let mut board = Board::new(lexicon(&[]));
	board
		.shake_cubes(&mut RandomShuffler::seeded(9), &mut SixSidedDie::seeded(10))
		.unwrap();
	// Snake through the grid: every step is to a neighboring home.
	let snake = [
		(0, 0), (0, 1), (0, 2), (0, 3),
		(1, 3), (1, 2), (1, 1), (1, 0),
		(2, 0), (2, 1), (2, 2), (2, 3),
		(3, 3), (3, 2), (3, 1), (3, 0)
	];
	let mut expected = String::new();
	for &(row, col) in &snake
	{
		let cube = board.cube_by_id(row * 4 + col).unwrap();
		let (id, letter): (_, Face) = (cube.id(), cube.letter());
		expected.push_str(letter.as_str());
		let selection = board.report_selection(id).unwrap();
		assert_ne!(selection, Selection::Ignored);
		assert_eq!(board.word_so_far(), expected);
	}
	assert_eq!(board.selection_path().len(), CUBE_COUNT);
	let (tail_row, tail_col) = snake[CUBE_COUNT - 1];
	let tail = tail_row * 4 + tail_col;
	assert!(matches!(board.report_selection(tail), Ok(Selection::Discarded(_))));
	assert!(board.is_idle());
}
