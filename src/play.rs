//! # Play
//!
//! A line-oriented game session. Each line of input is a single command; after
//! each command the session prints the board, the word so far and the
//! completed words.

use std::{
	cell::RefCell,
	io::{self, BufRead, Write},
	rc::Rc,
	str::FromStr
};

use boggle::{
	board::{Board, BoardError, Selection},
	cube::CubeId,
	dictionary::Dictionary,
	gambler::{Die, Shuffler}
};
use log::{debug, trace};

////////////////////////////////////////////////////////////////////////////////
//                                  Session.                                  //
////////////////////////////////////////////////////////////////////////////////

/// A single game of Boggle, driven by text commands.
#[must_use]
pub struct Session<S: Shuffler, D: Die>
{
	/// The board being played.
	board: Rc<RefCell<Board>>,

	/// Decides where each cube lands when the board is shaken.
	shuffler: S,

	/// Decides which face of each cube shows when the board is shaken.
	die: D,

	/// Whether the player has asked to quit.
	finished: bool
}

// Public interface.
impl<S: Shuffler, D: Die> Session<S, D>
{
	/// Create a new session, with a freshly shaken board.
	///
	/// # Arguments
	///
	/// * `dictionary` - The words that the player may complete.
	/// * `shuffler` - Decides where each cube lands.
	/// * `die` - Decides which face of each cube shows.
	///
	/// # Returns
	///
	/// The new session.
	pub fn new(dictionary: Dictionary, mut shuffler: S, mut die: D) -> Self
	{
		let board = Board::shared(Rc::new(dictionary));
		board
			.borrow_mut()
			.shake_cubes(&mut shuffler, &mut die)
			.expect("fresh board is idle");
		Self { board, shuffler, die, finished: false }
	}

	/// Run the session until the player quits or the input is exhausted.
	///
	/// # Arguments
	///
	/// * `input` - The source of commands.
	/// * `output` - The destination of the transcript.
	///
	/// # Returns
	///
	/// The completed words.
	///
	/// # Errors
	///
	/// Any error that occurs while reading commands or writing the transcript.
	pub fn run<R, W>(mut self, input: R, mut output: W) -> io::Result<Vec<String>>
		where R: BufRead, W: Write
	{
		self.render(&mut output)?;
		for line in input.lines()
		{
			let line = line?;
			if line.trim().is_empty()
			{
				continue
			}
			let feedback = match line.parse::<Command>()
			{
				Ok(command) => self.execute(command),
				Err(e) => e.to_string()
			};
			writeln!(output, "{}", feedback)?;
			if self.finished
			{
				break
			}
			self.render(&mut output)?;
		}
		let board = self.board.borrow();
		writeln!(output, "Score: {}", board.score())?;
		let completed = board.completed_words().iter()
			.map(|w| w.to_string())
			.collect();
		Ok(completed)
	}
}

// Private implementation details.
impl<S: Shuffler, D: Die> Session<S, D>
{
	/// Execute a single command.
	///
	/// # Arguments
	///
	/// * `command` - The command to execute.
	///
	/// # Returns
	///
	/// Feedback for the player.
	fn execute(&mut self, command: Command) -> String
	{
		trace!("command: {:?}", command);
		let result = match command
		{
			Command::Activate { row, col } => self.activate_at(row, col),
			Command::ActivateId(id) => self.activate_id(id),
			Command::Cancel =>
			{
				self.board.borrow_mut().cancel_selection();
				return "Selection cancelled.".to_string()
			}
			Command::Shake =>
			{
				return match self.board.borrow_mut()
					.shake_cubes(&mut self.shuffler, &mut self.die)
				{
					Ok(()) => "Shaken.".to_string(),
					Err(e) => format!("Cannot shake: {}.", e)
				}
			}
			Command::Quit =>
			{
				self.finished = true;
				return "Goodbye.".to_string()
			}
		};
		match result
		{
			Ok(Selection::Started) | Ok(Selection::Extended) => String::new(),
			Ok(Selection::Committed(word)) => format!("Completed {}!", word),
			Ok(Selection::Discarded(word)) =>
				format!("{} doesn't count.", word),
			Ok(Selection::Ignored) =>
				"That cube isn't available.".to_string(),
			Err(e) => format!("Error: {}.", e)
		}
	}

	/// Activate the cube at the given slot, through the cube itself.
	fn activate_at(&self, row: usize, col: usize) -> Result<Selection, BoardError>
	{
		let cube = self.board.borrow().cube(row, col)?.clone();
		cube.activate()
	}

	/// Activate the cube with the given identity, through the cube itself.
	fn activate_id(&self, id: CubeId) -> Result<Selection, BoardError>
	{
		let cube = self.board.borrow().cube_by_id(id)?.clone();
		cube.activate()
	}

	/// Write the board, the word so far and the completed words.
	fn render<W: Write>(&self, output: &mut W) -> io::Result<()>
	{
		let board = self.board.borrow();
		writeln!(output, "{}", board)?;
		writeln!(output, "Word: {}", board.word_so_far())?;
		let completed = board.completed_words().iter()
			.map(|w| w.as_str())
			.collect::<Vec<_>>();
		writeln!(output, "Completed: {}", completed.join(", "))
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                 Commands.                                  //
////////////////////////////////////////////////////////////////////////////////

/// A single player command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command
{
	/// Activate the cube at the given slot: `ROW COL`.
	Activate { row: usize, col: usize },

	/// Activate the cube with the given identity: `#ID`.
	ActivateId(CubeId),

	/// Abandon the current selection: `cancel`.
	Cancel,

	/// Shake the board: `shake`.
	Shake,

	/// End the game: `quit`.
	Quit
}

impl FromStr for Command
{
	type Err = CommandError;

	fn from_str(s: &str) -> Result<Self, Self::Err>
	{
		let tokens = s.split_whitespace().collect::<Vec<_>>();
		let number = |token: &str| token.parse::<usize>()
			.map_err(|_| CommandError(s.trim().to_string()));
		match tokens.as_slice()
		{
			["cancel"] => Ok(Command::Cancel),
			["shake"] => Ok(Command::Shake),
			["quit"] | ["exit"] => Ok(Command::Quit),
			[id] if id.starts_with('#') =>
				Ok(Command::ActivateId(number(&id[1..])?)),
			[row, col] =>
				Ok(Command::Activate { row: number(*row)?, col: number(*col)? }),
			_ =>
			{
				debug!("unrecognized command: {}", s);
				Err(CommandError(s.trim().to_string()))
			}
		}
	}
}

/// A line of input that isn't a command.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CommandError(String);

impl std::fmt::Display for CommandError
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
	{
		write!(
			f,
			"Unrecognized command: {} (try ROW COL, #ID, cancel, shake, quit)",
			self.0
		)
	}
}

impl std::error::Error for CommandError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use super::*;
	use boggle::gambler::{PredictableDie, PredictableShuffler};

	/// Create a session over a tiny lexicon, with the cubes reversed and each
	/// showing its fifth face.
	fn session() -> Session<PredictableShuffler, PredictableDie>
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(&["GET", "PUT", "APT"]);
		Session::new(dictionary, PredictableShuffler, PredictableDie::new(4))
	}

	/// Run a session over the given script, answering the completed words and
	/// the transcript.
	fn play(script: &str) -> (Vec<String>, String)
	{
		let mut transcript = Vec::new();
		let completed = session().run(script.as_bytes(), &mut transcript).unwrap();
		(completed, String::from_utf8(transcript).unwrap())
	}

	/// Ensure that commands parse, and that nonsense doesn't.
	#[test]
	fn test_parse()
	{
		assert_eq!("1 2".parse(), Ok(Command::Activate { row: 1, col: 2 }));
		assert_eq!(" #13 ".parse(), Ok(Command::ActivateId(13)));
		assert_eq!("cancel".parse(), Ok(Command::Cancel));
		assert_eq!("shake".parse(), Ok(Command::Shake));
		assert_eq!("quit".parse(), Ok(Command::Quit));
		assert!("1".parse::<Command>().is_err());
		assert!("#x".parse::<Command>().is_err());
		assert!("a b".parse::<Command>().is_err());
		assert!("1 2 3".parse::<Command>().is_err());
	}

	/// Ensure the canonical scenario, spelled by identity.
	#[test]
	fn test_play_by_id()
	{
		let (completed, transcript) = play("#13\n#12\n#9\n#9\nquit\n");
		assert_eq!(completed, vec!["PUT".to_string()]);
		assert!(transcript.contains("Completed PUT!"));
		assert!(transcript.contains("Score: 1"));
	}

	/// Ensure the canonical scenario, spelled by slot: the cubes are reversed,
	/// so cube 13 sits at (0, 2), cube 12 at (0, 3) and cube 9 at (1, 2).
	#[test]
	fn test_play_by_slot()
	{
		let (completed, transcript) = play("0 2\n0 3\n1 2\n1 2\n0 2\n0 3\n1 0\n0 3\n");
		assert_eq!(completed, vec!["PUT".to_string()]);
		assert!(transcript.contains("Word: PUT"));
		assert!(transcript.contains("That cube isn't available."));
		assert!(transcript.contains("PU doesn't count."));
	}

	/// Ensure that errors are reported without ending the session.
	#[test]
	fn test_play_errors()
	{
		let (completed, transcript) = play("9 9\n#42\nfrobnicate\n#13\nshake\ncancel\nshake\n");
		assert!(completed.is_empty());
		assert!(transcript.contains("Error: (9, 9) lies outside the grid."));
		assert!(transcript.contains("Error: no cube has id 42."));
		assert!(transcript.contains("Unrecognized command: frobnicate"));
		assert!(transcript.contains("Cannot shake: cannot shake while a selection is in progress."));
		assert!(transcript.contains("Selection cancelled."));
		assert!(transcript.contains("Shaken."));
	}
}
