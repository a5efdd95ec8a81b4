//! # Boggle
//!
//! Boggle is a word game played on a 4×4 grid of letter cubes. The cubes are
//! shaken into the grid, and the player forms words by chaining adjacent
//! cubes, never using a cube twice in the same word. Every word that the
//! dictionary knows scores points, longer words more than shorter ones.
//!
//! This program plays Boggle at the command line. Via command line options,
//! the user can specify the dictionary that judges the words. Then the user
//! plays by entering one command per line: the coordinates (or the `#`-prefixed
//! identity) of a cube to select it, the same cube again to submit the word,
//! `cancel` to abandon the word, `shake` to shake the board, and `quit` to end
//! the game. The completed words are written to standard output at the end.

mod play;

use std::io::{self, stdin, stdout};

use clap::{Parser, Subcommand};
use log::{debug, trace};

use boggle::{
	dictionary::Dictionary,
	gambler::{
		Die, NonShuffler, PredictableDie, RandomShuffler, Shuffler, SixSidedDie
	}
};
use play::Session;

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for playing Boggle.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0", author = "Todd L Smith")]
struct Opts
{
	/// The path to the directory containing the dictionary files.
	#[arg(short = 'd', long, default_value = "dict")]
	directory: String,

	/// The name of the dictionary. This is the name shared by the text and
	/// binary files, sans the extension.
	#[arg(short = 'n', long, default_value = "bogwords")]
	dictionary: String,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Copy, Clone, Debug, Subcommand)]
enum Command
{
	/// Just generate the binary dictionary and exit.
	Generate,

	/// Play a game, reading commands from standard input. The completed words
	/// will be written to standard output.
	Play {
		/// Seed the shuffler and the die, for a repeatable game.
		#[arg(short = 's', long)]
		seed: Option<u64>,

		/// Leave the cubes in their standard order, each showing its first
		/// face.
		#[arg(short = 'p', long, conflicts_with = "seed")]
		predictable: bool,

		/// Suppress emission of the completed words to standard output.
		#[arg(short = 'q', long)]
		quiet: bool
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main()
{
	env_logger::init();

	// Parse the command line options.
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);

	// Open the dictionary, creating the binary dictionary if necessary.
	let dictionary = Dictionary::open(&opts.directory, &opts.dictionary)
		.unwrap_or_else(|e|
			panic!("Failed to open dictionary: {}/{}.dict or {0}/{1}.txt: {}",
				opts.directory,
				opts.dictionary,
				e
			)
		);

	// Execute the appropriate subcommand.
	match opts.command
	{
		Command::Generate =>
		{
			trace!("Exiting after generating binary dictionary");
		},
		Command::Play { seed, predictable, quiet } =>
		{
			trace!("Starting game");
			let completed = match (seed, predictable)
			{
				(_, true) =>
					play(dictionary, NonShuffler, PredictableDie::new(0)),
				(Some(seed), false) => play(
					dictionary,
					RandomShuffler::seeded(seed),
					SixSidedDie::seeded(seed.wrapping_add(1))
				),
				(None, false) =>
					play(dictionary, RandomShuffler::new(), SixSidedDie::new())
			}
			.unwrap_or_else(|e| panic!("Failed to play: {}", e));
			if !quiet
			{
				print_words(completed);
			}
		}
	}
}

/// Play a game on standard input and output.
///
/// # Arguments
///
/// * `dictionary` - The words that the player may complete.
/// * `shuffler` - Decides where each cube lands.
/// * `die` - Decides which face of each cube shows.
///
/// # Returns
///
/// The completed words.
///
/// # Errors
///
/// Any error that occurs while reading from or writing to the terminal.
fn play<S: Shuffler, D: Die>(
	dictionary: Dictionary,
	shuffler: S,
	die: D
) -> io::Result<Vec<String>>
{
	Session::new(dictionary, shuffler, die).run(stdin().lock(), stdout())
}

/// Print the completed words to standard output.
///
/// # Arguments
///
/// * `words` - The words to print.
fn print_words(words: Vec<String>)
{
	for word in words
	{
		println!("{}", word);
	}
}
