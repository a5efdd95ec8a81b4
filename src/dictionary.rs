//! # Dictionary
//!
//! Herein is the lexicon that judges the player's words. Boggle words are
//! written in uppercase, with `QU` spelled out, so every word is normalized to
//! uppercase on the way in. A [`Dictionary`] is a prefix tree of words, which
//! keeps exact lookups cheap and serializes compactly.

use std::{
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{trace, warn};
use pfx::PrefixTreeSet;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A dictionary is a [`PrefixTreeSet`] of uppercase words.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Dictionary(PrefixTreeSet<String>);

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`].
	#[inline]
	pub fn new() -> Self { Self(Default::default()) }

	/// Check if the dictionary is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Check if the dictionary contains the given word. The match is exact, so
	/// the word must already be uppercase.
	///
	/// # Arguments
	///
	/// * `word` - The word to check.
	///
	/// # Returns
	///
	/// `true` if the dictionary contains the word, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn contains(&self, word: &str) -> bool { self.0.contains(word) }

	/// Populate the dictionary with the given words. Surrounding whitespace is
	/// trimmed, blank entries are skipped and everything else is uppercased.
	///
	/// # Arguments
	///
	/// * `words` - The intended content of the dictionary.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		for word in words
		{
			let word = word.as_ref().trim();
			if !word.is_empty()
			{
				self.0.insert(word.to_uppercase());
			}
		}
	}

	/// Open a dictionary with the given name. Only the specified directory will
	/// be searched. `name` denotes the dictionary file, sans the extension. If
	/// a binary dictionary (`<name>.dict`) exists _and_ is newer than the text
	/// file (`<name>.txt`), it will be read; otherwise, a text file will be
	/// read and a binary dictionary will be created (to speed up the next
	/// game).
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The name of the dictionary file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn open<T: AsRef<Path>>(dir: T, name: &str) -> Result<Self, io::Error>
	{
		let dict_path = dir.as_ref().join(format!("{}.dict", name));
		let txt_path = dir.as_ref().join(format!("{}.txt", name));
		// Any failure to compare modification times, including a missing
		// binary file, means the text file wins.
		let binary_is_fresh = dict_path
			.metadata()
			.and_then(|m| m.modified())
			.and_then(|dict_time| {
				txt_path
					.metadata()
					.and_then(|n| n.modified())
					.map(|txt_time| dict_time > txt_time)
			})
			.unwrap_or(false);
		if binary_is_fresh
		{
			let dictionary = Self::deserialize_from_file(&dict_path)?;
			trace!("Read binary dictionary: {}", dict_path.display());
			return Ok(dictionary)
		}
		let dictionary = Self::read_from_file(&txt_path)?;
		trace!("Read text dictionary: {}", txt_path.display());
		match dictionary.serialize_to_file(&dict_path)
		{
			Ok(_) => trace!("Wrote binary dictionary: {}", dict_path.display()),
			Err(e) => warn!(
				"Failed to write binary dictionary: {}: {}",
				dict_path.display(),
				e
			)
		}
		Ok(dictionary)
	}

	/// Construct a dictionary from the contents of the given file. Each line
	/// in the file is considered a single word.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let reader = BufReader::new(File::open(path)?);
		let words = reader.lines().collect::<Result<Vec<_>, _>>()?;
		let mut dictionary = Self::new();
		dictionary.populate(&words);
		Ok(dictionary)
	}

	/// Deserialize a dictionary from the given file. The file must contain a
	/// serialized dictionary in [`bincode`](bincode) format.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let mut reader = BufReader::new(File::open(path)?);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		bincode::deserialize(&content)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
	}

	/// Serialize the dictionary to the given file, in [`bincode`](bincode)
	/// format.
	///
	/// # Errors
	///
	/// If the file cannot be created or written, an error is returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let content = bincode::serialize(self)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
		File::create(path)?.write_all(&content)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{fs, io::ErrorKind};

	use crate::dictionary::Dictionary;
	use tempfile::{tempdir, NamedTempFile};

	/// Test basic functionality of [`Dictionary`]:
	///
	/// * [`Dictionary::new`]
	/// * [`Dictionary::is_empty`]
	/// * [`Dictionary::populate`]
	/// * [`Dictionary::contains`]
	#[test]
	fn test_populate()
	{
		let mut dictionary = Dictionary::new();
		assert!(dictionary.is_empty());
		assert!(!dictionary.contains("PUT"));
		dictionary.populate(&["put", " Get ", "", "QUIT"]);
		assert!(!dictionary.is_empty());
		assert!(dictionary.contains("PUT"));
		assert!(dictionary.contains("GET"));
		assert!(dictionary.contains("QUIT"));
		assert!(!dictionary.contains("put"));
		assert!(!dictionary.contains("PU"));
	}

	/// Test reading a dictionary from a text file, and serializing it to a
	/// binary file and back.
	#[test]
	fn test_read_and_serialize()
	{
		let text = NamedTempFile::new().unwrap();
		fs::write(text.path(), "get\nput\n\napt\n").unwrap();
		let dictionary = Dictionary::read_from_file(text.path()).unwrap();
		for word in ["GET", "PUT", "APT"]
		{
			assert!(dictionary.contains(word), "missing: {}", word);
		}
		let binary = NamedTempFile::new().unwrap();
		dictionary.serialize_to_file(binary.path()).unwrap();
		let deserialized =
			Dictionary::deserialize_from_file(binary.path()).unwrap();
		assert_eq!(dictionary, deserialized);
	}

	/// Test that garbage in a binary file is reported as invalid data.
	#[test]
	fn test_deserialize_garbage()
	{
		let binary = NamedTempFile::new().unwrap();
		fs::write(binary.path(), [0xff; 3]).unwrap();
		let e = Dictionary::deserialize_from_file(binary.path()).unwrap_err();
		assert_eq!(e.kind(), ErrorKind::InvalidData);
	}

	/// Test that opening a dictionary writes the binary cache beside the text
	/// file, and that a missing dictionary is an error.
	#[test]
	fn test_open()
	{
		let dir = tempdir().unwrap();
		assert!(Dictionary::open(dir.path(), "bogwords").is_err());
		fs::write(dir.path().join("bogwords.txt"), "get\nput\napt\n").unwrap();
		let dictionary = Dictionary::open(dir.path(), "bogwords").unwrap();
		assert!(dictionary.contains("APT"));
		assert!(dir.path().join("bogwords.dict").exists());
		let reopened = Dictionary::open(dir.path(), "bogwords").unwrap();
		assert_eq!(dictionary, reopened);
	}
}
