//! # Gambler
//!
//! The sources of chance in a game of Boggle: a [`Shuffler`] decides where
//! each cube lands in the grid, and a [`Die`] decides which face each cube
//! shows. Random implementations are backed by [`rand`]; predictable ones
//! support testing and replay.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// The number of faces on a cube.
pub const SIDES: usize = 6;

////////////////////////////////////////////////////////////////////////////////
//                                  Traits.                                   //
////////////////////////////////////////////////////////////////////////////////

/// Reorders a sequence in place.
pub trait Shuffler
{
	/// Permute the items.
	///
	/// # Arguments
	///
	/// * `items` - The items to permute.
	fn shuffle<T>(&mut self, items: &mut [T]);
}

/// A six-sided die.
pub trait Die
{
	/// Roll the die.
	///
	/// # Returns
	///
	/// A face index in `0..6`.
	fn roll(&mut self) -> usize;
}

////////////////////////////////////////////////////////////////////////////////
//                                 Random.                                    //
////////////////////////////////////////////////////////////////////////////////

/// Shuffles uniformly at random.
#[derive(Clone, Debug)]
#[must_use]
pub struct RandomShuffler(StdRng);

impl RandomShuffler
{
	/// Construct a shuffler seeded by the operating system.
	#[inline]
	pub fn new() -> Self { Self(StdRng::from_os_rng()) }

	/// Construct a shuffler that always produces the same sequence of
	/// permutations for the same seed.
	///
	/// # Arguments
	///
	/// * `seed` - The seed.
	#[inline]
	pub fn seeded(seed: u64) -> Self { Self(StdRng::seed_from_u64(seed)) }
}

impl Default for RandomShuffler
{
	#[inline]
	fn default() -> Self { Self::new() }
}

impl Shuffler for RandomShuffler
{
	fn shuffle<T>(&mut self, items: &mut [T])
	{
		items.shuffle(&mut self.0);
	}
}

/// A fair die.
#[derive(Clone, Debug)]
#[must_use]
pub struct SixSidedDie(StdRng);

impl SixSidedDie
{
	/// Construct a die seeded by the operating system.
	#[inline]
	pub fn new() -> Self { Self(StdRng::from_os_rng()) }

	/// Construct a die that always produces the same sequence of rolls for the
	/// same seed.
	///
	/// # Arguments
	///
	/// * `seed` - The seed.
	#[inline]
	pub fn seeded(seed: u64) -> Self { Self(StdRng::seed_from_u64(seed)) }
}

impl Default for SixSidedDie
{
	#[inline]
	fn default() -> Self { Self::new() }
}

impl Die for SixSidedDie
{
	fn roll(&mut self) -> usize
	{
		self.0.random_range(0 .. SIDES)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Predictable.                                 //
////////////////////////////////////////////////////////////////////////////////

/// Leaves the order untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NonShuffler;

impl Shuffler for NonShuffler
{
	#[inline]
	fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

/// Reverses the order.
#[derive(Clone, Copy, Debug, Default)]
pub struct PredictableShuffler;

impl Shuffler for PredictableShuffler
{
	#[inline]
	fn shuffle<T>(&mut self, items: &mut [T])
	{
		items.reverse();
	}
}

/// A loaded die that always rolls the same face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PredictableDie(usize);

impl PredictableDie
{
	/// Construct a die that always rolls the given face.
	///
	/// # Arguments
	///
	/// * `face` - The face index, in `0..6`.
	///
	/// # Panics
	///
	/// If `face` is not a valid face index.
	#[inline]
	pub fn new(face: usize) -> Self
	{
		assert!(face < SIDES, "no face {} on a {}-sided die", face, SIDES);
		Self(face)
	}
}

impl Die for PredictableDie
{
	#[inline]
	fn roll(&mut self) -> usize { self.0 }
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::gambler::{
		Die, NonShuffler, PredictableDie, PredictableShuffler,
		RandomShuffler, Shuffler, SixSidedDie, SIDES
	};

	/// Ensure that the predictable shufflers do what they say.
	#[test]
	fn test_predictable_shufflers()
	{
		let mut items = [0, 1, 2, 3];
		NonShuffler.shuffle(&mut items);
		assert_eq!(items, [0, 1, 2, 3]);
		PredictableShuffler.shuffle(&mut items);
		assert_eq!(items, [3, 2, 1, 0]);
	}

	/// Ensure that random shuffling permutes, and that seeding makes it
	/// repeatable.
	#[test]
	fn test_random_shuffler()
	{
		let mut a = (0..16).collect::<Vec<_>>();
		let mut b = a.clone();
		RandomShuffler::seeded(7).shuffle(&mut a);
		RandomShuffler::seeded(7).shuffle(&mut b);
		assert_eq!(a, b);
		let mut sorted = a.clone();
		sorted.sort();
		assert_eq!(sorted, (0..16).collect::<Vec<_>>());
	}

	/// Ensure that dice stay on the cube.
	#[test]
	fn test_dice()
	{
		let mut die = PredictableDie::new(4);
		assert_eq!(die.roll(), 4);
		assert_eq!(die.roll(), 4);
		assert_eq!(PredictableDie::default().roll(), 0);
		let mut die = SixSidedDie::seeded(42);
		let mut seen = [false; SIDES];
		for _ in 0..1000
		{
			let face = die.roll();
			assert!(face < SIDES);
			seen[face] = true;
		}
		assert!(seen.iter().all(|&s| s));
	}

	/// Ensure that a loaded die refuses an impossible face.
	#[test]
	#[should_panic]
	fn test_predictable_die_range()
	{
		let _ = PredictableDie::new(SIDES);
	}
}
