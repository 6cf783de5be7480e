use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::Poisson;

/// The random stream owned by one decoration pass.
///
/// Backed by ChaCha8 so the same seed yields the same draws on every platform.
#[derive(Debug, Clone)]
pub struct SpineStream {
	rng: ChaCha8Rng,
}

impl SpineStream {
	pub fn new(seed: u64) -> Self {
		Self { rng: ChaCha8Rng::seed_from_u64(seed) }
	}

	/// Independent stream for one segment, for passes that plan segments in parallel.
	///
	/// Stream 0 is the sequential pass stream, so segment streams start at 1.
	pub fn for_segment(seed: u64, segment_index: usize) -> Self {
		let mut rng = ChaCha8Rng::seed_from_u64(seed);
		rng.set_stream(segment_index as u64 + 1);
		Self { rng }
	}

	/// Draws a spine count from a Poisson distribution with the given mean.
	pub fn sample_count(&mut self, mean: f64) -> u32 {
		if mean.is_nan() || mean <= 0.0 {
			return 0;
		}

		match Poisson::new(mean) {
			Ok(poisson) => {
				let count: f64 = self.rng.sample(poisson);
				count.min(u32::MAX as f64) as u32
			}
			Err(e) => {
				log::warn!("Cannot sample spine count for mean {}: {}", mean, e);
				0
			}
		}
	}

	/// Seed for the per-index placement rule of one batch.
	pub fn next_batch_seed(&mut self) -> u64 {
		self.rng.next_u64()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_same_seed_same_draws() {
		let mut a = SpineStream::new(11);
		let mut b = SpineStream::new(11);
		for _ in 0..32 {
			assert_eq!(a.sample_count(4.2), b.sample_count(4.2));
			assert_eq!(a.next_batch_seed(), b.next_batch_seed());
		}
	}

	#[test]
	fn test_zero_mean_draws_nothing() {
		let mut stream = SpineStream::new(3);
		let mut untouched = SpineStream::new(3);
		assert_eq!(stream.sample_count(0.0), 0);
		assert_eq!(stream.sample_count(-1.0), 0);
		assert_eq!(stream.sample_count(f64::NAN), 0);

		// no randomness was consumed
		assert_eq!(stream.next_batch_seed(), untouched.next_batch_seed());
	}

	#[test]
	fn test_poisson_mean_converges() {
		let mut stream = SpineStream::new(2024);
		let draws = 4000;
		let mean = 6.0;
		let total: u64 = (0..draws).map(|_| stream.sample_count(mean) as u64).sum();
		let empirical = total as f64 / draws as f64;
		assert!((empirical - mean).abs() < 0.25, "empirical mean {}", empirical);
	}

	#[test]
	fn test_segment_streams_differ() {
		let mut first = SpineStream::for_segment(5, 0);
		let mut second = SpineStream::for_segment(5, 1);
		let mut pass = SpineStream::new(5);

		let a = first.next_batch_seed();
		assert_ne!(a, second.next_batch_seed());
		assert_ne!(a, pass.next_batch_seed());
		assert_eq!(a, SpineStream::for_segment(5, 0).next_batch_seed());
	}
}
