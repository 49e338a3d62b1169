use rand::Rng;
use rand::seq::SliceRandom as _;

use crate::error::{LottoError, Result};
use crate::panel::{MAX_NUMBER, MAX_NUMBERS, MIN_NUMBER};

/// Size of the number pool, `MIN_NUMBER..=MAX_NUMBER`
pub const POOL_SIZE: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

/// Draw `count` distinct numbers from 1-50 without replacement.
///
/// The pool is partially shuffled (Fisher-Yates) and the first `count`
/// values are returned in shuffled order.
pub fn generate_random_numbers<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<i32>> {
    if count == 0 || count > POOL_SIZE {
        return Err(LottoError::InvalidArgument(count));
    }

    Ok(sample(rng, count))
}

/// Unchecked draw, `count` is capped at the pool size
pub(crate) fn sample<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<i32> {
    let mut pool: Vec<i32> = (MIN_NUMBER..=MAX_NUMBER).collect();
    let (picked, _) = pool.partial_shuffle(rng, count);
    picked.to_vec()
}

/// Draw a full winning set of six numbers
pub fn draw_winning_numbers<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<i32>> {
    generate_random_numbers(rng, MAX_NUMBERS)
}

/// Same as [`generate_random_numbers`] with the thread-local generator
pub fn pick(count: usize) -> Result<Vec<i32>> {
    generate_random_numbers(&mut rand::thread_rng(), count)
}
