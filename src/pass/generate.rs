//! Password generation.

use tracing::debug;
use zeroize::Zeroizing;

use super::charset::{self, ClassSet};
use crate::error::PassError;
use crate::rng::RandomSource;

/// Draw `length` characters uniformly, with replacement, from the working
/// alphabet of `classes`.
pub fn generate<R: RandomSource + ?Sized>(
    length: usize,
    classes: ClassSet,
    rng: &mut R,
) -> Result<Zeroizing<String>, PassError> {
    if classes.is_empty() {
        return Err(PassError::NoCharacterClassSelected);
    }

    let chars = charset::alphabet(classes);
    debug!(length, alphabet = chars.len(), "generating password");

    let mut password = Zeroizing::new(String::with_capacity(length));
    password.extend((0..length).map(|_| random_char(&chars, &mut *rng)));
    Ok(password)
}

/// Generate `count` passwords with the same settings.
pub fn generate_batch<R: RandomSource + ?Sized>(
    count: usize,
    length: usize,
    classes: ClassSet,
    rng: &mut R,
) -> Result<Vec<Zeroizing<String>>, PassError> {
    (0..count)
        .map(|_| generate(length, classes, &mut *rng))
        .collect()
}

#[inline]
fn random_char<R: RandomSource + ?Sized>(chars: &[u8], rng: &mut R) -> char {
    chars[rng.below(chars.len())] as char
}
