use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Builds the 52 distinct cards in suit-major order.
pub fn create_standard_deck() -> Vec<Card> {
    full_deck()
}

/// Returns a uniformly shuffled copy of `deck` (Fisher–Yates via
/// [`SliceRandom::shuffle`]). The input is left untouched.
///
/// # Panics
///
/// Panics if `deck` does not hold exactly 52 cards; a short deck here is a
/// programming error, not a runtime condition.
///
/// ```
/// use railbird_engine::deck::{create_standard_deck, seeded_rng, shuffle_deck};
///
/// let deck = create_standard_deck();
/// let mut rng = seeded_rng(7);
/// let shuffled = shuffle_deck(&deck, &mut rng);
/// assert_eq!(shuffled.len(), 52);
/// assert_eq!(deck, create_standard_deck());
/// ```
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    assert_eq!(
        deck.len(),
        DECK_SIZE,
        "shuffle_deck expects a full deck of {} cards",
        DECK_SIZE
    );
    let mut cards = deck.to_vec();
    cards.shuffle(rng);
    cards
}

/// A freshly built and shuffled deck.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    shuffle_deck(&create_standard_deck(), rng)
}

/// Deterministic source for reproducible tables and tests.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Production source seeded from the operating system.
pub fn entropy_rng() -> ChaCha20Rng {
    ChaCha20Rng::from_os_rng()
}
