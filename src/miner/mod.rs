use log::debug;
use rand::Rng;
use rand::rngs::OsRng;

use crate::blockchain::digest::sha256_hex;

/// Inclusive bounds of the six-digit nonce search space.
pub const NONCE_MIN: u64 = 100_000;
pub const NONCE_MAX: u64 = 999_998;

/// Result of a successful proof-of-work search. The chain stores only the
/// hash; nonce and attempt count exist for logging and inspection.
#[derive(Debug)]
pub struct MineOutcome {
    pub hash: String,
    pub nonce: u64,
    pub attempts: u64,
}

/// Draw one nonce uniformly at random from `NONCE_MIN..=NONCE_MAX`.
///
/// Draws come from the operating system CSPRNG and are independent; there is
/// no sequencing or memory between calls.
pub fn random_nonce() -> u64 {
    OsRng.gen_range(NONCE_MIN..=NONCE_MAX)
}

/// Whether the first `difficulty` hex characters of `hash` are all `'0'`.
/// A hash shorter than the required prefix never qualifies.
pub fn meets_difficulty(hash: &str, difficulty: u32) -> bool {
    let want = difficulty as usize;
    hash.len() >= want && hash.bytes().take(want).all(|b| b == b'0')
}

/// Search for a digest over `field_hash` that meets `difficulty`.
///
/// Each attempt appends a fresh random nonce to the field digest and
/// re-hashes; failed attempts are discarded, not incremented. The loop is
/// unbounded, so difficulties too large for the six-digit nonce space
/// (above ~6) may never terminate. Callers pick the difficulty.
pub fn mine(field_hash: &str, difficulty: u32) -> MineOutcome {
    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        let nonce = random_nonce();
        let hash = sha256_hex(format!("{field_hash}{nonce}").as_bytes());
        if meets_difficulty(&hash, difficulty) {
            debug!(
                "POW - solved at difficulty {} (nonce={}, attempts={})",
                difficulty, nonce, attempts
            );
            return MineOutcome {
                hash,
                nonce,
                attempts,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonce_stays_in_range() {
        for _ in 0..1000 {
            let n = random_nonce();
            assert!((NONCE_MIN..=NONCE_MAX).contains(&n));
        }
    }

    #[test]
    fn difficulty_predicate_inspects_leading_chars() {
        assert!(meets_difficulty("00ab", 2));
        assert!(!meets_difficulty("0ab0", 2));
        assert!(meets_difficulty("000", 3));
        assert!(!meets_difficulty("00a", 3));
        assert!(meets_difficulty("anything", 0));
        assert!(!meets_difficulty("", 1));
        assert!(!meets_difficulty("00", 3));
    }

    #[test]
    fn mine_finds_qualifying_hash() {
        let outcome = mine("f2ca1bb6c7e907d06dafe4687e579fce", 2);
        assert!(outcome.hash.starts_with("00"));
        assert_eq!(outcome.hash.len(), 64);
        assert!((NONCE_MIN..=NONCE_MAX).contains(&outcome.nonce));
        assert!(outcome.attempts >= 1);
    }

    #[test]
    fn zero_difficulty_accepts_first_draw() {
        let outcome = mine("field", 0);
        assert_eq!(outcome.attempts, 1);
    }

    #[test]
    fn mined_hash_reproducible_from_winning_nonce() {
        let field = "deadbeef";
        let outcome = mine(field, 1);
        let recomputed = sha256_hex(format!("{}{}", field, outcome.nonce).as_bytes());
        assert_eq!(outcome.hash, recomputed);
    }
}
