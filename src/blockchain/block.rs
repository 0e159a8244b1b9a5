use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::digest::sha256_hex;
use super::{GENESIS_DATA, GENESIS_PREVIOUS_HASH};

/// A single block in the ledger holding one opaque payload.
///
/// Blocks are value records owned by the chain: once a block is sealed and
/// appended, nothing mutates it. The winning proof-of-work nonce is not
/// stored; only the mined digest survives in `hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64, // Unix timestamp in nanoseconds (UTC)
    pub data: String,
    pub previous_hash: String,
    pub hash: String, // Mined digest; empty until the chain manager seals the block
}

/// Read-only display record for one block, in chain-display order.
#[derive(Debug, Serialize)]
pub struct BlockView<'a> {
    pub index: u64,
    pub timestamp: i64,
    pub data: &'a str,
    pub hash: &'a str,
    pub previous_hash: &'a str,
}

impl Block {
    /// Create the genesis block (not mined yet; the chain manager seals it).
    pub fn genesis() -> Self {
        Self {
            index: 0,
            timestamp: now_nanos(),
            data: GENESIS_DATA.to_string(),
            previous_hash: GENESIS_PREVIOUS_HASH.to_string(),
            hash: String::new(),
        }
    }

    /// Create a candidate block (not mined yet; the chain manager seals it).
    pub fn new(index: u64, previous_hash: String, data: String) -> Self {
        Self {
            index,
            timestamp: now_nanos(),
            data,
            previous_hash,
            hash: String::new(),
        }
    }

    /// Digest of the block's fields: index, timestamp, data and previous
    /// hash, concatenated in that order with no separator. Computed once per
    /// candidate; the miner appends nonces to this value and re-hashes.
    pub fn field_hash(&self) -> String {
        let preimage = format!(
            "{}{}{}{}",
            self.index, self.timestamp, self.data, self.previous_hash
        );
        sha256_hex(preimage.as_bytes())
    }

    pub fn view(&self) -> BlockView<'_> {
        BlockView {
            index: self.index,
            timestamp: self.timestamp,
            data: &self.data,
            hash: &self.hash,
            previous_hash: &self.previous_hash,
        }
    }
}

fn now_nanos() -> i64 {
    Utc::now()
        .timestamp_nanos_opt()
        .expect("system time within nanosecond range")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block() -> Block {
        Block {
            index: 7,
            timestamp: 1_700_000_000_000_000_000,
            data: "payload".to_string(),
            previous_hash: "00abc".to_string(),
            hash: String::new(),
        }
    }

    #[test]
    fn field_hash_is_deterministic() {
        let b = sample_block();
        assert_eq!(b.field_hash(), b.field_hash());
    }

    #[test]
    fn field_hash_changes_with_every_field() {
        let base_hash = sample_block().field_hash();

        let mut changed = sample_block();
        changed.index += 1;
        assert_ne!(changed.field_hash(), base_hash);

        let mut changed = sample_block();
        changed.timestamp += 1;
        assert_ne!(changed.field_hash(), base_hash);

        let mut changed = sample_block();
        changed.data.push('x');
        assert_ne!(changed.field_hash(), base_hash);

        let mut changed = sample_block();
        changed.previous_hash.push('0');
        assert_ne!(changed.field_hash(), base_hash);
    }

    #[test]
    fn stored_hash_does_not_feed_field_hash() {
        let sealed = Block {
            hash: "00feed".to_string(),
            ..sample_block()
        };
        assert_eq!(sealed.field_hash(), sample_block().field_hash());
    }

    #[test]
    fn genesis_has_fixed_payload_and_zero_link() {
        let g = Block::genesis();
        assert_eq!(g.index, 0);
        assert_eq!(g.previous_hash, GENESIS_PREVIOUS_HASH);
        assert_eq!(g.data, GENESIS_DATA);
        assert!(g.hash.is_empty());
    }

    #[test]
    fn new_block_captures_current_time() {
        let before = now_nanos();
        let b = Block::new(3, "prev".to_string(), "data".to_string());
        let after = now_nanos();
        assert_eq!(b.index, 3);
        assert_eq!(b.previous_hash, "prev");
        assert!(b.timestamp >= before && b.timestamp <= after);
    }
}
