use log::info;

use super::Block;
use super::block::BlockView;
use crate::miner;

/// Simple in-memory hash-chained ledger with Proof-of-Work appends.
///
/// The chain is append-only: blocks enter through the genesis constructor or
/// `mine_block` and are never removed, reordered, or edited in place. The
/// difficulty is fixed when the chain is created.
#[derive(Debug)]
pub struct Blockchain {
    chain: Vec<Block>,
    difficulty: u32,
}

impl Blockchain {
    /// Initialize a new chain at `difficulty`, mining its genesis block
    /// before returning. The returned chain holds exactly one block.
    pub fn new(difficulty: u32) -> Self {
        let mut bc = Self {
            chain: Vec::new(),
            difficulty,
        };
        bc.seal(Block::genesis());
        bc
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Blockchain should always have at least the genesis block")
    }

    /// Mine and append a new block carrying `data`; returns the new tail.
    pub fn mine_block(&mut self, data: String) -> &Block {
        let tail = self.last_block();
        let index = tail.index + 1;
        let previous_hash = tail.hash.clone();

        self.seal(Block::new(index, previous_hash, data));
        self.last_block()
    }

    /// Run the proof-of-work search over a candidate block and append the
    /// sealed result. The block's hash is set exactly once, here.
    fn seal(&mut self, mut block: Block) {
        let outcome = miner::mine(&block.field_hash(), self.difficulty);
        block.hash = outcome.hash;
        info!(
            "MINER - sealed block #{} (hash={}, nonce={}, attempts={})",
            block.index, block.hash, outcome.nonce, outcome.attempts
        );
        self.chain.push(block);
    }

    /// Integrity pass over adjacent pairs, from the second block onward.
    ///
    /// A pair is flagged only when the stored predecessor hash differs from
    /// the previous block's hash AND its timestamp is earlier than the
    /// previous block's. A broken hash link with non-regressing timestamps
    /// therefore passes, where a conventional audit would fail it. Chains of
    /// zero or one block always verify.
    pub fn verify_integrity(&self) -> bool {
        for i in 1..self.chain.len() {
            let current = &self.chain[i];
            let prev = &self.chain[i - 1];

            if current.previous_hash != prev.hash && current.timestamp < prev.timestamp {
                return false;
            }
        }
        true
    }

    /// Display records for every block, in chain order. Pure read.
    pub fn render(&self) -> Vec<BlockView<'_>> {
        self.chain.iter().map(Block::view).collect()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }
}
