pub mod block;
pub mod digest;
pub mod model;

pub use block::{Block, BlockView};
pub use model::Blockchain;

/// Default Proof-of-Work difficulty (number of leading zero hex characters).
pub const DEFAULT_DIFFICULTY: u32 = 3;

/// Difficulty bounds accepted at startup. The six-digit nonce space cannot
/// keep up with larger values and mining may never terminate.
pub const DIFF_MIN: u32 = 1;
pub const DIFF_MAX: u32 = 6;

/// Payload of the genesis block.
pub const GENESIS_DATA: &str = "Welcome to the hashchain!";

/// Predecessor link stored by the genesis block, which has no predecessor.
pub const GENESIS_PREVIOUS_HASH: &str = "0";
