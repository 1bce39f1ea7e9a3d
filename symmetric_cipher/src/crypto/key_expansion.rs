/// Derives the per-round keys from a master key. Runs once per key; the
/// output is immutable and may be reused across any number of blocks.
pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>>;
}
