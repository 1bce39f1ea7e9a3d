use crate::crypto::bit_vector::BitVector;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use std::sync::Arc;

/// Generic Feistel driver. Owns the L/R swap sequence and the final swap;
/// the round function and the round keys come from outside, so the same
/// network serves both directions: decryption is the identical walk over the
/// reversed key order.
pub struct FeistelNetwork {
    rounds: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl std::fmt::Debug for FeistelNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeistelNetwork")
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}

impl FeistelNetwork {
    pub fn new(
        rounds: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        FeistelNetwork {
            rounds,
            transformation,
        }
    }

    pub fn encrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        self.run(block, round_keys.iter())
    }

    pub fn decrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        self.run(block, round_keys.iter().rev())
    }

    /// Ln = Rn-1; Rn = Ln-1 XOR F(Rn-1, Kn). After the last round the output
    /// is R‖L: the mid-round swap is not applied a 17th time.
    fn run<'a, I>(&self, block: &[u8], round_keys: I) -> Vec<u8>
    where
        I: ExactSizeIterator<Item = &'a Vec<u8>>,
    {
        assert_eq!(
            round_keys.len(),
            self.rounds,
            "network of {} rounds got {} round keys",
            self.rounds,
            round_keys.len()
        );

        let bits = BitVector::from_bytes(block);
        let (mut left, mut right) = bits.split_at(bits.len() / 2);

        for round_key in round_keys {
            let f_out = self
                .transformation
                .transform(&right.to_bytes(), round_key);
            let next_right = left.xor(&BitVector::from_bytes(&f_out));
            left = right;
            right = next_right;
        }

        right.concat(&left).to_bytes()
    }
}
