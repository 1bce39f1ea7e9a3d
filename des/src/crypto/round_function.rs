use crate::crypto::des_tables::{E, P, S_BOXES};
use symmetric_cipher::crypto::bit_vector::BitVector;
use symmetric_cipher::crypto::encryption_transformation::EncryptionTransformation;

/// The DES round function F: a 32-bit half plus a 48-bit subkey gives 32 bits.
///
/// E expands the half to 48 bits (duplicating 16 of them), the subkey is
/// XORed in, and each of the eight 6-bit groups selects a nibble from its
/// S-box: the outer bits (0 and 5) pick the row, the middle four the column.
/// The concatenated nibbles go through P.
pub fn round_function(right: &BitVector, subkey: &BitVector) -> BitVector {
    debug_assert_eq!(right.len(), 32);
    debug_assert_eq!(subkey.len(), 48);

    let mixed = right.permute(&E).xor(subkey);

    let mut substituted = BitVector::with_capacity(32);
    for box_index in 0..8 {
        let group = box_index * 6;
        let row = (mixed.bit(group) as usize) << 1 | mixed.bit(group + 5) as usize;
        let mut column = 0;
        for offset in 1..5 {
            column = column << 1 | mixed.bit(group + offset) as usize;
        }
        substituted.push_nibble(S_BOXES[box_index][row * 16 + column]);
    }

    substituted.permute(&P)
}

/// `EncryptionTransformation` adapter for the generic Feistel network.
pub struct DesRoundFunction;

impl EncryptionTransformation for DesRoundFunction {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Vec<u8> {
        round_function(
            &BitVector::from_bytes(input_block),
            &BitVector::from_bytes(round_key),
        )
        .to_bytes()
    }
}
