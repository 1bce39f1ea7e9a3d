use crate::crypto::des_tables::{assert_table_shapes, PC1, PC2};
use symmetric_cipher::crypto::bit_vector::BitVector;
use symmetric_cipher::crypto::cipher_error::CipherError;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

pub const ROUNDS: usize = 16;
pub const KEY_SIZE: usize = 8;

/// Left-rotation amounts for the C and D halves, one entry per round.
const SHIFT_SCHEDULE: [usize; ROUNDS] = [
    1, 1, 2, 2, 2, 2, 2, 2,
    1, 2, 2, 2, 2, 2, 2, 1,
];

/// Expands a 64-bit master key into the 16 round subkeys of 48 bits each.
///
/// PC1 drops the parity bits and leaves 56; the halves C0 and D0 (28 bits
/// each) are rotated independently by the shift schedule, and each Cn‖Dn is
/// run through PC2. Decryption reuses this exact vector in reverse order,
/// there is no separate schedule.
pub fn expand_key(key: &[u8]) -> Result<Vec<BitVector>, CipherError> {
    if key.len() != KEY_SIZE {
        return Err(CipherError::InvalidInputLength {
            argument: "key",
            expected: KEY_SIZE,
            actual: key.len(),
        });
    }
    Ok(schedule(key))
}

fn schedule(key: &[u8]) -> Vec<BitVector> {
    assert_table_shapes();

    let permuted = BitVector::from_bytes(key).permute(&PC1);
    let (mut c, mut d) = permuted.split_at(28);

    let mut subkeys = Vec::with_capacity(ROUNDS);
    for &shift in &SHIFT_SCHEDULE {
        c.rotate_left(shift);
        d.rotate_left(shift);
        subkeys.push(c.concat(&d).permute(&PC2));
    }
    subkeys
}

/// `KeyExpansion` adapter; subkeys cross the seam packed as 6-byte vectors.
pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>> {
        assert_eq!(key.len(), KEY_SIZE, "DES key must be 8 bytes");
        schedule(key).iter().map(BitVector::to_bytes).collect()
    }
}
