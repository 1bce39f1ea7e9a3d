use crate::crypto::des_tables::{FP, IP};
use crate::crypto::key_schedule::{expand_key, ROUNDS};
use crate::crypto::round_function::DesRoundFunction;
use symmetric_cipher::crypto::bit_vector::BitVector;
use symmetric_cipher::crypto::cipher_error::CipherError;
use symmetric_cipher::crypto::cipher_traits::{
    CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds,
};
use symmetric_cipher::crypto::feistel_network::FeistelNetwork;
use std::sync::Arc;

pub const BLOCK_SIZE: usize = 8;

/// Single-key DES over one 64-bit block: IP, 16 Feistel rounds, the final
/// R16‖L16 swap, IP⁻¹. The key schedule is computed once at construction and
/// immutable afterwards, so one cipher may serve any number of blocks,
/// sequentially or concurrently.
#[derive(Debug)]
pub struct DesCipher {
    feistel_network: FeistelNetwork,
    round_keys: Vec<Vec<u8>>,
}

impl DesCipher {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let round_keys = expand_key(key)?.iter().map(BitVector::to_bytes).collect();
        Ok(DesCipher {
            feistel_network: FeistelNetwork::new(ROUNDS, Arc::new(DesRoundFunction)),
            round_keys,
        })
    }

    pub fn encrypt_block(&self, block: &[u8]) -> Result<[u8; BLOCK_SIZE], CipherError> {
        self.process_block(block, true)
    }

    /// Same structure as encryption; the network consumes K16..K1 instead.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<[u8; BLOCK_SIZE], CipherError> {
        self.process_block(block, false)
    }

    fn process_block(&self, block: &[u8], encrypt: bool) -> Result<[u8; BLOCK_SIZE], CipherError> {
        if block.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidInputLength {
                argument: "block",
                expected: BLOCK_SIZE,
                actual: block.len(),
            });
        }

        let permuted = BitVector::from_bytes(block).permute(&IP).to_bytes();
        let swapped = if encrypt {
            self.feistel_network
                .encrypt_with_round_keys(&permuted, &self.round_keys)
        } else {
            self.feistel_network
                .decrypt_with_round_keys(&permuted, &self.round_keys)
        };
        let output = BitVector::from_bytes(&swapped).permute(&FP).to_bytes();

        let mut result = [0u8; BLOCK_SIZE];
        result.copy_from_slice(&output);
        Ok(result)
    }
}

impl CipherAlgorithm for DesCipher {
    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        assert_eq!(data.len() % BLOCK_SIZE, 0, "data length must be a multiple of 8");
        data.chunks_exact(BLOCK_SIZE)
            .flat_map(|chunk| DesCipher::encrypt_block(self, chunk).expect("chunk is one block"))
            .collect()
    }

    fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        assert_eq!(data.len() % BLOCK_SIZE, 0, "data length must be a multiple of 8");
        data.chunks_exact(BLOCK_SIZE)
            .flat_map(|chunk| DesCipher::decrypt_block(self, chunk).expect("chunk is one block"))
            .collect()
    }
}

impl SymmetricCipher for DesCipher {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        self.round_keys = expand_key(key)?.iter().map(BitVector::to_bytes).collect();
        Ok(())
    }
}

impl SymmetricCipherWithRounds for DesCipher {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(DesCipher::encrypt_block(self, block)?.to_vec())
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(DesCipher::decrypt_block(self, block)?.to_vec())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// 16 subkeys of 6 bytes each.
    fn export_round_keys(&self) -> Option<Vec<u8>> {
        Some(self.round_keys.concat())
    }
}