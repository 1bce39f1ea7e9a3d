use crate::crypto::des::{DesCipher, BLOCK_SIZE};
use symmetric_cipher::crypto::cipher_error::CipherError;
use symmetric_cipher::crypto::cipher_traits::{
    CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds,
};

/// Two independent 64-bit keys, split from one 128-bit composite.
pub const KEY_SIZE: usize = 16;

/// Triple-DES in Encrypt-Decrypt-Encrypt composition over two keys: the first
/// half of the composite key is key A, the second is key B. Each inner pass is
/// a complete 16-round DES transform; both schedules are derived once at
/// construction and cached for every subsequent block.
#[derive(Debug)]
pub struct TripleDesCipher {
    key_a: DesCipher,
    key_b: DesCipher,
}

impl TripleDesCipher {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let (key_a, key_b) = Self::split_key(key)?;
        Ok(TripleDesCipher {
            key_a: DesCipher::new(key_a)?,
            key_b: DesCipher::new(key_b)?,
        })
    }

    fn split_key(key: &[u8]) -> Result<(&[u8], &[u8]), CipherError> {
        if key.len() != KEY_SIZE {
            return Err(CipherError::InvalidInputLength {
                argument: "key",
                expected: KEY_SIZE,
                actual: key.len(),
            });
        }
        Ok(key.split_at(KEY_SIZE / 2))
    }

    /// E(A) · D(B) · E(A).
    pub fn encrypt_block(&self, block: &[u8]) -> Result<[u8; BLOCK_SIZE], CipherError> {
        let first = self.key_a.encrypt_block(block)?;
        let second = self.key_b.decrypt_block(&first)?;
        self.key_a.encrypt_block(&second)
    }

    /// D(A) · E(B) · D(A), the exact inverse of the encryption order.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<[u8; BLOCK_SIZE], CipherError> {
        let first = self.key_a.decrypt_block(block)?;
        let second = self.key_b.encrypt_block(&first)?;
        self.key_a.decrypt_block(&second)
    }
}

impl CipherAlgorithm for TripleDesCipher {
    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        assert_eq!(data.len() % BLOCK_SIZE, 0, "data length must be a multiple of 8");
        data.chunks_exact(BLOCK_SIZE)
            .flat_map(|chunk| {
                TripleDesCipher::encrypt_block(self, chunk).expect("chunk is one block")
            })
            .collect()
    }

    fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        assert_eq!(data.len() % BLOCK_SIZE, 0, "data length must be a multiple of 8");
        data.chunks_exact(BLOCK_SIZE)
            .flat_map(|chunk| {
                TripleDesCipher::decrypt_block(self, chunk).expect("chunk is one block")
            })
            .collect()
    }
}

impl SymmetricCipher for TripleDesCipher {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let (key_a, key_b) = Self::split_key(key)?;
        self.key_a.set_key(key_a)?;
        self.key_b.set_key(key_b)
    }
}

impl SymmetricCipherWithRounds for TripleDesCipher {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(TripleDesCipher::encrypt_block(self, block)?.to_vec())
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(TripleDesCipher::decrypt_block(self, block)?.to_vec())
    }

    /// The block stays 64 bits; only the key widens.
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn export_round_keys(&self) -> Option<Vec<u8>> {
        let mut keys = self.key_a.export_round_keys()?;
        keys.extend(self.key_b.export_round_keys()?);
        Some(keys)
    }
}
