use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::SymmetricCipherWithRounds;
use rayon::prelude::*;
use std::sync::Arc;

/// Inputs at least this large are split across the rayon pool; below it the
/// sequential path wins for 8-byte blocks.
const PARALLEL_THRESHOLD: usize = 4 * 1024;

/// ECB driver over a whole buffer: every block is processed identically and
/// independently, so blocks can run in parallel with no shared mutable state.
/// The buffer length must be a whole number of blocks; there is no padding.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn SymmetricCipherWithRounds + Send + Sync>,
}

impl CipherContext {
    pub fn new(algorithm: Box<dyn SymmetricCipherWithRounds + Send + Sync>) -> Self {
        CipherContext {
            algorithm: Arc::from(algorithm),
        }
    }

    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process(data, true)
    }

    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process(data, false)
    }

    fn process(&self, data: &[u8], encrypt: bool) -> Result<Vec<u8>, CipherError> {
        let block_size = self.algorithm.block_size();
        if data.len() % block_size != 0 {
            return Err(CipherError::RaggedBuffer {
                argument: "data",
                block_size,
                actual: data.len(),
            });
        }

        let apply = |block: &[u8]| {
            if encrypt {
                self.algorithm.encrypt_block(block)
            } else {
                self.algorithm.decrypt_block(block)
            }
        };

        let blocks: Result<Vec<Vec<u8>>, CipherError> = if data.len() >= PARALLEL_THRESHOLD {
            data.par_chunks(block_size).map(apply).collect()
        } else {
            data.chunks(block_size).map(apply).collect()
        };

        Ok(blocks?.concat())
    }
}
