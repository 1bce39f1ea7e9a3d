use des::crypto::des::DesCipher;
use des::crypto::triple_des::TripleDesCipher;
use hex_literal::hex;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_error::CipherError;

const KEY: [u8; 8] = hex!("133457799BBCDFF1");
const MESSAGE: [u8; 8] = hex!("0123456789ABCDEF");
const CIPHERTEXT: [u8; 8] = hex!("85E813540F0AB405");

fn des_context() -> CipherContext {
    CipherContext::new(Box::new(DesCipher::new(&KEY).unwrap()))
}

#[test]
fn encrypts_each_block_independently() {
    let context = des_context();
    let encrypted = context.encrypt(&MESSAGE.repeat(3)).unwrap();
    assert_eq!(encrypted, CIPHERTEXT.repeat(3));
}

#[test]
fn ragged_buffer_is_rejected() {
    let context = des_context();
    let err = context.encrypt(&[0u8; 12]).unwrap_err();
    assert_eq!(
        err,
        CipherError::RaggedBuffer {
            argument: "data",
            block_size: 8,
            actual: 12,
        }
    );
    assert_eq!(
        err.to_string(),
        "data length 12 is not a whole number of 8-byte blocks"
    );
}

#[test]
fn empty_buffer_is_a_no_op() {
    let context = des_context();
    assert_eq!(context.encrypt(&[]).unwrap(), Vec::<u8>::new());
}

#[test]
fn large_buffer_round_trips_through_the_parallel_path() {
    // 64 KiB, well past the parallelism threshold.
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = vec![0u8; 64 * 1024];
    rng.fill_bytes(&mut data);

    let context = des_context();
    let encrypted = context.encrypt(&data).unwrap();
    assert_ne!(encrypted, data);
    assert_eq!(context.decrypt(&encrypted).unwrap(), data);
}

#[test]
fn parallel_and_sequential_paths_agree() {
    let context = des_context();
    let block: Vec<u8> = MESSAGE.to_vec();

    // 1024 identical blocks take the parallel path; in ECB the output must
    // still be the single-block ciphertext repeated.
    let data = block.repeat(1024);
    let encrypted = context.encrypt(&data).unwrap();
    assert_eq!(encrypted, CIPHERTEXT.repeat(1024));
}

#[test]
fn drives_triple_des_too() {
    let key = hex!("11223344556677898798794535213544");
    let context = CipherContext::new(Box::new(TripleDesCipher::new(&key).unwrap()));

    let message = hex!("1234567890ABCDEF");
    let encrypted = context.encrypt(&message.repeat(2)).unwrap();
    assert_eq!(encrypted, hex!("3A3ACE650DB3BBDC").repeat(2));
    assert_eq!(context.decrypt(&encrypted).unwrap(), message.repeat(2));
}
