use des::crypto::des::DesCipher;
use des::crypto::triple_des::TripleDesCipher;
use hex_literal::hex;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use symmetric_cipher::crypto::cipher_error::CipherError;
use symmetric_cipher::crypto::cipher_traits::{
    CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds,
};

const KEY: [u8; 16] = hex!("11223344556677898798794535213544");
const MESSAGE: [u8; 8] = hex!("1234567890ABCDEF");
const CIPHERTEXT: [u8; 8] = hex!("3A3ACE650DB3BBDC");

#[test]
fn published_vector() {
    let cipher = TripleDesCipher::new(&KEY).unwrap();
    assert_eq!(cipher.encrypt_block(&MESSAGE).unwrap(), CIPHERTEXT);
    assert_eq!(cipher.decrypt_block(&CIPHERTEXT).unwrap(), MESSAGE);
}

#[test]
fn random_blocks_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x3DE5);
    for _ in 0..50 {
        let mut key = [0u8; 16];
        let mut block = [0u8; 8];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);

        let cipher = TripleDesCipher::new(&key).unwrap();
        let encrypted = cipher.encrypt_block(&block).unwrap();
        assert_eq!(cipher.decrypt_block(&encrypted).unwrap(), block);
    }
}

#[test]
fn equal_halves_degenerate_to_single_des() {
    // E_A(D_A(E_A(m))) = E_A(m) because D_A inverts E_A exactly, so a
    // composite key with both halves equal behaves as single DES.
    let single_key = hex!("133457799BBCDFF1");
    let composite = hex!("133457799BBCDFF1133457799BBCDFF1");

    let triple = TripleDesCipher::new(&composite).unwrap();
    let single = DesCipher::new(&single_key).unwrap();

    let message = hex!("0123456789ABCDEF");
    assert_eq!(
        triple.encrypt_block(&message).unwrap(),
        single.encrypt_block(&message).unwrap()
    );
    assert_eq!(triple.encrypt_block(&message).unwrap(), hex!("85E813540F0AB405"));
}

#[test]
fn both_halves_contribute() {
    let mut other_b = KEY;
    other_b[15] ^= 0x01;

    let original = TripleDesCipher::new(&KEY).unwrap();
    let changed = TripleDesCipher::new(&other_b).unwrap();
    assert_ne!(
        original.encrypt_block(&MESSAGE).unwrap(),
        changed.encrypt_block(&MESSAGE).unwrap()
    );
}

#[test]
fn composite_key_must_be_128_bits() {
    assert_eq!(
        TripleDesCipher::new(&KEY[..8]).unwrap_err(),
        CipherError::InvalidInputLength {
            argument: "key",
            expected: 16,
            actual: 8,
        }
    );
    assert!(TripleDesCipher::new(&[0u8; 24]).is_err());
}

#[test]
fn block_stays_64_bits() {
    let cipher = TripleDesCipher::new(&KEY).unwrap();
    assert_eq!(cipher.block_size(), 8);

    let err = cipher.encrypt_block(&MESSAGE[..7]).unwrap_err();
    assert!(matches!(
        err,
        CipherError::InvalidInputLength {
            argument: "block",
            ..
        }
    ));
}

#[test]
fn multi_block_buffers_round_trip() {
    let cipher = TripleDesCipher::new(&KEY).unwrap();
    let data = MESSAGE.repeat(4);
    let encrypted = cipher.encrypt(&data);
    assert_eq!(encrypted, CIPHERTEXT.repeat(4));
    assert_eq!(cipher.decrypt(&encrypted), data);
}

#[test]
fn set_key_replaces_both_schedules() {
    let mut cipher = TripleDesCipher::new(&[0u8; 16]).unwrap();
    cipher.set_key(&KEY).unwrap();
    assert_eq!(cipher.encrypt_block(&MESSAGE).unwrap(), CIPHERTEXT);

    assert!(cipher.set_key(&[0u8; 15]).is_err());
}

#[test]
fn exports_both_key_schedules() {
    let cipher = TripleDesCipher::new(&KEY).unwrap();
    let round_keys = cipher.export_round_keys().unwrap();
    assert_eq!(round_keys.len(), 2 * 16 * 6);
}
