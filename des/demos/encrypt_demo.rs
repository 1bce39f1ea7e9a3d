use rand::{rngs::StdRng, RngCore, SeedableRng};

use des::crypto::des::DesCipher;
use des::crypto::key_schedule::expand_key;
use des::crypto::triple_des::TripleDesCipher;

use symmetric_cipher::crypto::cipher_context::CipherContext;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join("-")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --------------------------------------------------------
    // 0) Key schedule walkthrough
    // --------------------------------------------------------
    println!("=== Key schedule ===");
    let key = [0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1];
    println!(" Key: {}", hex(&key));
    for (round, subkey) in expand_key(&key)?.iter().enumerate() {
        println!(" K{:<2} {}", round + 1, hex(&subkey.to_bytes()));
    }

    // --------------------------------------------------------
    // 1) Single-block DES
    // --------------------------------------------------------
    println!("\n=== DES single block ===");
    let message = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
    let cipher = DesCipher::new(&key)?;
    let encrypted = cipher.encrypt_block(&message)?;
    let decrypted = cipher.decrypt_block(&encrypted)?;
    println!(" Message:   {}", hex(&message));
    println!(" Encrypted: {} (should be 85-E8...B4-05)", hex(&encrypted));
    println!(" Decrypted: {}", hex(&decrypted));
    assert_eq!(decrypted, message);

    // --------------------------------------------------------
    // 2) Triple-DES
    // --------------------------------------------------------
    println!("\n=== Triple-DES ===");
    let composite_key = [
        0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x89,
        0x87, 0x98, 0x79, 0x45, 0x35, 0x21, 0x35, 0x44,
    ];
    let message3 = [0x12, 0x34, 0x56, 0x78, 0x90, 0xAB, 0xCD, 0xEF];
    let triple = TripleDesCipher::new(&composite_key)?;
    let encrypted3 = triple.encrypt_block(&message3)?;
    let decrypted3 = triple.decrypt_block(&encrypted3)?;
    println!(" Message:   {}", hex(&message3));
    println!(" Encrypted: {} (should be 3A-3A...BB-DC)", hex(&encrypted3));
    println!(" Decrypted: {}", hex(&decrypted3));
    assert_eq!(decrypted3, message3);

    // --------------------------------------------------------
    // 3) ECB over random data
    // --------------------------------------------------------
    println!("\n=== Random data, ECB ===");
    let mut rng = StdRng::seed_from_u64(0xDEAD_BEEF);
    let mut data = vec![0u8; 4096];
    rng.fill_bytes(&mut data);

    for (name, context) in [
        ("des", CipherContext::new(Box::new(DesCipher::new(&key)?))),
        (
            "3des",
            CipherContext::new(Box::new(TripleDesCipher::new(&composite_key)?)),
        ),
    ] {
        let encrypted = context.encrypt(&data)?;
        let restored = context.decrypt(&encrypted)?;
        assert_eq!(restored, data);
        println!(" {} over {} bytes OK", name, data.len());
    }

    Ok(())
}
