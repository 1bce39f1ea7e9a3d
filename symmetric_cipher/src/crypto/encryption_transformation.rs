/// The round function of a Feistel cipher: one half-block plus one round key
/// in, one half-block out. Pure, no side effects.
pub trait EncryptionTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Vec<u8>;
}
