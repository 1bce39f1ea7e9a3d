pub mod bit_vector;
pub mod cipher_context;
pub mod cipher_error;
pub mod cipher_traits;
pub mod encryption_transformation;
pub mod feistel_network;
pub mod key_expansion;
