use rand::Rng;

/// Generates a fresh record identifier: 16 random bytes as 32 lower-case hex characters.
pub fn next_id() -> String {
    let bytes: [u8; 16] = rand::thread_rng().r#gen();
    hex::encode(bytes)
}
