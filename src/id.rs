use rand::Rng;

/// URL-safe alphabet paste ids are drawn from.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of a paste id.
const ID_LENGTH: usize = 10;

/// Generate a _probably_ unique paste id.
///
/// Each character is chosen independently from a CSPRNG. Ids are not checked
/// against the store; at 64^10 possible values a collision surfaces as a
/// primary-key conflict on insert instead.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
