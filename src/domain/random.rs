//! Random tokens for trace ids and synthetic payloads

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random lowercase base-36 token of `len` characters
pub fn base36_token(len: usize) -> String {
    let mut rng = rand::thread_rng();

    (0..len)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect()
}
