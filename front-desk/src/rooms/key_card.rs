//! Key card codes handed out at check-in

use rand::Rng;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const CODE_LEN: usize = 6;

/// `{prefix}-{room_number}-{6 random chars}`, e.g. `KC-101-7QH2MZ`
pub fn issue_key_card(prefix: &str, room_number: &str) -> String {
    let mut rng = rand::thread_rng();
    let code: String = (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect();
    format!("{prefix}-{room_number}-{code}")
}
