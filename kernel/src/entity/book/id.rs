use rand::Rng;
use vodca::{AsRefln, Fromln};

pub const BOOK_ID_LENGTH: usize = 16;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Draws a fresh url-safe token. Uniqueness against live books is the caller's job.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..BOOK_ID_LENGTH)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect::<String>();
        Self(id)
    }
}
