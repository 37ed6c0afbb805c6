use rand::Rng;

/// Process-wide transport state. Only the engine mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Always a valid catalog index.
    pub current_index: usize,
    pub is_playing: bool,
    pub is_shuffle: bool,
    pub is_repeat: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Step one position from `current` in a list of `len` entries, wrapping at
/// both ends.
pub fn step_index(current: usize, len: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }
    match direction {
        Direction::Next => (current + 1) % len,
        Direction::Previous => (current + len - 1) % len,
    }
}

/// Uniformly pick an index in `0..len` other than `current`. With a single
/// entry the only choice is `0`.
pub fn random_index_excluding<R: Rng + ?Sized>(rng: &mut R, current: usize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let pick = rng.gen_range(0..len - 1);
    if pick >= current { pick + 1 } else { pick }
}
