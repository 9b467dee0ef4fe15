use rand::Rng;

/// Characters sampled for not-yet-revealed positions.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_=+[]{}<>?/";

/// State of one scramble animation: a fixed target string and a cursor
/// counting how many leading characters have settled on their final value.
///
/// The cursor only moves forward. Driving the animation is the caller's
/// job - `advance` once per tick, `frame` to render, stop once `is_done`.
#[derive(Debug, Clone)]
pub struct Scramble {
    target: Vec<char>,
    revealed: usize,
    rate: usize,
}

impl Scramble {
    pub fn new(target: &str) -> Self {
        Self::with_rate(target, 1)
    }

    /// `rate` is how many characters settle per tick. A rate of 0 would
    /// never converge, so it is bumped to 1.
    pub fn with_rate(target: &str, rate: usize) -> Self {
        Scramble {
            target: target.chars().collect(),
            revealed: 0,
            rate: rate.max(1),
        }
    }

    /// True once every character is revealed. An empty target starts done.
    pub fn is_done(&self) -> bool {
        self.revealed >= self.target.len()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// Move the reveal cursor forward by the configured rate, clamped to the
    /// end of the target.
    pub fn advance(&mut self) {
        self.revealed = (self.revealed + self.rate).min(self.target.len());
    }

    /// Render the current display buffer: revealed positions show the target,
    /// the rest are resampled fresh from [`ALPHABET`] on every call so the
    /// unsettled tail visibly flickers.
    pub fn frame(&self, rng: &mut impl Rng) -> String {
        self.target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i < self.revealed {
                    c
                } else {
                    ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_converges_in_len_ticks() {
        let mut rng = rng();
        let mut anim = Scramble::new("home");
        assert!(!anim.is_done());
        for _ in 0..4 {
            assert!(!anim.is_done());
            anim.advance();
        }
        assert!(anim.is_done());
        assert_eq!(anim.frame(&mut rng), "home");
    }

    #[test]
    fn test_reveal_is_monotonic_and_prefix_stable() {
        let mut rng = rng();
        let target = "varun.fun";
        let mut anim = Scramble::new(target);
        let mut last_revealed = 0;
        while !anim.is_done() {
            anim.advance();
            assert!(anim.revealed() >= last_revealed);
            last_revealed = anim.revealed();
            let frame = anim.frame(&mut rng);
            // everything below the cursor matches the target exactly
            let prefix: String = target.chars().take(anim.revealed()).collect();
            assert!(frame.starts_with(&prefix));
        }
        assert_eq!(anim.frame(&mut rng), target);
    }

    #[test]
    fn test_frame_preserves_length() {
        let mut rng = rng();
        let mut anim = Scramble::new("projects");
        for _ in 0..20 {
            assert_eq!(anim.frame(&mut rng).chars().count(), 8);
            anim.advance();
        }
    }

    #[test]
    fn test_unrevealed_chars_come_from_alphabet() {
        let mut rng = rng();
        let anim = Scramble::new("zzzzzzzzzzzzzzzz");
        let frame = anim.frame(&mut rng);
        for c in frame.chars() {
            assert!(ALPHABET.contains(&(c as u8)), "unexpected char {c:?}");
        }
    }

    #[test]
    fn test_terminal_state_is_idempotent() {
        let mut rng = rng();
        let mut anim = Scramble::new("abc");
        for _ in 0..10 {
            anim.advance();
        }
        assert_eq!(anim.revealed(), 3);
        for _ in 0..3 {
            assert_eq!(anim.frame(&mut rng), "abc");
        }
    }

    #[test]
    fn test_empty_target_starts_done() {
        let mut rng = rng();
        let anim = Scramble::new("");
        assert!(anim.is_done());
        assert_eq!(anim.frame(&mut rng), "");
    }

    #[test]
    fn test_rate_clamps_at_end() {
        let mut anim = Scramble::with_rate("abcde", 3);
        anim.advance();
        assert_eq!(anim.revealed(), 3);
        anim.advance();
        assert_eq!(anim.revealed(), 5);
        assert!(anim.is_done());
    }

    #[test]
    fn test_zero_rate_is_bumped_to_one() {
        let mut anim = Scramble::with_rate("ab", 0);
        anim.advance();
        assert_eq!(anim.revealed(), 1);
    }

    #[test]
    fn test_multibyte_targets_count_chars_not_bytes() {
        let mut rng = rng();
        let mut anim = Scramble::new("héllo");
        assert_eq!(anim.frame(&mut rng).chars().count(), 5);
        for _ in 0..5 {
            anim.advance();
        }
        assert!(anim.is_done());
        assert_eq!(anim.frame(&mut rng), "héllo");
    }
}
