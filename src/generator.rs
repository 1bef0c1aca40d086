use std::sync::Mutex;

use chrono::Utc;
use once_cell::sync::Lazy;

static GLOBAL_GENERATOR: Lazy<Mutex<Generator>> = Lazy::new(|| Mutex::new(Generator::new()));

/// Issues strictly increasing millisecond timestamps.
///
/// A wall-clock read that lands in an already-issued millisecond is bumped to
/// `last + 1`, so sustained sub-millisecond call rates drift ahead of the
/// clock by one tick per call. The drift bounds uniqueness, not accuracy.
///
/// # Examples
///
/// ```
/// use auracle_id::Generator;
///
/// let mut generator = Generator::new();
/// let first = generator.unique_timestamp();
/// let second = generator.unique_timestamp();
/// assert!(second > first);
/// ```
#[derive(Debug, Default)]
pub struct Generator {
    last_millis: u64,
}

impl Generator {
    /// Creates a generator that has issued no timestamps yet.
    pub const fn new() -> Generator {
        Generator { last_millis: 0 }
    }

    /// Returns a millisecond timestamp strictly greater than every previous
    /// return value of this generator.
    pub fn unique_timestamp(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let millis = if now <= self.last_millis {
            self.last_millis + 1
        } else {
            now
        };
        self.last_millis = millis;
        millis
    }
}

/// Draws a timestamp from the shared process-wide generator.
pub(crate) fn global_unique_timestamp() -> u64 {
    GLOBAL_GENERATOR.lock().unwrap().unique_timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_increasing() {
        let mut generator = Generator::new();
        let mut last = 0;
        for _ in 0..1000 {
            let millis = generator.unique_timestamp();
            assert!(millis > last, "{} did not exceed {}", millis, last);
            last = millis;
        }
    }

    #[test]
    fn test_tracks_wall_clock() {
        let mut generator = Generator::new();
        let before = Utc::now().timestamp_millis() as u64;
        let millis = generator.unique_timestamp();
        let after = Utc::now().timestamp_millis() as u64;
        assert!(millis >= before);
        assert!(millis <= after + 1);
    }

    #[test]
    fn test_same_millisecond_bumps() {
        let mut generator = Generator::new();
        let first = generator.unique_timestamp();
        // Burst well past a single millisecond of headroom.
        let burst: Vec<u64> = (0..100).map(|_| generator.unique_timestamp()).collect();
        assert!(burst.windows(2).all(|w| w[1] == w[0] + 1 || w[1] > w[0]));
        assert!(burst[0] > first);
    }

    #[test]
    fn test_global_generator_increases() {
        let first = global_unique_timestamp();
        let second = global_unique_timestamp();
        assert!(second > first);
    }
}
