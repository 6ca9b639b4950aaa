use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Deterministic uniform sample in `[0, 1)` derived from a hashable tag.
/// The same tag always yields the same value, so a scene is reproducible
/// from its seed.
pub fn uniform01(tag: impl Hash) -> f32 {
    let mut hasher = DefaultHasher::new();
    tag.hash(&mut hasher);
    let hash = hasher.finish();

    ((hash >> 11) as f64 / (1u64 << 53) as f64) as f32
}

/// Deterministic uniform sample in `[-half, half]`.
pub fn uniform_symmetric(tag: impl Hash, half: f32) -> f32 {
    ((uniform01(tag) * 2.0) - 1.0) * half
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform01_stays_in_unit_interval() {
        for index in 0u64..512 {
            let value = uniform01((7u64, index));
            assert!((0.0..1.0).contains(&value), "sample {value} out of range");
        }
    }

    #[test]
    fn uniform01_is_deterministic_per_tag() {
        assert_eq!(uniform01((1u64, 2u64, 3u8)), uniform01((1u64, 2u64, 3u8)));
        assert_ne!(uniform01((1u64, 2u64, 0u8)), uniform01((1u64, 2u64, 1u8)));
    }

    #[test]
    fn uniform_symmetric_respects_half_range() {
        for index in 0u64..512 {
            let value = uniform_symmetric((3u64, index), 0.5);
            assert!((-0.5..=0.5).contains(&value), "sample {value} out of range");
        }
    }
}
