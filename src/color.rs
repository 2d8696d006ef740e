//! Random hex color generation.

use rand::Rng;

/// Generate a random `#rrggbb` color, never pure black or pure white.
pub fn random_color() -> String {
    random_color_with(&mut rand::thread_rng())
}

/// Like [`random_color`], with a caller-supplied source of randomness.
pub fn random_color_with<R: Rng>(rng: &mut R) -> String {
    // 0x000000 and 0xffffff excluded by the range bounds
    let value: u32 = rng.gen_range(0x000001..0xffffff);
    format!("#{value:06x}")
}
