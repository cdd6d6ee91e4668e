use rand::Rng;

/// Draws a multiplicative noise factor uniformly from `[1 - band, 1 + band]`.
///
/// A zero band returns exactly `1.0` without touching `rng`.
#[inline]
pub fn jitter_factor<R: Rng + ?Sized>(rng: &mut R, band: f64) -> f64 {
    if band == 0.0 {
        return 1.0;
    }
    rng.gen_range((1.0 - band)..=(1.0 + band))
}
