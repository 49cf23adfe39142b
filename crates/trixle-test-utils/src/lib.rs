//! Test utilities and scripted random sources for Trixle development.
//!
//! Provides [`RandomSource`] implementations that make walk behaviour
//! fully predictable: fixed tie-breakers ([`AlwaysUp`], [`AlwaysDown`]),
//! a source that forbids any draw ([`NoRandomness`]), a queue-backed
//! [`ScriptedSource`], and a [`CountingSource`] wrapper for asserting how
//! many draws a run consumed.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use trixle_core::RandomSource;

/// Breaks every 2D tie toward the upward move and yields zero noise.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysUp;

impl RandomSource for AlwaysUp {
    fn coin_flip(&mut self) -> bool {
        true
    }

    fn unit_f64(&mut self) -> f64 {
        0.5
    }

    fn standard_normal(&mut self) -> f64 {
        0.0
    }
}

/// Breaks every 2D tie toward the downward move and yields zero noise.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDown;

impl RandomSource for AlwaysDown {
    fn coin_flip(&mut self) -> bool {
        false
    }

    fn unit_f64(&mut self) -> f64 {
        0.5
    }

    fn standard_normal(&mut self) -> f64 {
        0.0
    }
}

/// Panics on any draw.
///
/// Pass this where the code under test must not consume randomness.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRandomness;

impl RandomSource for NoRandomness {
    fn coin_flip(&mut self) -> bool {
        panic!("NoRandomness: unexpected coin flip");
    }

    fn unit_f64(&mut self) -> f64 {
        panic!("NoRandomness: unexpected uniform draw");
    }

    fn standard_normal(&mut self) -> f64 {
        panic!("NoRandomness: unexpected normal draw");
    }
}

/// Replays pre-loaded draws in order and panics when a queue runs dry.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    coins: VecDeque<bool>,
    uniforms: VecDeque<f64>,
    normals: VecDeque<f64>,
    coins_used: usize,
    uniforms_used: usize,
    normals_used: usize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue coin flips.
    pub fn with_coins(mut self, coins: impl IntoIterator<Item = bool>) -> Self {
        self.coins.extend(coins);
        self
    }

    /// Queue uniform samples in `[0, 1)`.
    pub fn with_uniforms(mut self, uniforms: impl IntoIterator<Item = f64>) -> Self {
        self.uniforms.extend(uniforms);
        self
    }

    /// Queue standard normal samples.
    pub fn with_normals(mut self, normals: impl IntoIterator<Item = f64>) -> Self {
        self.normals.extend(normals);
        self
    }

    pub fn coins_used(&self) -> usize {
        self.coins_used
    }

    pub fn uniforms_used(&self) -> usize {
        self.uniforms_used
    }

    pub fn normals_used(&self) -> usize {
        self.normals_used
    }

    /// `true` once every queued draw has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.coins.is_empty() && self.uniforms.is_empty() && self.normals.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    fn coin_flip(&mut self) -> bool {
        self.coins_used += 1;
        self.coins
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedSource: coin #{} not scripted", self.coins_used))
    }

    fn unit_f64(&mut self) -> f64 {
        self.uniforms_used += 1;
        self.uniforms.pop_front().unwrap_or_else(|| {
            panic!(
                "ScriptedSource: uniform #{} not scripted",
                self.uniforms_used
            )
        })
    }

    fn standard_normal(&mut self) -> f64 {
        self.normals_used += 1;
        self.normals.pop_front().unwrap_or_else(|| {
            panic!("ScriptedSource: normal #{} not scripted", self.normals_used)
        })
    }
}

/// Wraps another source and counts every draw that passes through it.
#[derive(Clone, Debug)]
pub struct CountingSource<R> {
    inner: R,
    coins: usize,
    uniforms: usize,
    normals: usize,
}

impl<R: RandomSource> CountingSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            coins: 0,
            uniforms: 0,
            normals: 0,
        }
    }

    pub fn coins(&self) -> usize {
        self.coins
    }

    pub fn uniforms(&self) -> usize {
        self.uniforms
    }

    pub fn normals(&self) -> usize {
        self.normals
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RandomSource> RandomSource for CountingSource<R> {
    fn coin_flip(&mut self) -> bool {
        self.coins += 1;
        self.inner.coin_flip()
    }

    fn unit_f64(&mut self) -> f64 {
        self.uniforms += 1;
        self.inner.unit_f64()
    }

    fn standard_normal(&mut self) -> f64 {
        self.normals += 1;
        self.inner.standard_normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_replays_in_order() {
        let mut s = ScriptedSource::new()
            .with_coins([true, false])
            .with_normals([0.25]);
        assert!(s.coin_flip());
        assert!(!s.coin_flip());
        assert_eq!(s.standard_normal(), 0.25);
        assert!(s.is_exhausted());
        assert_eq!(s.coins_used(), 2);
        assert_eq!(s.normals_used(), 1);
    }

    #[test]
    #[should_panic(expected = "coin #1 not scripted")]
    fn scripted_panics_when_dry() {
        ScriptedSource::new().coin_flip();
    }

    #[test]
    fn counting_wraps_inner() {
        let mut c = CountingSource::new(AlwaysDown);
        assert!(!c.coin_flip());
        assert_eq!(c.standard_normal(), 0.0);
        assert_eq!(c.coins(), 1);
        assert_eq!(c.normals(), 1);
        assert_eq!(c.uniforms(), 0);
    }
}
