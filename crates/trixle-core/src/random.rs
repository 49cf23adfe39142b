//! The explicit random source threaded through every simulation.
//!
//! Walk kernels never touch ambient global randomness. Callers own a
//! [`RandomSource`] and pass it in by `&mut`, so seeding one source makes a
//! whole run reproducible and two sources give two independent runs.
//!
//! Every [`rand::RngCore`] is a `RandomSource`, so a seeded
//! `rand_chacha::ChaCha8Rng` can be passed straight in. Tests implement the
//! trait directly to script tie-breaks and noise.

use rand::{Rng, RngCore};

/// A source of the random draws a walk needs.
pub trait RandomSource {
    /// A fair coin flip. `true` selects the first of two options.
    fn coin_flip(&mut self) -> bool;

    /// A uniform sample in `[0, 1)`.
    fn unit_f64(&mut self) -> f64;

    /// A standard normal sample `N(0, 1)`.
    ///
    /// The default uses the Box-Muller transform over two
    /// [`unit_f64`](Self::unit_f64) draws.
    fn standard_normal(&mut self) -> f64 {
        let u1 = self.unit_f64().max(1e-300); // avoid ln(0)
        let u2 = self.unit_f64();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

impl<R: RngCore> RandomSource for R {
    fn coin_flip(&mut self) -> bool {
        self.random::<bool>()
    }

    fn unit_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}
