//! Hashing utilities for trajectory comparison.
//!
//! Uses FNV-1a over the exact bit patterns of every hidden coordinate and
//! every observed coordinate. Two runs with the same seed and
//! configuration must produce the same fingerprint. These hashes are not
//! cryptographically secure.

use trixle_core::{Point2, Point3, Vec2, Vec3};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a planar walk's two paths.
///
/// The path length is folded in first, so a prefix never collides with
/// the full path by construction.
pub fn fingerprint_2d(hidden: &[Vec2], observed: &[Point2]) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, hidden.len() as u64);
    for p in hidden {
        for bits in p.to_bits() {
            hash = fnv1a_u64(hash, bits);
        }
    }
    for p in observed {
        hash = fnv1a_u64(hash, p.x as u64);
        hash = fnv1a_u64(hash, p.y as u64);
    }
    hash
}

/// Hash a spatial walk's two paths.
pub fn fingerprint_3d(hidden: &[Vec3], observed: &[Point3]) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, hidden.len() as u64);
    for p in hidden {
        for bits in p.to_bits() {
            hash = fnv1a_u64(hash, bits);
        }
    }
    for p in observed {
        hash = fnv1a_u64(hash, p.x as u64);
        hash = fnv1a_u64(hash, p.y as u64);
        hash = fnv1a_u64(hash, p.z as u64);
    }
    hash
}
