use byteorder::{ByteOrder, NativeEndian};
use log::trace;
use randomize::PCG32;

use crate::error::GridResult;

/// Generate a pseudorandom seed for a [`PCG32`] from OS entropy.
pub fn generate_seed() -> GridResult<(u64, u64)> {
    let mut seed = [0_u8; 16];

    getrandom::getrandom(&mut seed)?;

    let seed = (
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    );
    trace!("generated seed {:?}", seed);
    Ok(seed)
}

/// A [`PCG32`] seeded from OS entropy.
pub fn seeded_rng() -> GridResult<PCG32> {
    Ok(generate_seed()?.into())
}
