//! fold based algorithms

pub(crate) mod lexicographical;
pub(crate) mod minmax;
pub(crate) mod modifying;
pub(crate) mod non_modifying;
pub(crate) mod permutation;
