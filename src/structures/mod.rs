#[cfg(feature = "std")]
pub mod cache;
pub mod fp;
pub mod gf;
pub mod irreducible;
pub mod poly;
