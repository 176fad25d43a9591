pub mod navigator;

pub use navigator::*;
