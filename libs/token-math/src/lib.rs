#![no_std]

pub mod allowance_math;
pub mod balance_math;

pub use allowance_math::*;
pub use balance_math::*;
