#![cfg_attr(not(feature = "std"), no_std)]

pub mod automation;
pub mod ecosystem;

pub use automation::*;
pub use ecosystem::*;
