/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Rule-of-mixtures (ROM) property estimates
//!
//! Both estimates weight each element by its atomic fraction `x_i` and
//! molar volume `V_i`; element data comes from [`crate::elements`].

mod density;
pub mod errors;
mod mixing;
mod modulus;

pub use density::{calculate_density, density};
pub use errors::{PropertyError, Result};
pub use modulus::{calculate_youngs_modulus, youngs_modulus};
