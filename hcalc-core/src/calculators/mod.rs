//! Calculator forms: bound tables, request assembly and rendering.

mod idf;
mod quick_rational;
mod rational;

pub use idf::{IdfCalculator, CUSTOM_RETURN_PERIOD, IDF_FORM_ID, IDF_RULES};
pub use quick_rational::{QuickRationalCalculator, QUICK_RATIONAL_FORM_ID, QUICK_RATIONAL_RULES};
pub use rational::{load_coefficients, RationalCalculator, RATIONAL_FORM_ID, RATIONAL_RULES};
