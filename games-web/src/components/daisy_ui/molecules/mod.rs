pub mod card;
pub mod validator;

pub use card::{Card, CardProps};
pub use validator::{ValidationState, Validator, ValidatorProps};
