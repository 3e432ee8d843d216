pub mod button;
pub mod input;
pub mod label;
pub mod loading;

pub use button::{Button, ButtonProps};
pub use input::{Input, InputProps};
pub use label::{Label, LabelProps};
pub use loading::{Loading, LoadingProps};
