pub mod copy;
pub mod text;

pub use copy::*;
pub use text::*;
