pub mod course;
pub mod handicap;
pub mod round;
pub mod utils;

pub use course::*;
pub use handicap::*;
pub use round::*;
pub use utils::*;
