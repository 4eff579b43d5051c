pub mod angle_bracket;
pub mod bold;
pub mod math;

pub use angle_bracket::AngleBracket;
pub use bold::Bold;
pub use math::Math;
