mod color;

pub use self::color::*;
