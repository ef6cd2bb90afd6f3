mod assets;
mod core;
mod input;
mod opts;

pub use self::core::AppCore;
pub(crate) use self::opts::Options;
