pub mod constant;
pub mod song;

pub use song::Song;
