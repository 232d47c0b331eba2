mod database;
mod mock_impl;

pub use mock_impl::{Mock, mock};
