pub use board::*;
pub use detector::*;
pub use errors::*;
pub use game::*;
pub use token::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod detector;
mod errors;
mod game;
mod token;
mod visualization;
