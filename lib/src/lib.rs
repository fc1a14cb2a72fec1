mod data;
mod game;
mod results;

pub use data::Letter;
pub use data::Word;
pub use data::WordBank;
pub use game::*;
pub use results::*;
