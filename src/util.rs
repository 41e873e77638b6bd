pub mod content;
pub mod object;
pub mod token;
