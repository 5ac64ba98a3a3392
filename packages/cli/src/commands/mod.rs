mod candidates;
mod compile;

pub use candidates::{candidates, CandidatesArgs};
pub use compile::{compile, CompileArgs};
