pub mod document;
pub mod result;
pub mod skill;
