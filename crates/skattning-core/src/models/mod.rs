pub mod catalog;
pub mod profile;
pub mod recommendation;
pub mod responses;
