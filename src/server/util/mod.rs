//! Small stateless helpers shared by services and controllers.

pub mod db;
pub mod parse;
pub mod password;
pub mod slug;
pub mod validate;
