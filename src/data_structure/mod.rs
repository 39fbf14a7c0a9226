pub mod error;
pub mod linked_list;
pub mod position;
