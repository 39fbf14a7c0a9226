pub mod data_structure;


pub use data_structure::error::{ListError, Result};
pub use data_structure::linked_list::{IntoIter, Iter, IterMut, LinkedList, Node};
pub use data_structure::position::Position;
