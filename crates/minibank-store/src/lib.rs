mod store;
mod array;
mod list;
mod kind;

pub use store::AccountStore;
pub use array::{ArrayStore, DEFAULT_ARRAY_CAPACITY};
pub use list::ListStore;
pub use kind::StoreKind;
