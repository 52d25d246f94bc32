pub mod script;
pub mod store;
pub mod task_ops;
pub mod view;

pub use store::Store;
pub use view::Projection;
