pub mod field_name;
pub mod node;

pub use field_name::derive_field_name;
pub use node::ContentNode;
