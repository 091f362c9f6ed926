pub mod difference;
pub mod member;
pub mod type_ref;

pub use difference::Difference;
pub use member::{
    AssemblyDescriptor, EventDescriptor, FieldDescriptor, Member, MethodDescriptor,
    PropertyDescriptor, TypeDescriptor,
};
pub use type_ref::TypeRef;
