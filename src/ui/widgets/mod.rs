mod permission_box;

pub use permission_box::PermissionBox;
