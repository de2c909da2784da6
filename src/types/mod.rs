mod layout;
mod user;

pub use layout::Layout;
pub use user::User;
#[cfg(test)]
pub use user::UserId;
