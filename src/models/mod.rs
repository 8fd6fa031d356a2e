mod dashboard;
mod notification;
mod order;
mod product;
mod user;

pub use dashboard::*;
pub use notification::*;
pub use order::*;
pub use product::*;
pub use user::*;
