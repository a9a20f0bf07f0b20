pub mod outfit;
pub mod password_reset;
pub mod session;
pub mod user;
pub mod wardrobe_item;
