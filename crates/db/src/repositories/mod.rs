mod outfit_repo;
mod password_reset_repo;
mod session_repo;
mod user_repo;
mod wardrobe_item_repo;

pub use outfit_repo::OutfitRepo;
pub use password_reset_repo::PasswordResetRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use wardrobe_item_repo::WardrobeItemRepo;
