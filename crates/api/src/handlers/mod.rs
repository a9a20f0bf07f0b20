pub mod auth;
pub mod outfits;
pub mod shopping;
pub mod storage;
pub mod suggest;
pub mod wardrobe;
