pub mod favorite;
pub mod layout;
pub mod list;
pub mod mirror;
pub mod open;
pub mod recent;
pub mod search;
pub mod storage;
pub mod translate;
