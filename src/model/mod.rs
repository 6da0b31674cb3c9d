pub mod demand;
pub mod inventory;
pub mod price;
pub mod sale;
pub mod timeline;
