pub mod chat;
pub mod composer;
pub mod header;
pub mod overlays;
pub mod sidebar;
