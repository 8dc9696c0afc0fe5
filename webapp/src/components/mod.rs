pub mod anchor;
pub mod icon;
pub mod intro;
pub mod navigation;
pub mod reveal;
