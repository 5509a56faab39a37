pub mod badges;
pub mod header;
pub mod slide;
pub mod statusbar;
