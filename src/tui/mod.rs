pub mod app;
pub mod events;
pub mod login;
pub mod theme;
pub mod widgets;
