pub mod menu;
pub mod sprite;
pub mod tilebuf;
