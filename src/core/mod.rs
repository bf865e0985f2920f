pub mod game;
pub mod medley;
pub mod registry;
pub mod select;
pub mod template;
