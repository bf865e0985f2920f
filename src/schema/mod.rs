pub mod descriptor;
pub mod medley;
pub mod options;
