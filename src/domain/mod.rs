pub mod state;
pub mod track;
