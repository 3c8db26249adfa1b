pub mod button;
pub mod calendar;
pub mod door_grid;
pub mod door_tile;
pub mod header;
pub mod status_line;
