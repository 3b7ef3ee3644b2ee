pub mod cinema;
pub mod movie;
pub mod show_time;
pub mod ticket;
