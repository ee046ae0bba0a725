//! Canvas background components and the pieces they share.

pub mod frame_loop;
pub mod host;
pub mod matrix_rain;
pub mod particle_field;
pub mod surface;
pub mod theme;
