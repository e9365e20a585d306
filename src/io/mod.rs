pub mod du;
pub mod render;
