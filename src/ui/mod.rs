pub mod canvas;
pub mod fourier;
pub mod notice;
pub mod panels;
pub mod texture;
