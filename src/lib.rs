//! Convert raster images into Brickadia save files.
//!
//! Each pixel with any opacity becomes one brick; the image either stands
//! upright like a mural or lies flat like a floor, and every brick shares
//! one asset, one material and one size chosen up front.

pub mod brick;
pub mod color;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod raster;
pub mod save;
pub mod time;
