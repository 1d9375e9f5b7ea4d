pub mod params;
pub mod system;
