pub mod clip;
pub mod offset;
pub mod shaping;
