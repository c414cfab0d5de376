use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Stand-in for the submission round trip until a real endpoint exists.
pub const SUBMIT_DELAY_MS: u32 = 1500;

pub const MAX_FILES: usize = 10;
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024; // 5MB

pub const SHOP_NAME: &str = "Image Printing";
pub const SHOP_STREET: &str = "436 NINTH STREET";
pub const SHOP_CITY: &str = "SAN FRANCISCO, CA 94103";
pub const SHOP_EMAIL: &str = "bentung@imageprinting.us";
pub const SHOP_PHONE: &str = "415.553.7788";
pub const SHOP_FAX: &str = "415.864.7788";
