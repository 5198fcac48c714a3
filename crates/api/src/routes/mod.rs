mod banners;
mod gacha;
mod misc;

pub use banners::banner_routes;
pub use gacha::gacha_routes;
pub use misc::misc_routes;
