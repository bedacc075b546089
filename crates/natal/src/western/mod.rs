pub mod rulers;
pub mod signs;
pub mod sun_sign;
pub mod zodiac;

pub use rulers::{sign_ruler, sign_ruler_from_longitude, signs_ruled_by};
pub use signs::{sign_info, Element, Modality, Sign, SignInfo};
pub use sun_sign::calculate_sun_sign;
pub use zodiac::{angular_separation, degrees_to_sign, SignPosition};
