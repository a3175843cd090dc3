pub mod cards;
pub mod common;
pub mod icons;
pub mod layout;
