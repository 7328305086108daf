pub mod card;
pub mod charts;
pub mod hints;
pub mod icons;
pub mod money;
