//! Domain constants and colour math for the hero background.

pub mod palette;
pub mod settings;
