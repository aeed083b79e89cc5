pub mod home_controller;

pub mod alerts_controller;
pub mod scoring_controller;
pub mod screener_controller;
