pub mod alphavantage;

pub mod alerts_service;
pub mod scoring_service;
