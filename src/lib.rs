//! Library entrypoint for the stock alert backend.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

pub mod config;
pub mod models;
pub mod storage;

pub mod services;

pub mod controllers;
pub mod routes;

pub mod ws;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub store: storage::AlertStore,
    pub market: services::alphavantage::AlphaVantageClient,
}
