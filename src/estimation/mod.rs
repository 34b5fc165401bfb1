// src/estimation/mod.rs
pub mod city_name;
pub mod distance;
pub mod estimator;
pub mod trip;
