pub mod city_distances;
pub mod distance_bands;
pub mod vehicles;
