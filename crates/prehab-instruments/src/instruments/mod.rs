pub mod audit;
pub mod fagerstrom;
pub mod substance;
