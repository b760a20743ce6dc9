mod ar1_generator;

pub use ar1_generator::Ar1Generator;
