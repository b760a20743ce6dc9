mod ar1;

pub use ar1::Ar1Generator;
