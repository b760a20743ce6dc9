mod binning_task;

pub use binning_task::BinningTask;
