pub mod preset;
pub mod preview;
pub mod run;
