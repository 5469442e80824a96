pub mod goal;
pub mod period;
