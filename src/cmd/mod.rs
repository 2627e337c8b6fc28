pub mod enumerate;
pub mod solve;
pub mod sweep;
pub mod welfare;
