//! 대시보드 도메인 모델.

mod chart;
mod investor_flow;
mod ranking;
mod sector;
mod stock;

pub use chart::*;
pub use investor_flow::*;
pub use ranking::*;
pub use sector::*;
pub use stock::*;
