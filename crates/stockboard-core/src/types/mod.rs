//! 대시보드 전반에서 사용되는 공통 타입.

mod dates;
pub mod lenient;
mod market;
mod period;

pub use dates::*;
pub use market::*;
pub use period::*;
