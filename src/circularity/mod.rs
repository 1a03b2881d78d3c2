//! 순환성 지수(FDCI/DCI) 관련 계산 모듈 모음.

pub mod costs;
pub mod indices;

pub use costs::*;
pub use indices::*;
