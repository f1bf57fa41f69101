//! 도메인 모델.
//!
//! 외부 저장소에서 가져온 질의 결과를 메모리 내 컬렉션으로 표현합니다.

pub mod entry;
pub mod profile;

pub use entry::*;
pub use profile::*;
