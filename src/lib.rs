//! 공정 시뮬레이션 모델에서 뽑은 장비 값을 비용 상관식에 넣기 전에 정규화하는 라이브러리.
//!
//! 단위 변환, 장비 크기 제한 확인, 연도별 설비비 지수 조회를 제공하며
//! 모든 테이블은 읽기 전용이라 여러 스레드에서 그대로 공유할 수 있다.

pub mod config;
pub mod conversion;
pub mod escalation;
pub mod quantity;
pub mod sizing;
pub mod units;

pub use conversion::{ConversionError, UnitConverter};
pub use quantity::{ConversionResult, QuantityKind};
