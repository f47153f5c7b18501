//! 부분 실패를 허용하는 병렬 수집.

use std::fmt::Display;
use std::future::Future;

use futures::future::join_all;
use tracing::warn;

/// 병렬 조회 결과 중 성공한 값과 실패 건수.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gathered<T> {
    /// 성공한 결과 (입력 순서 유지)
    pub values: Vec<T>,
    /// 실패한 조회 수
    pub failed: usize,
}

impl<T> Gathered<T> {
    pub fn succeeded(&self) -> usize {
        self.values.len()
    }

    /// 한 건 이상 시도했고 모두 실패했는지.
    pub fn all_failed(&self) -> bool {
        self.values.is_empty() && self.failed > 0
    }
}

/// 모든 future를 동시에 실행하고, 실패는 경고 로그만 남긴 채 성공한 값만 모읍니다.
///
/// 하나가 실패해도 나머지 결과에는 영향을 주지 않습니다.
pub async fn gather_best_effort<I, F, T, E>(label: &str, futures: I) -> Gathered<T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    let results = join_all(futures).await;

    let mut values = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => values.push(value),
            Err(e) => {
                failed += 1;
                warn!(task = label, index, error = %e, "병렬 조회 일부 실패");
            }
        }
    }

    Gathered { values, failed }
}
