//! # 스레드 유틸리티
//!
//! 시간 단위를 지정한 sleep과, 신호를 받으면 중단되는 sleep을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::mpsc;
//! use crate::utils::thread_utils::{self, TimeUnit};
//!
//! thread_utils::sleep(100, TimeUnit::Milliseconds)?;
//!
//! let (tx, rx) = mpsc::channel();
//! // 다른 스레드에서 tx.send(()) 하면 Interrupted로 깨어남
//! thread_utils::sleep_interruptible(5, TimeUnit::Seconds, &rx)?;
//! ```

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::errors::{AppError, AppResult};

/// 시간 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// 단위 하나의 초 환산값 (초 미만 단위는 `None`)
    fn seconds_per_unit(&self) -> Option<u64> {
        match self {
            TimeUnit::Seconds => Some(1),
            TimeUnit::Minutes => Some(60),
            TimeUnit::Hours => Some(60 * 60),
            TimeUnit::Days => Some(24 * 60 * 60),
            _ => None,
        }
    }

    /// `amount` 단위를 `Duration`으로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidFormat` - 변환 결과가 `u64` 초 범위를 넘는 경우
    pub fn to_duration(&self, amount: u64) -> AppResult<Duration> {
        let duration = match self {
            TimeUnit::Nanoseconds => Duration::from_nanos(amount),
            TimeUnit::Microseconds => Duration::from_micros(amount),
            TimeUnit::Milliseconds => Duration::from_millis(amount),
            _ => {
                let seconds = self
                    .seconds_per_unit()
                    .and_then(|per_unit| amount.checked_mul(per_unit))
                    .ok_or_else(|| {
                        AppError::invalid_format(
                            "to_duration",
                            format!("{} {:?}", amount, self),
                            "duration overflow",
                        )
                    })?;
                Duration::from_secs(seconds)
            }
        };
        Ok(duration)
    }
}

/// 현재 스레드를 지정한 시간만큼 재웁니다.
pub fn sleep(amount: u64, unit: TimeUnit) -> AppResult<()> {
    thread::sleep(unit.to_duration(amount)?);
    Ok(())
}

/// 지정한 시간만큼 재우되, `interrupt`로 신호가 오면 즉시 깨어납니다.
///
/// 송신측이 모두 drop되면 신호가 올 수 없으므로 남은 시간을 마저 잡니다.
///
/// # Errors
///
/// * `AppError::Interrupted` - 대기 중 신호를 받은 경우
pub fn sleep_interruptible(amount: u64, unit: TimeUnit, interrupt: &Receiver<()>) -> AppResult<()> {
    let duration = unit.to_duration(amount)?;
    let started = Instant::now();

    match interrupt.recv_timeout(duration) {
        Ok(()) => Err(AppError::interrupted("sleep_interruptible")),
        Err(RecvTimeoutError::Timeout) => Ok(()),
        Err(RecvTimeoutError::Disconnected) => {
            thread::sleep(duration.saturating_sub(started.elapsed()));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_to_duration() {
        assert_eq!(TimeUnit::Nanoseconds.to_duration(1500).unwrap(), Duration::from_nanos(1500));
        assert_eq!(TimeUnit::Milliseconds.to_duration(250).unwrap(), Duration::from_millis(250));
        assert_eq!(TimeUnit::Minutes.to_duration(2).unwrap(), Duration::from_secs(120));
        assert_eq!(TimeUnit::Days.to_duration(1).unwrap(), Duration::from_secs(86_400));
    }

    #[test]
    fn test_to_duration_overflow() {
        assert!(matches!(TimeUnit::Days.to_duration(u64::MAX), Err(AppError::InvalidFormat { .. })));
        assert!(TimeUnit::Nanoseconds.to_duration(u64::MAX).is_ok());
    }

    #[test]
    fn test_sleep() {
        let started = Instant::now();
        sleep(20, TimeUnit::Milliseconds).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_sleep_interruptible_signalled() {
        let (tx, rx) = mpsc::channel();
        tx.send(()).unwrap();

        let started = Instant::now();
        let result = sleep_interruptible(10, TimeUnit::Seconds, &rx);

        assert!(matches!(result, Err(AppError::Interrupted { .. })));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_sleep_interruptible_timeout_and_dropped_sender() {
        let (tx, rx) = mpsc::channel::<()>();
        sleep_interruptible(10, TimeUnit::Milliseconds, &rx).unwrap();

        drop(tx);
        let started = Instant::now();
        sleep_interruptible(20, TimeUnit::Milliseconds, &rx).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
