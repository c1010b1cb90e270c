//! Clock - Source of the current calendar date
//!
//! Every date computation in the backend asks a [`Clock`] for "today"
//! instead of reading the system time directly, so handlers and use cases
//! can be driven with a pinned date in tests.

use chrono::{Local, NaiveDate};

/// 現在の暦日を提供するトレイト
///
/// ユースケースはこのトレイト経由でのみ「今日」を取得します。
pub trait Clock: Send + Sync + 'static {
    /// 今日の日付を取得
    ///
    /// ## Returns
    /// サーバーのローカルタイムゾーンにおける今日の日付
    fn today(&self) -> NaiveDate;
}

/// ローカルタイムゾーンの壁時計による実装
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定日付を返す時計（テスト用）
///
/// ## Examples
/// ```rust
/// use chrono::NaiveDate;
/// use kernel::clock::{Clock, FixedClock};
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
/// assert_eq!(FixedClock::new(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// 固定日付の時計を作成
    ///
    /// ## Arguments
    /// * `today` - 常に返す日付
    #[inline]
    pub const fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    #[inline]
    fn today(&self) -> NaiveDate {
        self.today
    }
}
