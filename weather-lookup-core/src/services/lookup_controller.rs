//! 天气查询控制器

use std::sync::Arc;

use weather_lookup_provider::{CurrentWeather, TemperatureUnit, WeatherProvider};

use crate::error::{CoreError, CoreResult};
use crate::types::{LookupSnapshot, LookupState, Step, WeatherResult};
use crate::utils::text::{is_submittable, normalize_query};

/// 任何查询失败时展示给用户的消息
pub const LOOKUP_FAILED_MESSAGE: &str = "City not found, please try again";

/// 提交被拒绝的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// 当前步骤不接受该操作
    WrongStep,
    /// 已有查询在进行中
    InFlight,
    /// 查询文本过短
    TooShort,
}

/// 一次操作的结果（用于日志和测试，不影响状态语义）
#[derive(Debug)]
pub enum LookupOutcome {
    Rejected(RejectReason),
    Found,
    Failed(CoreError),
    Reset,
    /// 结果到达时已不属于当前查询，被丢弃
    Stale,
}

/// 已通过校验、等待执行的查询
///
/// 持有 Provider 的引用，可以移动到其他任务中执行。
pub struct PendingLookup {
    provider: Arc<dyn WeatherProvider>,
    query: String,
    generation: u64,
}

impl PendingLookup {
    /// 发送给 Provider 的查询（已去除首尾空白）
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 执行唯一一次 Provider 调用
    pub async fn run(self) -> CompletedLookup {
        log::debug!(
            "Lookup #{} started for '{}' via {}",
            self.generation,
            self.query,
            self.provider.id()
        );
        let result = self
            .provider
            .current_weather(&self.query)
            .await
            .map_err(CoreError::from);
        CompletedLookup {
            query: self.query,
            generation: self.generation,
            result,
        }
    }
}

impl std::fmt::Debug for PendingLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingLookup")
            .field("provider", &self.provider.id())
            .field("query", &self.query)
            .field("generation", &self.generation)
            .finish()
    }
}

/// 已完成的查询，交回控制器处理
#[derive(Debug)]
pub struct CompletedLookup {
    pub query: String,
    pub generation: u64,
    pub result: CoreResult<CurrentWeather>,
}

/// 查询控制器
///
/// 持有唯一的 `LookupState`，是状态的唯一修改者，也是 Provider 的唯一调用方。
pub struct LookupController {
    provider: Arc<dyn WeatherProvider>,
    state: LookupState,
    next_generation: u64,
}

impl LookupController {
    /// 创建处于初始状态的控制器
    #[must_use]
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            state: LookupState::default(),
            next_generation: 1,
        }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn snapshot(&self) -> LookupSnapshot {
        self.state.snapshot()
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    pub fn city_search_text(&self) -> &str {
        self.state.city_search_text()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    pub fn weather_result(&self) -> Option<&WeatherResult> {
        self.state.weather_result()
    }

    /// 温度所用单位
    pub fn unit(&self) -> TemperatureUnit {
        self.provider.unit()
    }

    /// 替换查询文本并清除错误，仅在 `Input` 下生效
    pub fn update_query(&mut self, text: impl Into<String>) {
        match &mut self.state {
            LookupState::Input { query, error, .. } => {
                *query = text.into();
                *error = None;
            }
            LookupState::Result { .. } => {
                log::debug!("update_query ignored outside of input step");
            }
        }
    }

    /// 校验并进入加载状态，返回待执行的查询
    ///
    /// 被拒绝时返回 `None`，状态不变。
    pub fn begin_submit(&mut self) -> Option<PendingLookup> {
        self.try_begin_submit().ok()
    }

    fn try_begin_submit(&mut self) -> Result<PendingLookup, RejectReason> {
        let LookupState::Input {
            query, in_flight, ..
        } = &mut self.state
        else {
            log::debug!("Submit rejected: not in input step");
            return Err(RejectReason::WrongStep);
        };

        if let Some(generation) = in_flight {
            log::debug!("Submit rejected: lookup #{generation} still in flight");
            return Err(RejectReason::InFlight);
        }

        if !is_submittable(query) {
            log::debug!("Submit rejected: query too short");
            return Err(RejectReason::TooShort);
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        *in_flight = Some(generation);

        Ok(PendingLookup {
            provider: Arc::clone(&self.provider),
            query: normalize_query(query).to_string(),
            generation,
        })
    }

    /// 应用查询结果
    pub fn complete(&mut self, completed: CompletedLookup) -> LookupOutcome {
        let LookupState::Input {
            query, in_flight, ..
        } = &mut self.state
        else {
            log::debug!("Discarding lookup #{}: not in input step", completed.generation);
            return LookupOutcome::Stale;
        };

        if *in_flight != Some(completed.generation) {
            log::debug!(
                "Discarding stale lookup #{} (in flight: {in_flight:?})",
                completed.generation
            );
            return LookupOutcome::Stale;
        }

        match completed.result {
            Ok(weather) => {
                log::info!("Lookup #{} succeeded for '{}'", completed.generation, completed.query);
                self.state = LookupState::Result {
                    query: std::mem::take(query),
                    weather: WeatherResult::from_weather(&completed.query, weather),
                };
                LookupOutcome::Found
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Lookup #{} failed: {e}", completed.generation);
                } else {
                    log::error!("Lookup #{} failed: {e}", completed.generation);
                }
                self.state = LookupState::Input {
                    query: std::mem::take(query),
                    error: Some(LOOKUP_FAILED_MESSAGE.to_string()),
                    in_flight: None,
                };
                LookupOutcome::Failed(e)
            }
        }
    }

    /// 提交当前查询并等待结果
    pub async fn submit(&mut self) -> LookupOutcome {
        match self.try_begin_submit() {
            Ok(pending) => {
                let completed = pending.run().await;
                self.complete(completed)
            }
            Err(reason) => LookupOutcome::Rejected(reason),
        }
    }

    /// 从 `Result` 回到初始状态
    pub fn reset(&mut self) -> LookupOutcome {
        match self.state {
            LookupState::Result { .. } => {
                self.state = LookupState::default();
                LookupOutcome::Reset
            }
            LookupState::Input { .. } => {
                log::debug!("reset ignored in input step");
                LookupOutcome::Rejected(RejectReason::WrongStep)
            }
        }
    }

    /// 回车：`Input` 下提交，`Result` 下重置
    ///
    /// 重置或被拒绝时返回 `None`。
    pub fn begin_enter_key(&mut self) -> Option<PendingLookup> {
        match self.state.step() {
            Step::Input => self.begin_submit(),
            Step::Result => {
                self.reset();
                None
            }
        }
    }

    /// 回车的完整版本
    pub async fn handle_enter_key(&mut self) -> LookupOutcome {
        match self.state.step() {
            Step::Input => self.submit().await,
            Step::Result => self.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::test_utils::{MockWeatherProvider, city_not_found, controller_with};

    fn london() -> CurrentWeather {
        CurrentWeather::new(21.0, 19.0, "clear sky")
    }

    // ===== 校验 =====

    #[tokio::test]
    async fn short_queries_are_silent_no_ops() {
        for text in ["", " ", "a", "  b  ", "\t\n", "京"] {
            let (mut controller, mock) = controller_with(vec![]);
            controller.update_query(text);
            let before = controller.snapshot();

            let outcome = controller.submit().await;

            assert!(matches!(
                outcome,
                LookupOutcome::Rejected(RejectReason::TooShort)
            ));
            assert_eq!(controller.snapshot(), before, "state changed for {text:?}");
            assert_eq!(mock.call_count().await, 0, "network call for {text:?}");
        }
    }

    #[tokio::test]
    async fn short_query_keeps_existing_error() {
        let (mut controller, _mock) = controller_with(vec![Err(city_not_found("zzzzz"))]);
        controller.update_query("zzzzz");
        controller.submit().await;
        assert_eq!(controller.error_message(), Some(LOOKUP_FAILED_MESSAGE));

        // 直接改状态模拟“错误仍在、文本过短”的情形
        controller.state = LookupState::Input {
            query: "z".to_string(),
            error: Some(LOOKUP_FAILED_MESSAGE.to_string()),
            in_flight: None,
        };
        controller.submit().await;
        assert_eq!(controller.error_message(), Some(LOOKUP_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn accepted_submit_calls_provider_once_with_trimmed_text() {
        for text in ["ab", "  london ", "new york", "\tparis\n"] {
            let (mut controller, mock) = controller_with(vec![Ok(london())]);
            controller.update_query(text);

            controller.submit().await;

            assert_eq!(mock.queries().await, vec![text.trim().to_string()]);
        }
    }

    // ===== 成功与失败 =====

    #[tokio::test]
    async fn success_moves_to_result() {
        let (mut controller, _mock) = controller_with(vec![Ok(london())]);
        controller.update_query("london");

        let outcome = controller.submit().await;

        assert!(matches!(outcome, LookupOutcome::Found));
        assert_eq!(controller.step(), Step::Result);
        assert!(controller.error_message().is_none());
        assert!(!controller.is_loading());
        let result = controller.weather_result().unwrap();
        assert!((result.temperature - 21.0).abs() < f64::EPSILON);
        assert!((result.feels_like - 19.0).abs() < f64::EPSILON);
        assert_eq!(result.description, "clear sky");
        assert_eq!(result.city_label, "London");
    }

    #[tokio::test]
    async fn failure_stays_in_input_with_message() {
        let (mut controller, _mock) = controller_with(vec![Err(city_not_found("zzzzz"))]);
        controller.update_query("zzzzz");

        let outcome = controller.submit().await;

        assert!(matches!(
            outcome,
            LookupOutcome::Failed(CoreError::Provider(ProviderError::CityNotFound { .. }))
        ));
        assert_eq!(controller.step(), Step::Input);
        assert_eq!(controller.error_message(), Some(LOOKUP_FAILED_MESSAGE));
        assert!(controller.weather_result().is_none());
        assert!(!controller.is_loading());
        assert_eq!(controller.city_search_text(), "zzzzz");
    }

    #[tokio::test]
    async fn every_provider_failure_shows_same_message() {
        let failures = vec![
            ProviderError::NetworkError {
                provider: "mock".to_string(),
                detail: "connection refused".to_string(),
            },
            ProviderError::Timeout {
                provider: "mock".to_string(),
                detail: "30s".to_string(),
            },
            ProviderError::ParseError {
                provider: "mock".to_string(),
                detail: "missing main.temp".to_string(),
            },
        ];
        for failure in failures {
            let (mut controller, _mock) = controller_with(vec![Err(failure)]);
            controller.update_query("london");
            controller.submit().await;
            assert_eq!(controller.error_message(), Some(LOOKUP_FAILED_MESSAGE));
        }
    }

    #[tokio::test]
    async fn retry_after_failure_issues_new_call() {
        let (mut controller, mock) =
            controller_with(vec![Err(city_not_found("londn")), Ok(london())]);
        controller.update_query("londn");
        controller.submit().await;
        controller.update_query("london");
        controller.submit().await;

        assert_eq!(mock.call_count().await, 2);
        assert_eq!(controller.step(), Step::Result);
    }

    // ===== 并发保护 =====

    #[tokio::test]
    async fn second_submit_while_loading_is_rejected() {
        let (mut controller, mock) = controller_with(vec![Ok(london())]);
        controller.update_query("london");

        let pending = controller.begin_submit().unwrap();
        assert!(controller.is_loading());
        assert!(controller.begin_submit().is_none());
        assert!(matches!(
            controller.submit().await,
            LookupOutcome::Rejected(RejectReason::InFlight)
        ));
        assert!(controller.begin_enter_key().is_none());

        let completed = pending.run().await;
        controller.complete(completed);

        assert_eq!(mock.call_count().await, 1);
        assert_eq!(controller.step(), Step::Result);
    }

    #[tokio::test]
    async fn typing_while_loading_keeps_request_alive() {
        let (mut controller, _mock) = controller_with(vec![Ok(london())]);
        controller.update_query("london");
        let pending = controller.begin_submit().unwrap();

        controller.update_query("londonx");
        assert!(controller.is_loading());

        let outcome = controller.complete(pending.run().await);
        assert!(matches!(outcome, LookupOutcome::Found));
        // 标签来自实际发送的查询
        assert_eq!(controller.weather_result().unwrap().city_label, "London");
        assert_eq!(controller.city_search_text(), "londonx");
    }

    #[tokio::test]
    async fn stale_completion_is_discarded() {
        let (mut controller, _mock) = controller_with(vec![Ok(london()), Ok(london())]);
        controller.update_query("london");
        let first = controller.begin_submit().unwrap();
        let completed = first.run().await;

        // 同一代号之外的结果一律丢弃
        let forged = CompletedLookup {
            query: completed.query.clone(),
            generation: completed.generation + 1,
            result: Ok(CurrentWeather::new(0.0, 0.0, "fog")),
        };
        assert!(matches!(controller.complete(forged), LookupOutcome::Stale));
        assert!(controller.is_loading());

        assert!(matches!(controller.complete(completed), LookupOutcome::Found));
        assert_eq!(controller.weather_result().unwrap().description, "clear sky");
    }

    #[tokio::test]
    async fn completion_after_reset_is_stale() {
        let (mut controller, _mock) = controller_with(vec![Ok(london()), Ok(london())]);
        controller.update_query("london");
        let pending = controller.begin_submit().unwrap();
        let completed = pending.run().await;
        let duplicate = CompletedLookup {
            query: completed.query.clone(),
            generation: completed.generation,
            result: Ok(london()),
        };
        controller.complete(completed);
        controller.reset();

        assert!(matches!(controller.complete(duplicate), LookupOutcome::Stale));
        assert_eq!(controller.state(), &LookupState::default());
    }

    #[tokio::test]
    async fn generations_increase() {
        let (mut controller, _mock) =
            controller_with(vec![Err(city_not_found("aa")), Err(city_not_found("bb"))]);
        controller.update_query("aa");
        let first = controller.begin_submit().unwrap();
        controller.complete(first.run().await);
        controller.update_query("bb");
        let second = controller.begin_submit().unwrap();
        assert!(second.generation() > 1);
        assert_eq!(second.query(), "bb");
    }

    // ===== 重置与回车 =====

    #[tokio::test]
    async fn reset_restores_initial_state() {
        let (mut controller, _mock) = controller_with(vec![Ok(london())]);
        controller.update_query("london");
        controller.submit().await;

        assert!(matches!(controller.reset(), LookupOutcome::Reset));
        assert_eq!(controller.state(), &LookupState::default());
        assert_eq!(controller.snapshot(), LookupState::default().snapshot());
    }

    #[test]
    fn reset_ignored_in_input() {
        let mock = Arc::new(MockWeatherProvider::new(vec![]));
        let mut controller = LookupController::new(mock);
        controller.update_query("london");
        assert!(matches!(
            controller.reset(),
            LookupOutcome::Rejected(RejectReason::WrongStep)
        ));
        assert_eq!(controller.city_search_text(), "london");
    }

    #[tokio::test]
    async fn update_query_clears_error() {
        let (mut controller, _mock) = controller_with(vec![Err(city_not_found("zzzzz"))]);
        controller.update_query("zzzzz");
        controller.submit().await;
        assert!(controller.error_message().is_some());

        controller.update_query("zzzzz");
        assert!(controller.error_message().is_none());
        assert_eq!(controller.city_search_text(), "zzzzz");
    }

    #[tokio::test]
    async fn update_query_ignored_in_result() {
        let (mut controller, _mock) = controller_with(vec![Ok(london())]);
        controller.update_query("london");
        controller.submit().await;

        controller.update_query("paris");
        assert_eq!(controller.city_search_text(), "london");
        assert_eq!(controller.step(), Step::Result);
    }

    #[tokio::test]
    async fn enter_key_dispatches_by_step() {
        let (mut controller, mock) = controller_with(vec![Ok(london())]);
        controller.update_query("london");

        assert!(matches!(
            controller.handle_enter_key().await,
            LookupOutcome::Found
        ));
        assert!(matches!(
            controller.handle_enter_key().await,
            LookupOutcome::Reset
        ));
        assert_eq!(controller.state(), &LookupState::default());

        // 空输入回车：无操作
        assert!(matches!(
            controller.handle_enter_key().await,
            LookupOutcome::Rejected(RejectReason::TooShort)
        ));
        assert_eq!(mock.call_count().await, 1);
    }

    #[tokio::test]
    async fn begin_enter_key_resets_in_result() {
        let (mut controller, _mock) = controller_with(vec![Ok(london())]);
        controller.update_query("london");
        let pending = controller.begin_enter_key().unwrap();
        controller.complete(pending.run().await);

        assert!(controller.begin_enter_key().is_none());
        assert_eq!(controller.step(), Step::Input);
        assert_eq!(controller.city_search_text(), "");
    }

    #[test]
    fn unit_comes_from_provider() {
        let mock = Arc::new(MockWeatherProvider::new(vec![]).with_unit(TemperatureUnit::Imperial));
        let controller = LookupController::new(mock);
        assert_eq!(controller.unit(), TemperatureUnit::Imperial);
    }
}
