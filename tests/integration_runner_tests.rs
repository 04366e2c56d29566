//! # Runner Integration Tests / 运行器集成测试
//!
//! Drives the matrix runner and the consistency checks against a local
//! stub of the revenue service.
//!
//! 针对本地收入服务桩驱动矩阵运行器和一致性检查。

mod common;

use common::{API_KEY, RevenueStub, StubMode, TOKEN};
use revenue_matrix::core::{
    catalog::seed_catalog,
    checks::GroupsShape,
    config::Credentials,
    execution::run_matrix,
    models::{Expectation, ResponseStatus, TestCase},
    verification::{Verdict, VerificationCheck, run_verification},
};
use revenue_matrix::infra::http::HttpClient;
use std::time::Duration;

fn client(token: &str) -> HttpClient {
    HttpClient::new(
        Credentials {
            token: token.to_string(),
            api_key: API_KEY.to_string(),
        },
        Some(Duration::from_secs(5)),
    )
    .unwrap()
}

#[cfg(test)]
mod matrix_tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_catalog_meets_every_expectation() {
        let stub = RevenueStub::start(StubMode::Healthy);
        let catalog = seed_catalog();

        let results = run_matrix(&catalog, &client(TOKEN), stub.base_url(), Duration::ZERO).await;

        assert_eq!(results.len(), catalog.len());
        for (case, result) in catalog.iter().zip(&results) {
            assert_eq!(case.name, result.test_name);
            assert!(result.meets_expectation(), "{} got {}", case.name, result.status);
        }
        assert_eq!(
            results.iter().filter(|r| r.status == ResponseStatus::Http(400)).count(),
            10
        );
        assert!(results.iter().all(|r| !r.has_anomaly()));
    }

    #[tokio::test]
    async fn test_requests_are_sent_in_order_with_credentials() {
        let stub = RevenueStub::start(StubMode::Healthy);
        let cases = vec![
            TestCase::new("first", "/revenue?genre=Crime"),
            TestCase::new("second", "/revenue?genre=Crime&genre=Drama"),
            TestCase::new("third", "/revenue"),
        ];

        run_matrix(&cases, &client(TOKEN), stub.base_url(), Duration::ZERO).await;

        let requests = stub.requests();
        let queries: Vec<&str> = requests.iter().map(|r| r.query.as_str()).collect();
        assert_eq!(queries, ["genre=Crime", "genre=Crime&genre=Drama", ""]);
        assert!(requests.iter().all(|r| r.authorized));
    }

    #[tokio::test]
    async fn test_rejected_credentials_are_recorded_not_raised() {
        let stub = RevenueStub::start(StubMode::Healthy);
        let cases = vec![TestCase::new("Default, all data", "/revenue")];

        let results = run_matrix(&cases, &client("wrong"), stub.base_url(), Duration::ZERO).await;

        assert_eq!(results[0].status, ResponseStatus::Http(401));
        assert!(!results[0].is_success());
        assert!(!results[0].meets_expectation());
        assert!(results[0].response.contains("UNAUTHORIZED"));
    }

    #[tokio::test]
    async fn test_null_groups_are_flagged() {
        let stub = RevenueStub::start(StubMode::NullGroups);
        let cases = vec![TestCase::new("Non-existent movie ID", "/revenue?movie_id=nonexistent")
            .expecting(Expectation::Empty)];

        let results = run_matrix(&cases, &client(TOKEN), stub.base_url(), Duration::ZERO).await;

        assert_eq!(results[0].status, ResponseStatus::Http(200));
        assert_eq!(results[0].shape, Some(GroupsShape::Null));
        assert!(results[0].has_anomaly());
        assert!(!results[0].meets_expectation());
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_error_results() {
        let base_url = {
            let stub = RevenueStub::start(StubMode::Healthy);
            stub.base_url().to_string()
        };
        let cases = vec![
            TestCase::new("one", "/revenue"),
            TestCase::new("two", "/revenue?genre=Crime"),
        ];

        let results = run_matrix(&cases, &client(TOKEN), &base_url, Duration::ZERO).await;

        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.status, ResponseStatus::Error);
            assert_eq!(result.status.to_string(), "ERROR");
            assert!(!result.response.is_empty());
        }
    }

    #[tokio::test]
    async fn test_delay_is_applied_between_requests_only() {
        let stub = RevenueStub::start(StubMode::Healthy);
        let cases = vec![
            TestCase::new("one", "/revenue"),
            TestCase::new("two", "/revenue"),
        ];

        let started = std::time::Instant::now();
        run_matrix(&cases, &client(TOKEN), stub.base_url(), Duration::from_millis(300)).await;
        let elapsed = started.elapsed();

        assert!(elapsed >= Duration::from_millis(300));
        assert!(elapsed < Duration::from_millis(600) + Duration::from_secs(2));
    }
}

#[cfg(test)]
mod verification_tests {
    use super::*;

    #[tokio::test]
    async fn test_healthy_service_passes_both_checks() {
        let stub = RevenueStub::start(StubMode::Healthy);

        let outcomes = run_verification(&client(TOKEN), stub.base_url(), Duration::ZERO).await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].check, VerificationCheck::ParameterOrder);
        assert_eq!(outcomes[1].check, VerificationCheck::EmptyResults);
        assert!(outcomes.iter().all(|o| o.passed()));
    }

    #[tokio::test]
    async fn test_null_groups_fail_the_empty_check() {
        let stub = RevenueStub::start(StubMode::NullGroups);

        let outcomes = run_verification(&client(TOKEN), stub.base_url(), Duration::ZERO).await;

        assert!(outcomes[0].passed());
        assert_eq!(outcomes[1].verdict, Verdict::GroupsNull);
    }

    #[tokio::test]
    async fn test_plain_text_bodies_make_order_check_unavailable() {
        let stub = RevenueStub::start(StubMode::PlainText);

        let outcomes = run_verification(&client(TOKEN), stub.base_url(), Duration::ZERO).await;

        assert!(matches!(outcomes[0].verdict, Verdict::Unavailable(_)));
        assert!(!outcomes[1].passed());
    }

    #[tokio::test]
    async fn test_order_dependent_totals_fail_the_order_check() {
        let stub = RevenueStub::start(StubMode::OrderSensitive);

        let outcomes = run_verification(&client(TOKEN), stub.base_url(), Duration::ZERO).await;

        assert_eq!(
            outcomes[0].verdict,
            Verdict::TotalsDiffer {
                first: 1234.5,
                second: 999.0
            }
        );
        assert!(!outcomes[0].passed());
        assert!(outcomes[1].passed());

        let queries: Vec<_> = stub.requests().into_iter().map(|r| r.query).collect();
        assert_eq!(
            queries[..2],
            [
                "movie_id=tt6823368&genre=Crime".to_string(),
                "genre=Crime&movie_id=tt6823368".to_string()
            ]
        );
    }
}
