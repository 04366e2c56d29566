//! # Verification Unit Tests / 验证单元测试
//!
//! Tests for the verdict logic of the two consistency checks, independent
//! of any network access.
//!
//! 测试两个一致性检查的判定逻辑，不依赖网络访问。

use revenue_matrix::core::verification::{
    Verdict, VerificationCheck, evaluate_empty_results, evaluate_parameter_order,
};

#[cfg(test)]
mod parameter_order_tests {
    use super::*;

    #[test]
    fn test_order_equal_totals_pass() {
        let outcome = evaluate_parameter_order(Ok(1500.0), Ok(1500.0));
        assert!(outcome.passed());
        assert_eq!(outcome.check, VerificationCheck::ParameterOrder);
    }

    #[test]
    fn test_order_different_totals_fail() {
        let outcome = evaluate_parameter_order(Ok(1500.0), Ok(1200.0));
        assert_eq!(
            outcome.verdict,
            Verdict::TotalsDiffer {
                first: 1500.0,
                second: 1200.0
            }
        );
    }

    #[test]
    fn test_order_unavailable_total_fails_gracefully() {
        let outcome = evaluate_parameter_order(Ok(1.0), Err("connection refused".to_string()));
        assert_eq!(
            outcome.verdict,
            Verdict::Unavailable("connection refused".to_string())
        );
        assert!(!outcome.passed());
    }
}

#[cfg(test)]
mod empty_results_tests {
    use super::*;

    #[test]
    fn test_empty_results_outcomes() {
        assert!(evaluate_empty_results(r#"{"data":{"groups":[]}}"#).passed());
        assert_eq!(
            evaluate_empty_results(r#"{"data":{"groups":null}}"#).verdict,
            Verdict::GroupsNull
        );
        assert_eq!(
            evaluate_empty_results(r#"{"data":{"groups":[{"label":"x"}]}}"#).verdict,
            Verdict::GroupsUnexpected
        );
        assert_eq!(
            evaluate_empty_results(r#"{"data":{}}"#).verdict,
            Verdict::StructureMissing
        );
        assert_eq!(
            evaluate_empty_results("not json").verdict,
            Verdict::StructureMissing
        );
    }
}
