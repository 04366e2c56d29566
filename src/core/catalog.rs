//! # Seed Catalog / 种子目录
//!
//! The fixed matrix of revenue queries used when the configuration defines no
//! cases of its own. Order matters: results are reported in this order.
//!
//! 当配置未定义任何用例时使用的固定收入查询矩阵。顺序很重要：结果按此顺序报告。

use crate::core::models::{Expectation, TestCase};

/// Path of the endpoint under test.
pub const REVENUE_ENDPOINT: &str = "/revenue";

fn case(name: &str, url: &str) -> TestCase {
    TestCase::new(name, url)
}

fn empty(name: &str, url: &str) -> TestCase {
    TestCase::new(name, url).expecting(Expectation::Empty)
}

/// Builds the seed catalog.
/// 构建种子目录。
pub fn seed_catalog() -> Vec<TestCase> {
    vec![
        // Base cases
        case("Default, all data", "/revenue"),
        case("Explicit all timeframe", "/revenue?timeframe=all"),
        // Timeframe variants
        case("Daily timeframe", "/revenue?timeframe=daily"),
        case("Weekly timeframe", "/revenue?timeframe=weekly"),
        case("Monthly timeframe", "/revenue?timeframe=monthly"),
        case("Yearly timeframe", "/revenue?timeframe=yearly"),
        // Single filters
        case("Filter by movie ID", "/revenue?movie_id=tt6823368"),
        case("Filter by slot ID (Morning)", "/revenue?slot_id=1"),
        case("Filter by slot ID (Afternoon)", "/revenue?slot_id=2"),
        case("Filter by slot ID (Evening)", "/revenue?slot_id=3"),
        case("Filter by Crime genre", "/revenue?genre=Crime"),
        case("Filter by Drama genre", "/revenue?genre=Drama"),
        case("Filter by Action genre", "/revenue?genre=Action"),
        // Month and year
        case("Filter by April", "/revenue?month=4"),
        case("Filter by May", "/revenue?month=5"),
        case("Filter by year 2025", "/revenue?year=2025"),
        case("Filter by April 2025", "/revenue?month=4&year=2025"),
        case("Filter by May 2025", "/revenue?month=5&year=2025"),
        // Movie + timeframe
        case("Movie with daily timeframe", "/revenue?movie_id=tt6823368&timeframe=daily"),
        case("Movie with weekly timeframe", "/revenue?movie_id=tt6823368&timeframe=weekly"),
        case("Movie with monthly timeframe", "/revenue?movie_id=tt6823368&timeframe=monthly"),
        case("Movie with yearly timeframe", "/revenue?movie_id=tt6823368&timeframe=yearly"),
        // Slot + timeframe
        case("Slot with daily timeframe", "/revenue?slot_id=3&timeframe=daily"),
        case("Slot with weekly timeframe", "/revenue?slot_id=3&timeframe=weekly"),
        case("Slot with monthly timeframe", "/revenue?slot_id=3&timeframe=monthly"),
        case("Slot with yearly timeframe", "/revenue?slot_id=3&timeframe=yearly"),
        // Genre + timeframe
        case("Genre with daily timeframe", "/revenue?genre=Crime&timeframe=daily"),
        case("Genre with weekly timeframe", "/revenue?genre=Crime&timeframe=weekly"),
        case("Genre with monthly timeframe", "/revenue?genre=Crime&timeframe=monthly"),
        case("Genre with yearly timeframe", "/revenue?genre=Crime&timeframe=yearly"),
        // Pairs
        case("Movie + slot", "/revenue?movie_id=tt6823368&slot_id=3"),
        case("Movie + genre", "/revenue?movie_id=tt6823368&genre=Crime"),
        case("Slot + genre", "/revenue?slot_id=3&genre=Crime"),
        case("Movie + month", "/revenue?movie_id=tt6823368&month=4"),
        case("Movie + year", "/revenue?movie_id=tt6823368&year=2025"),
        case("Slot + month", "/revenue?slot_id=3&month=4"),
        case("Slot + year", "/revenue?slot_id=3&year=2025"),
        case("Genre + month", "/revenue?genre=Crime&month=4"),
        case("Genre + year", "/revenue?genre=Crime&year=2025"),
        // Triples
        case("Movie + slot + timeframe", "/revenue?movie_id=tt6823368&slot_id=3&timeframe=monthly"),
        case("Movie + genre + timeframe", "/revenue?movie_id=tt6823368&genre=Crime&timeframe=monthly"),
        case("Slot + genre + timeframe", "/revenue?slot_id=3&genre=Crime&timeframe=monthly"),
        case("Movie + slot + month", "/revenue?movie_id=tt6823368&slot_id=3&month=4"),
        case("Movie + genre + month", "/revenue?movie_id=tt6823368&genre=Crime&month=4"),
        case("Slot + genre + month", "/revenue?slot_id=3&genre=Crime&month=4"),
        case("Movie + slot + year", "/revenue?movie_id=tt6823368&slot_id=3&year=2025"),
        case("Movie + genre + year", "/revenue?movie_id=tt6823368&genre=Crime&year=2025"),
        case("Slot + genre + year", "/revenue?slot_id=3&genre=Crime&year=2025"),
        // Quads
        case("Movie + slot + month + year", "/revenue?movie_id=tt6823368&slot_id=3&month=4&year=2025"),
        case("Movie + genre + month + year", "/revenue?movie_id=tt6823368&genre=Crime&month=4&year=2025"),
        case("Slot + genre + month + year", "/revenue?slot_id=3&genre=Crime&month=4&year=2025"),
        // Parameter order permutations
        case("Movie then genre", "/revenue?movie_id=tt6823368&genre=Crime"),
        case("Genre then movie", "/revenue?genre=Crime&movie_id=tt6823368"),
        case("Timeframe then slot", "/revenue?timeframe=monthly&slot_id=3"),
        case("Slot then timeframe", "/revenue?slot_id=3&timeframe=monthly"),
        case("Complex param order", "/revenue?slot_id=3&movie_id=tt6823368&timeframe=daily"),
        case("Month then year", "/revenue?month=4&year=2025"),
        case("Year then month", "/revenue?year=2025&month=4"),
        // Invalid parameters
        case("Invalid timeframe", "/revenue?timeframe=invalid"),
        case("Invalid month (too high)", "/revenue?month=13"),
        case("Invalid month (zero)", "/revenue?month=0"),
        case("Non-numeric month", "/revenue?month=abc"),
        // Mutually exclusive parameters
        case("Timeframe + month", "/revenue?timeframe=daily&month=4"),
        case("Timeframe + year", "/revenue?timeframe=weekly&year=2025"),
        case("Timeframe + month + year", "/revenue?timeframe=monthly&month=4&year=2025"),
        case("Timeframe + month + movie", "/revenue?timeframe=yearly&month=4&movie_id=tt6823368"),
        case("Timeframe + year + slot", "/revenue?timeframe=daily&year=2025&slot_id=3"),
        case("Timeframe + month + genre", "/revenue?timeframe=weekly&month=4&genre=Crime"),
        // Nonexistent data
        empty("Non-existent movie ID", "/revenue?movie_id=nonexistent"),
        empty("Non-existent slot ID", "/revenue?slot_id=999"),
        empty("Non-existent genre", "/revenue?genre=NonexistentGenre"),
        empty("Time period with no data", "/revenue?month=1&year=2020"),
        empty("Multiple filters with no data", "/revenue?month=1&year=2020&movie_id=tt6823368"),
        // Corner cases
        case(
            "Multiple dimensions with valid data",
            "/revenue?movie_id=tt6823368&slot_id=1&genre=Drama&month=4&year=2025",
        ),
        empty(
            "All filters with non-existent value",
            "/revenue?movie_id=nonexistent&slot_id=999&genre=NonexistentGenre",
        ),
        empty("Mixed valid/invalid filters", "/revenue?movie_id=tt6823368&slot_id=999&genre=Drama"),
    ]
}
