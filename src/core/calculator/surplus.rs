/// Signed balance of the day.
pub fn calculate_balance(worked: i64, expected: i64) -> i64 {
    worked - expected
}
