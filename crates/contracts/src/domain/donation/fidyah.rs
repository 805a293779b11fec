/// Fidyah owed for `days` missed fasts at `rate` rupees per day
pub fn calculate_fidyah_amount(days: u32, rate: u32) -> u64 {
    u64::from(days) * u64::from(rate)
}
