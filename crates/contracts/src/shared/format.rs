//! Amount formatting for display

/// Group the digits of an integer the Indian way: the last three digits,
/// then pairs (`12,34,567`).
pub fn group_indian(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut groups: Vec<&str> = Vec::new();

    let (head, last_three) = if digits.len() > 3 {
        digits.split_at(digits.len() - 3)
    } else {
        ("", digits.as_str())
    };

    let mut rest = head;
    while rest.len() > 2 {
        let (left, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    groups.push(last_three);

    let grouped = groups.join(",");
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Whole rupees with the ₹ sign; fractions are dropped
pub fn format_inr(amount: f64) -> String {
    format!("₹{}", group_indian(amount.trunc() as i64))
}
