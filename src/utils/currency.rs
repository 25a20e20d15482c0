//! Currency Formatting
//!
//! Renders rupee amounts the way the `en-IN` locale does: the last three
//! digits form one group, every group above that has two digits.
//! 126000 → "₹1,26,000". Amounts are rounded to whole rupees first.

/// Format a rupee amount, e.g. 45000.0 → "₹45,000", -2800.0 → "-₹2,800"
pub fn format_inr(value: f64) -> String {
    let rupees = value.round() as i64;
    let grouped = group_indian(&rupees.unsigned_abs().to_string());

    if rupees < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Short axis label in thousands, e.g. 36300.0 → "₹36k"
pub fn format_inr_compact(value: f64) -> String {
    let thousands = (value / 1000.0).round() as i64;
    format!("₹{}k", thousands)
}

/// Insert Indian-style separators into a plain digit string
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(315.0), "₹315");
        assert_eq!(format_inr(4800.0), "₹4,800");
    }

    #[test]
    fn test_lakh_grouping() {
        assert_eq!(format_inr(45000.0), "₹45,000");
        assert_eq!(format_inr(126000.0), "₹1,26,000");
        assert_eq!(format_inr(151000.0), "₹1,51,000");
        assert_eq!(format_inr(12345678.0), "₹1,23,45,678");
    }

    #[test]
    fn test_rounds_to_whole_rupees() {
        assert_eq!(format_inr(46499.6), "₹46,500");
        assert_eq!(format_inr(999.4), "₹999");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_inr(-2800.0), "-₹2,800");
        assert_eq!(format_inr(-0.2), "₹0");
    }

    #[test]
    fn test_compact() {
        assert_eq!(format_inr_compact(36300.0), "₹36k");
        assert_eq!(format_inr_compact(89000.0), "₹89k");
        assert_eq!(format_inr_compact(-2800.0), "₹-3k");
    }
}
