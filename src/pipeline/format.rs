use crate::domain::order::AggregatedOrder;

pub const CSV_HEADER: &str = "order_id,total_amount,total_taxes\n";

/// `"<order_id>,<total_amount>,<total_taxes>\n"`, decimals at two places.
pub fn format_row(rec: &AggregatedOrder) -> String {
    format!(
        "{},{},{}\n",
        rec.order_id,
        fixed2(rec.total_amount),
        fixed2(rec.total_taxes)
    )
}

/// Two decimal places. Values that round to zero print as `0.00`, never
/// `-0.00`.
fn fixed2(value: f64) -> String {
    let text = format!("{:.2}", value);
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned == "0.00" => unsigned.to_string(),
        _ => text,
    }
}

/// Header line followed by one formatted row per record.
pub fn format_lines(recs: &[AggregatedOrder]) -> Vec<String> {
    std::iter::once(CSV_HEADER.to_string())
        .chain(recs.iter().map(format_row))
        .collect()
}

/// The formatted row split into its three scalar values, trailing newline
/// stripped from the last one.
pub fn format_values(rec: &AggregatedOrder) -> [String; 3] {
    let line = format_row(rec);
    let mut parts = line
        .trim_end_matches('\n')
        .splitn(3, ',')
        .map(str::to_string);
    [
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    ]
}
