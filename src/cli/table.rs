/// Plain-text two-column table with padded columns and a rule under the
/// header. Callers style the surrounding section titles; cell content is
/// left untouched so widths line up.
pub(crate) fn format_table(headers: [&str; 2], rows: &[[String; 2]]) -> String {
    let mut widths = [headers[0].chars().count(), headers[1].chars().count()];
    for row in rows {
        widths[0] = widths[0].max(row[0].chars().count());
        widths[1] = widths[1].max(row[1].chars().count());
    }

    let mut output = String::new();
    output.push_str(&format!("{:<w$}  {}\n", headers[0], headers[1], w = widths[0]));
    output.push_str(&format!(
        "{}  {}\n",
        "-".repeat(widths[0]),
        "-".repeat(widths[1])
    ));
    for row in rows {
        output.push_str(&format!("{:<w$}  {}\n", row[0], row[1], w = widths[0]));
    }

    output
}
