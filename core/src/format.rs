//! Table cell formatting
//!
//! Maps a column key and raw value to the string shown in the detail table.
//! Values are displayed at stored precision; the only locale treatment is
//! thousands grouping for currency columns.

use impact_types::CellValue;

/// Columns whose numeric values are identifiers, never percentages
const LABEL_COLUMNS: &[&str] = &["program", "region"];

/// Format a table cell. First matching rule wins:
///
/// 1. `earnings` above zero: `$` with grouped thousands
/// 2. `cost`: `$` with grouped thousands
/// 3. numbers outside the label columns: the number, with `%` unless `satisfaction`
/// 4. everything else: plain text
pub fn format_cell(column: &str, value: &CellValue) -> String {
    match (column, value) {
        ("earnings", CellValue::Number(n)) if *n > 0.0 => format!("${}", group_thousands(*n)),
        ("cost", CellValue::Number(n)) => format!("${}", group_thousands(*n)),
        ("cost", CellValue::Text(s)) => format!("${}", s),
        (col, CellValue::Number(n)) if !LABEL_COLUMNS.contains(&col) => {
            if col == "satisfaction" {
                n.to_string()
            } else {
                format!("{}%", n)
            }
        }
        (_, v) => v.to_string(),
    }
}

/// Render a number with `,` between thousands groups, keeping any fraction.
pub fn group_thousands(n: f64) -> String {
    let raw = n.to_string();
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    // inf / NaN have no digits to group
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return raw;
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Header text for a column key: `low_income` becomes `Low Income`.
pub fn column_label(column: &str) -> String {
    column
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
