/// Horizontal alignment of a column's header and cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Right,
}

/// Value of one cell before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue {
    Text(&'static str),
    Number(i64),
}

/// Static descriptor of one displayable column.
///
/// The `value` accessor is the build-time guarantee that `id` names a real
/// field of the row type: a column cannot be declared without saying how to
/// read it. Header and body both iterate the same descriptor sequence, so
/// reordering a schema can never desynchronize labels from data.
pub struct Column<R> {
    pub id: &'static str,
    pub label: &'static str,
    pub align: CellAlign,
    pub min_width: Option<f32>,
    /// Applied iff the accessor yields a numeric value.
    pub format: Option<fn(i64) -> String>,
    pub value: fn(&R) -> CellValue,
}

impl<R> Column<R> {
    /// Render a cell. Text passes through untouched; numbers go through the
    /// column's formatter when one is declared.
    pub fn display(&self, row: &R) -> String {
        match (self.value)(row) {
            CellValue::Number(number) => match self.format {
                Some(format) => format(number),
                None => number.to_string(),
            },
            CellValue::Text(text) => text.to_owned(),
        }
    }
}

/// `en-US` style thousands grouping, matching the storefront's
/// `toLocaleString` columns.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
