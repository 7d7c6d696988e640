//! Plain-text rendering of engine results and step tables.

#![allow(clippy::pedantic, clippy::nursery, unknown_lints)]

use arith_core::{DivisionResult, MultiplicationResult, StepRecord, StepTrace};

const HEADERS: [&str; 10] = [
    "Step",
    "Initial A",
    "Initial Q",
    "Q-1",
    "Operation",
    "A After Op",
    "A After Shift",
    "Q After Shift",
    "Q-1 After Shift",
    "New Bit",
];

fn bit_cell(bit: Option<u8>) -> String {
    bit.map_or_else(|| "-".to_owned(), |b| b.to_string())
}

fn row(record: &StepRecord) -> [String; 10] {
    [
        record.index.to_string(),
        record.initial_a.clone(),
        record.initial_q.clone(),
        bit_cell(record.initial_q1),
        record.operation.to_string(),
        record.after_op_a.clone(),
        record.after_shift_a.clone(),
        record.after_shift_q.clone(),
        bit_cell(record.after_shift_q1),
        bit_cell(record.new_bit),
    ]
}

/// Renders the step trace as an aligned text table, one row per iteration.
#[must_use]
pub fn render_table(steps: &StepTrace) -> String {
    let rows: Vec<[String; 10]> = steps.iter().map(row).collect();

    let mut widths: [usize; 10] = HEADERS.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let render_line = |cells: &[String; 10]| -> String {
        let joined: Vec<String> = widths
            .iter()
            .zip(cells.iter())
            .map(|(w, cell)| format!("{cell:<width$}", width = *w))
            .collect();
        format!("| {} |", joined.join(" | "))
    };

    let header: [String; 10] = HEADERS.map(str::to_owned);
    let rule: String = format!(
        "|{}|",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("|")
    );

    out.push_str(&render_line(&header));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for cells in &rows {
        out.push_str(&render_line(cells));
        out.push('\n');
    }
    out
}

/// Renders a Booth multiplication outcome: result summary plus step table.
#[must_use]
pub fn render_multiplication(result: &MultiplicationResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Product (decimal): {}\n", result.product));
    out.push_str(&format!(
        "Product (binary):  {}\n",
        result.product.to_str_radix(2)
    ));
    out.push_str(&format!("Register width:    {} bits\n\n", result.bit_width));
    out.push_str(&render_table(&result.steps));
    out
}

/// Renders a division outcome: quotient/remainder summary plus step table.
#[must_use]
pub fn render_division(result: &DivisionResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Quotient (decimal): {}\n", result.quotient));
    out.push_str(&format!(
        "Quotient (binary):  {}\n",
        result.quotient.to_str_radix(2)
    ));
    out.push_str(&format!("Remainder:          {}\n", result.remainder));
    out.push_str(&format!("Register width:     {} bits\n\n", result.bit_width));
    out.push_str(&render_table(&result.steps));
    out
}
