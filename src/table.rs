use crate::offering_scraper::SubjectData;

pub const HEADINGS: [&str; 9] = [
    "nrc",
    "key",
    "name",
    "section",
    "credits",
    "schedule",
    "slots",
    "available",
    "professor",
];

/// Render the offerings for one course code as a column-aligned text table:
/// a title line, the fixed 9-column header, a dash rule, then one line per
/// offering. An empty result set renders a single all-placeholder row.
pub fn render_table(offerings: &[SubjectData], course_key: &str) -> String {
    let first_name = offerings.first().map(|s| s.name.as_str()).unwrap_or("");
    let title = format!("{course_key} - {first_name}").trim_end().to_string();

    let rows: Vec<Vec<String>> = if offerings.is_empty() {
        vec![vec!["-".to_string(); HEADINGS.len()]]
    } else {
        offerings.iter().map(subject_cells).collect()
    };

    let mut widths: Vec<usize> = HEADINGS.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let header: Vec<String> = HEADINGS.iter().map(|h| h.to_string()).collect();
    let rule_len = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(title);
    lines.push(render_row(&header, &widths));
    lines.push("-".repeat(rule_len));
    for row in &rows {
        lines.push(render_row(row, &widths));
    }
    lines.join("\n")
}

fn subject_cells(subject: &SubjectData) -> Vec<String> {
    vec![
        subject.nrc.clone(),
        subject.key.clone(),
        initials(&subject.name),
        subject.section.clone(),
        subject.credits.to_string(),
        subject.schedule.clone(),
        subject.slots.to_string(),
        subject.available.to_string(),
        subject.professor.clone(),
    ]
}

/// "Estructuras De Datos" -> "EDD". Long course titles would otherwise
/// dominate the table width.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    line.trim_end().to_string()
}
