use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use super::{ReportError, write_file};
use crate::keywords::store::{CategoryBucket, KeywordRecord};
use crate::pipeline::ResearchReport;

const STYLE: &str = "body{font-family:Arial,sans-serif;margin:2rem;background:#f7f9fb;color:#1d2733}\
h1{margin-bottom:.25rem}\
.cards{display:flex;gap:1rem;flex-wrap:wrap;margin:1.5rem 0}\
.card{background:#fff;border-radius:8px;padding:1rem 1.5rem;box-shadow:0 1px 3px rgba(0,0,0,.1)}\
.card .value{font-size:1.6rem;font-weight:bold}\
table{border-collapse:collapse;width:100%;background:#fff;margin-bottom:2rem}\
th,td{padding:.4rem .8rem;border-bottom:1px solid #e3e8ee;text-align:right}\
th{background:#1d4e89;color:#fff}\
.lt{color:#1d7a3a;font-weight:bold}";

/// Escape text for HTML element content and attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `1234567` → `"1,234,567"`.
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Full right-to-left HTML document for a research run.
pub fn render_html(report: &ResearchReport, client: &str, competitors: &[String]) -> String {
    let client = escape_html(client);
    let summary = &report.summary;

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"he\" dir=\"rtl\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>מחקר מילות מפתח - {client}</title>");
    let _ = writeln!(out, "<style>{STYLE}</style>\n</head>\n<body>");
    let _ = writeln!(out, "<h1>מחקר מילות מפתח - {client}</h1>");

    if !competitors.is_empty() {
        let list: Vec<String> = competitors.iter().map(|d| escape_html(d)).collect();
        let _ = writeln!(out, "<p>מתחרים: {}</p>", list.join(", "));
    }

    out.push_str("<div class=\"cards\">\n");
    push_card(&mut out, "סה\"כ מילות מפתח", &format_count(summary.total_keywords as u64));
    push_card(&mut out, "נפח חיפוש כולל", &format_count(summary.total_volume));
    push_card(&mut out, "קטגוריות", &summary.categories.to_string());
    push_card(&mut out, "זנב ארוך", &format_count(summary.long_tail as u64));
    push_card(&mut out, "מתחרים שנבדקו", &competitors.len().to_string());
    out.push_str("</div>\n");

    push_stages(&mut out, report);

    let mut buckets: Vec<&CategoryBucket> = report.store.buckets().iter().collect();
    buckets.sort_by_key(|b| std::cmp::Reverse(b.total_volume()));
    for bucket in buckets {
        push_category(&mut out, bucket);
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn push_card(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        out,
        "<div class=\"card\"><div class=\"label\">{}</div><div class=\"value\">{value}</div></div>",
        escape_html(label)
    );
}

fn push_stages(out: &mut String, report: &ResearchReport) {
    out.push_str("<h2>שלבי המחקר</h2>\n<table>\n<tr><th>שלב</th><th>נבדקו</th><th>נוספו</th></tr>\n");
    let _ = writeln!(
        out,
        "<tr><td>Competitors</td><td>{}</td><td>{}</td></tr>",
        format_count(report.competitor_keywords as u64),
        format_count(report.competitor_added as u64)
    );
    for wave in &report.waves {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(wave.name),
            format_count(wave.checked as u64),
            format_count(wave.added as u64)
        );
    }
    out.push_str("</table>\n");
}

fn push_category(out: &mut String, bucket: &CategoryBucket) {
    let _ = writeln!(
        out,
        "<h2>{} ({} מילים, {} חיפושים)</h2>",
        escape_html(bucket.label),
        bucket.records.len(),
        format_count(bucket.total_volume())
    );
    out.push_str(
        "<table>\n<tr><th>מילת מפתח</th><th>נפח</th><th>CPC</th><th>קושי</th><th>תחרות</th><th>זנב ארוך</th></tr>\n",
    );
    for record in &bucket.records {
        push_row(out, record);
    }
    out.push_str("</table>\n");
}

fn push_row(out: &mut String, record: &KeywordRecord) {
    let long_tail = if record.is_long_tail {
        "<span class=\"lt\">✓</span>"
    } else {
        ""
    };
    let _ = writeln!(
        out,
        "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td><td>{:.2}</td><td>{long_tail}</td></tr>",
        escape_html(&record.keyword),
        format_count(record.volume),
        record.cpc,
        record.difficulty,
        record.competition
    );
}

pub fn save_html(
    report: &ResearchReport,
    client: &str,
    competitors: &[String],
    path: &Path,
) -> Result<(), ReportError> {
    write_file(path, &render_html(report, client, competitors))?;
    info!(path = %path.display(), "generated HTML report");
    Ok(())
}
