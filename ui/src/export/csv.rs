//! CSV encoding for publication exports.
//!
//! Text columns are wrapped in double quotes verbatim: embedded quotes are
//! not doubled, so a title containing `"` produces a malformed row. List
//! columns are joined with `"; "`. Numbers are written unquoted.

use crate::core::config::EXPORT_SUFFIX;
use crate::core::sample::PublicationRecord;

pub const HEADER: [&str; 6] = [
    "Title",
    "Fields",
    "Authors",
    "Total Self Citations",
    "Published Year",
    "Total Citations",
];

/// Header line followed by one line per record, `\n`-separated, without a
/// trailing newline.
pub fn encode_publications(records: &[PublicationRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADER.join(","));
    lines.extend(records.iter().map(encode_row));
    lines.join("\n")
}

fn encode_row(record: &PublicationRecord) -> String {
    [
        quote(&record.title),
        quote(&record.fields.join("; ")),
        quote(&record.authors.join("; ")),
        record.total_self_citations.to_string(),
        record.published_year.to_string(),
        record.total_citations.to_string(),
    ]
    .join(",")
}

fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

/// `{author}_publications.csv`; the name is used as given.
pub fn artifact_name(author: &str) -> String {
    format!("{author}{EXPORT_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample;

    fn record(title: &str) -> PublicationRecord {
        PublicationRecord {
            title: title.to_string(),
            fields: vec!["Optics".into(), "Physics".into()],
            authors: vec!["A. Fresnel".into()],
            total_self_citations: -1,
            published_year: 1818,
            total_citations: 0,
        }
    }

    #[test]
    fn header_only_for_empty_input() {
        assert_eq!(
            encode_publications(&[]),
            "Title,Fields,Authors,Total Self Citations,Published Year,Total Citations"
        );
    }

    #[test]
    fn row_layout() {
        let csv = encode_publications(&[record("Wave theory")]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "\"Wave theory\",\"Optics; Physics\",\"A. Fresnel\",-1,1818,0");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn quotes_and_commas_are_not_escaped() {
        let csv = encode_publications(&[record("On \"light\", briefly")]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"On \"light\", briefly\","));
    }

    #[test]
    fn sample_export_shape() {
        let csv = encode_publications(&sample::publications());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Title,Fields,Authors,Total Self Citations,Published Year,Total Citations"
        );
        assert_eq!(
            lines[1],
            "\"Title of Publication\",\"Field 01; Field 02; Field 03; Field 04; Field 05\",\"Mr. XXXX; Mr. YYYY; Mr. ZZZZ\",250,250,250"
        );
    }

    #[test]
    fn artifact_name_keeps_author_verbatim() {
        assert_eq!(artifact_name("Jone Mickel"), "Jone Mickel_publications.csv");
        assert_eq!(artifact_name("a/b"), "a/b_publications.csv");
        assert_eq!(artifact_name(""), "_publications.csv");
    }
}
