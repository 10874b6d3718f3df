//! Labeled URL dataset: CSV with `url` and `label` columns (1 = phishing).

use std::path::Path;

use super::TrainError;

/// One training example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledUrl {
    pub url: String,
    pub phishing: bool,
}

/// Reads `url,label` rows. Extra columns are ignored; column order is free.
pub fn load_dataset(path: &Path) -> Result<Vec<LabeledUrl>, TrainError> {
    let csv_err = |source| TrainError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = reader.headers().map_err(csv_err)?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| TrainError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    };
    let url_idx = column("url")?;
    let label_idx = column("label")?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let url = record.get(url_idx).unwrap_or("").to_string();
        let raw_label = record.get(label_idx).unwrap_or("");
        let phishing = parse_label(raw_label).ok_or_else(|| TrainError::InvalidLabel {
            line,
            value: raw_label.to_string(),
        })?;
        rows.push(LabeledUrl { url, phishing });
    }

    tracing::info!("loaded {} labeled urls from {}", rows.len(), path.display());
    Ok(rows)
}

fn parse_label(raw: &str) -> Option<bool> {
    match raw.parse::<i64>().ok()? {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn reads_rows_with_quoted_commas() {
        let f = csv_file("url,label\nhttps://example.com,0\n\"http://x.com/?a=1,2\",1\n");
        let rows = load_dataset(f.path()).unwrap();
        assert_eq!(
            rows,
            vec![
                LabeledUrl {
                    url: "https://example.com".into(),
                    phishing: false
                },
                LabeledUrl {
                    url: "http://x.com/?a=1,2".into(),
                    phishing: true
                },
            ]
        );
    }

    #[test]
    fn column_order_is_free() {
        let f = csv_file("label,source,url\n1,feed,http://10.0.0.1/login\n");
        let rows = load_dataset(f.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].phishing);
        assert_eq!(rows[0].url, "http://10.0.0.1/login");
    }

    #[test]
    fn missing_label_column() {
        let f = csv_file("url\nhttps://example.com\n");
        assert!(matches!(
            load_dataset(f.path()),
            Err(TrainError::MissingColumn { column: "label", .. })
        ));
    }

    #[test]
    fn bad_label_reports_line() {
        let f = csv_file("url,label\nhttps://a.com,0\nhttps://b.com,phish\n");
        match load_dataset(f.path()) {
            Err(TrainError::InvalidLabel { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "phish");
            }
            other => panic!("expected InvalidLabel, got {other:?}"),
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_dataset(&dir.path().join("nope.csv")),
            Err(TrainError::Csv { .. })
        ));
    }
}
