use super::OutputFormatter;
use anyhow::{Context, Result};
use geoscan_core::{REPORT_HEADERS, Record};
use handlebars::Handlebars;
use serde_json::json;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Handlebars template of the HTML report
pub const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Image EXIF Data</title>
</head>
<body>
    <table>
        <tr>
            <th>Path</th>
            <th>Latitude</th>
            <th>Longitude</th>
        </tr>
        {{#each records}}
        <tr>
            <td><img src='{{path}}' alt='{{basename path}}' /></td>
            <td>{{latitude}}</td>
            <td>{{longitude}}</td>
        </tr>
        {{/each}}
    </table>
</body>
</html>
"#;

/// CSV formatter for in-memory tabular output
pub struct CsvFormatter;

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_batch(&self, records: &[Record]) -> Result<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(REPORT_HEADERS)?;

        for record in records {
            wtr.write_record(record.as_row())?;
        }

        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?)
    }
}

/// Streaming CSV report backed by a file
///
/// Rows are written one at a time so a single bad row does not lose the rest
/// of the report.
pub struct CsvReportWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
}

impl CsvReportWriter {
    /// Create (or truncate) the report file
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: csv::Writer::from_writer(file),
            path: path.to_path_buf(),
        })
    }

    /// Write the `path,latitude,longitude` header row
    pub fn write_header(&mut self) -> csv::Result<()> {
        self.writer.write_record(REPORT_HEADERS)
    }

    /// Write one data row
    pub fn write_record(&mut self, record: &Record) -> csv::Result<()> {
        self.writer.write_record(record.as_row())
    }

    /// Flush buffered rows and close the file
    pub fn finish(self) -> io::Result<PathBuf> {
        let file = self.writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(self.path)
    }
}

/// HTML report rendering a table of thumbnails and coordinates
pub struct HtmlReport {
    handlebars: Handlebars<'static>,
}

impl HtmlReport {
    const TEMPLATE_NAME: &'static str = "metadata_table";

    pub fn new() -> Result<Self> {
        Self::with_template(HTML_TEMPLATE)
    }

    /// Build a report from a custom template
    ///
    /// The template receives `records`, a list of `{path, latitude, longitude}`.
    pub fn with_template(template: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Register helpers
        super::template_helpers::register_helpers(&mut handlebars);

        handlebars.register_template_string(Self::TEMPLATE_NAME, template)?;

        Ok(Self { handlebars })
    }

    /// Render the document for `records`
    pub fn render(&self, records: &[Record]) -> Result<String> {
        let data = json!({ "records": records });
        Ok(self.handlebars.render(Self::TEMPLATE_NAME, &data)?)
    }

    /// Render and write the document to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path, records: &[Record]) -> Result<()> {
        let document = self.render(records)?;
        std::fs::write(path, document)
            .with_context(|| format!("Failed to write HTML file {}", path.display()))
    }
}

impl OutputFormatter for HtmlReport {
    fn format_batch(&self, records: &[Record]) -> Result<String> {
        self.render(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, latitude: &str, longitude: &str) -> Record {
        Record {
            path: path.to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        }
    }

    #[test]
    fn test_csv_header_only() {
        let output = CsvFormatter::new().format_batch(&[]).unwrap();
        assert_eq!(output, "path,latitude,longitude\n");
    }

    #[test]
    fn test_csv_rows_in_order() {
        let records = [
            record("images/b.jpg", "1.5", "-2"),
            record("images/a.jpg", "51.5074", "0.1278"),
        ];

        let output = CsvFormatter::new().format_batch(&records).unwrap();

        assert_eq!(
            output,
            "path,latitude,longitude\nimages/b.jpg,1.5,-2\nimages/a.jpg,51.5074,0.1278\n"
        );
    }

    #[test]
    fn test_csv_quotes_special_fields() {
        let records = [record("images/a,b \"x\".jpg", "1", "2")];

        let output = CsvFormatter::new().format_batch(&records).unwrap();

        assert!(output.contains("\"images/a,b \"\"x\"\".jpg\",1,2\n"));
    }

    #[test]
    fn test_csv_report_writer() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let mut writer = CsvReportWriter::create(&path).unwrap();
        writer.write_header().unwrap();
        writer
            .write_record(&record("images/a.jpg", "51.5074", "0.1278"))
            .unwrap();
        let written = writer.finish().unwrap();

        assert_eq!(written, path);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "path,latitude,longitude\nimages/a.jpg,51.5074,0.1278\n"
        );
    }

    #[test]
    fn test_csv_report_writer_create_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("out.csv");

        assert!(CsvReportWriter::create(&path).is_err());
    }

    #[test]
    fn test_html_empty_table() {
        let output = HtmlReport::new().unwrap().render(&[]).unwrap();

        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("<title>Image EXIF Data</title>"));
        assert!(output.contains("<th>Path</th>"));
        assert_eq!(output.matches("<tr>").count(), 1);
        assert!(!output.contains("<img"));
    }

    #[test]
    fn test_html_rows_in_order() {
        let records = [
            record("images/z.jpg", "1", "2"),
            record("images/sub/a.png", "3", "4"),
        ];

        let output = HtmlReport::new().unwrap().render(&records).unwrap();

        assert_eq!(output.matches("<tr>").count(), 3);
        let first = output.find("<img src='images/z.jpg' alt='z.jpg' />").unwrap();
        let second = output
            .find("<img src='images/sub/a.png' alt='a.png' />")
            .unwrap();
        assert!(first < second);
        assert!(output.contains("<td>3</td>"));
        assert!(output.contains("<td>4</td>"));
    }

    #[test]
    fn test_html_escapes_paths() {
        let records = [record("images/x' onerror='alert(1)<b>.jpg", "1", "2")];

        let output = HtmlReport::new().unwrap().render(&records).unwrap();

        assert!(!output.contains("onerror='alert"));
        assert!(!output.contains("<b>"));
        assert!(output.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_custom_template() {
        let report =
            HtmlReport::with_template("{{#each records}}{{basename path}};{{/each}}").unwrap();

        let output = report
            .format_batch(&[record("images/trip/a.jpg", "1", "2")])
            .unwrap();

        assert_eq!(output, "a.jpg;");
    }

    #[test]
    fn test_html_write_to() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.html");
        std::fs::write(&path, "stale").unwrap();

        HtmlReport::new()
            .unwrap()
            .write_to(&path, &[record("images/a.jpg", "51.5074", "0.1278")])
            .unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(!html.contains("stale"));
        assert!(html.contains("<img src='images/a.jpg' alt='a.jpg' />"));
        assert!(html.contains("<td>51.5074</td>"));
    }

    #[test]
    fn test_html_write_to_missing_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope").join("out.html");

        let err = HtmlReport::new().unwrap().write_to(&path, &[]).unwrap_err();

        assert!(err.to_string().contains("Failed to write HTML file"));
    }
}
