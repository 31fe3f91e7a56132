//! Sink adapter: stream encoded records into any `std::io::Write`.
//!
//! The encoder itself never performs I/O. [`RecordWriter`] wires an encoder
//! to a byte sink and handles the streaming protocol: the optional `#TYPE`
//! marker and the header line are emitted lazily, just before the first row,
//! so the first record through the pipeline can define the columns.

use std::io::Write;

use crate::config::EncoderConfig;
use crate::encoder::DelimitedRecordEncoder;
use crate::error::Result;
use crate::record::Record;

/// Line terminator for encoded output.
const LINE_TERMINATOR: &str = "\n";

/// Streams records as delimited lines into a byte sink.
///
/// # Example
///
/// ```
/// use dsv_oxide::{EncoderConfig, QuotePolicy, Record, RecordWriter};
///
/// let config = EncoderConfig::new().with_quote_policy(QuotePolicy::AsNeeded);
/// let mut writer = RecordWriter::new(Vec::new(), config)?;
///
/// writer.write_record(&Record::new().with_field("Name", "a.txt"))?;
/// writer.write_record(&Record::new().with_field("Name", "b,c.txt"))?;
///
/// let bytes = writer.finish()?;
/// assert_eq!(String::from_utf8(bytes).unwrap(), "Name\na.txt\n\"b,c.txt\"\n");
/// # Ok::<(), dsv_oxide::Error>(())
/// ```
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    encoder: DelimitedRecordEncoder,
    sink: W,
    /// Set once the `#TYPE` marker was attempted
    wrote_marker: bool,
    /// Set once the header line was attempted
    wrote_header: bool,
}

impl<W: Write> RecordWriter<W> {
    /// Create a writer over `sink` with the given configuration.
    pub fn new(sink: W, config: EncoderConfig) -> Result<Self> {
        Ok(Self {
            encoder: DelimitedRecordEncoder::new(config)?,
            sink,
            wrote_marker: false,
            wrote_header: false,
        })
    }

    /// Fix the column set up front instead of deriving it from the first
    /// record. Single-use, like
    /// [`DelimitedRecordEncoder::initialize`](crate::DelimitedRecordEncoder::initialize).
    pub fn initialize<I, S>(&mut self, field_names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.encoder.initialize(field_names)?;
        Ok(())
    }

    /// Write one record, emitting the preamble first if this is the first row.
    ///
    /// When no field set was fixed via [`initialize`](Self::initialize), the
    /// first record's fields become the columns. The `#TYPE` marker, when
    /// enabled, is derived from the first record written.
    ///
    /// Each marker, header, and row line is attempted at most once: a
    /// `write_record` that fails with an I/O error may lose its line, but a
    /// retry never emits the marker or header a second time.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        if self.encoder.field_set().is_none() {
            self.encoder.initialize_from_record(record)?;
        }

        if !self.wrote_marker {
            self.wrote_marker = true;
            if self.encoder.config().emit_type_marker {
                let marker = DelimitedRecordEncoder::type_marker(record);
                log::debug!("writing type marker: {}", marker);
                self.write_line(&marker)?;
            }
        }

        if !self.wrote_header {
            self.wrote_header = true;
            let header = self.encoder.encode_header()?;
            let columns = self.encoder.field_set().map_or(0, |f| f.len());
            log::debug!("writing header with {} column(s)", columns);
            self.write_line(&header)?;
        }

        let line = self.encoder.encode_record(record)?;
        self.write_line(&line)?;
        Ok(())
    }

    /// Write one terminated line as a single sink call.
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut terminated = String::with_capacity(line.len() + LINE_TERMINATOR.len());
        terminated.push_str(line);
        terminated.push_str(LINE_TERMINATOR);
        self.sink.write_all(terminated.as_bytes())?;
        Ok(())
    }

    /// Write every record of an iterator.
    pub fn write_records<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush the sink and hand it back.
    ///
    /// An output with no records written produces no bytes, header included:
    /// the preamble only ever accompanies at least one row.
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}

/// Encode a sequence of records to a single string.
///
/// Convenience for the convert-to-text use: marker (when enabled) and header
/// derived from the first record, one line per record, `\n`-terminated.
/// Returns an empty string for an empty sequence.
///
/// # Example
///
/// ```
/// use dsv_oxide::{encode_to_string, EncoderConfig, Record};
///
/// let records = vec![
///     Record::new().with_field("A", "x").with_field("B", "y"),
///     Record::new().with_field("A", "1"),
/// ];
/// let text = encode_to_string(&records, EncoderConfig::default())?;
/// assert_eq!(text, "\"A\",\"B\"\n\"x\",\"y\"\n\"1\",\"\"\n");
/// # Ok::<(), dsv_oxide::Error>(())
/// ```
pub fn encode_to_string<'a, I>(records: I, config: EncoderConfig) -> Result<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut writer = RecordWriter::new(Vec::new(), config)?;
    writer.write_records(records)?;
    let bytes = writer.finish()?;
    // The writer only ever produces UTF-8.
    Ok(String::from_utf8(bytes).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::QuotePolicy;

    fn as_needed() -> EncoderConfig {
        EncoderConfig::new().with_quote_policy(QuotePolicy::AsNeeded)
    }

    #[test]
    fn test_writer_lazy_header_from_first_record() {
        let mut writer = RecordWriter::new(Vec::new(), as_needed()).unwrap();
        writer
            .write_record(&Record::new().with_field("B", "1").with_field("A", "2"))
            .unwrap();
        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(out, "B,A\n1,2\n");
    }

    #[test]
    fn test_writer_explicit_initialize() {
        let mut writer = RecordWriter::new(Vec::new(), as_needed()).unwrap();
        writer.initialize(["A", "B"]).unwrap();
        writer.write_record(&Record::new().with_field("B", "only")).unwrap();
        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(out, "A,B\n,only\n");
    }

    #[test]
    fn test_writer_empty_output_has_no_header() {
        let writer = RecordWriter::new(Vec::new(), as_needed()).unwrap();
        let out = writer.finish().unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_writer_type_marker_from_first_record() {
        let config = as_needed().with_type_marker(true);
        let mut writer = RecordWriter::new(Vec::new(), config).unwrap();
        writer
            .write_record(
                &Record::new()
                    .with_type_name("System.IO.FileInfo")
                    .with_field("Name", "a.txt"),
            )
            .unwrap();
        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(out, "#TYPE System.IO.FileInfo\nName\na.txt\n");
    }

    #[test]
    fn test_encode_to_string_empty_input() {
        let text = encode_to_string(&[], EncoderConfig::default()).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_encode_to_string_multiple_rows() {
        let records = vec![
            Record::new().with_field("A", "x,y").with_field("B", "z"),
            Record::new().with_field("A", "p").with_field("B", "q"),
        ];
        let text = encode_to_string(&records, as_needed()).unwrap();
        assert_eq!(text, "A,B\n\"x,y\",z\np,q\n");
    }
}
