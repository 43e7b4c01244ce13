use crate::detection::{convert_to_utf8, detect_charset, is_binary_data};
use crate::error::{Result, TabsumError};
use crate::types::constants::BUFF_SIZE;
use crate::types::TabsumErrorType;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Somewhere raw table text comes from.
///
/// Retrying or falling back to another source is up to the caller.
pub trait TextSource {
    /// Short description for logs and error messages
    fn describe(&self) -> String;

    fn read_text(&mut self) -> Result<String>;
}

/// Uploaded file. Bytes are charset-detected and decoded to UTF-8.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    charset: Option<String>,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
            charset: None,
        }
    }

    /// Charset detected by the last successful read
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }
}

impl TextSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn read_text(&mut self) -> Result<String> {
        let file = File::open(&self.path).map_err(|e| {
            TabsumError::Source(format!("Could not open {}: {}", self.path.display(), e))
        })?;
        let data = read_all(BufReader::new(file))?;

        let (text, charset) = decode(&data)?;
        info!(
            "Read {} bytes from {} ({})",
            data.len(),
            self.path.display(),
            charset
        );
        self.charset = Some(charset);
        Ok(text)
    }
}

/// Pasted text from any reader, stdin in the CLI
pub struct ReaderSource<R: Read> {
    name: String,
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        ReaderSource {
            name: name.into(),
            reader,
        }
    }
}

impl<R: Read> TextSource for ReaderSource<R> {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn read_text(&mut self) -> Result<String> {
        let data = read_all(&mut self.reader)?;
        let (text, charset) = decode(&data)?;
        debug!("Read {} bytes from {} ({})", data.len(), self.name, charset);
        Ok(text)
    }
}

/// Text already in memory
#[derive(Debug, Clone)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        InlineSource { text: text.into() }
    }
}

impl TextSource for InlineSource {
    fn describe(&self) -> String {
        "inline text".to_string()
    }

    fn read_text(&mut self) -> Result<String> {
        Ok(self.text.clone())
    }
}

fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    let mut buffer = vec![0u8; BUFF_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        data.extend_from_slice(&buffer[..bytes_read]);
    }

    Ok(data)
}

/// Decode to UTF-8, returning the text and the detected charset
fn decode(data: &[u8]) -> Result<(String, String)> {
    if is_binary_data(data) {
        return Err(TabsumError::Table(TabsumErrorType::Binary));
    }

    let charset = detect_charset(data);
    let text = convert_to_utf8(data, &charset).map_err(TabsumError::Encoding)?;
    Ok((text, charset))
}
