use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const TEST_FILE_CONTENT: &str = "+[-[<<[+[--->]-[<<<]]]>>>-]";
// writeln! does add an extra newline character at the end, but will ignore
// that since really only interested in the number of BF instructions
pub const TEST_FILE_NUM_INSTRUCTIONS: usize = TEST_FILE_CONTENT.len();

/// A Brainfuck program written out to a temporary file, removed on drop.
pub struct TestFile {
    file: NamedTempFile,
}

impl TestFile {
    pub fn new() -> io::Result<Self> {
        Self::with_content(TEST_FILE_CONTENT)
    }

    pub fn with_content(content: &str) -> io::Result<Self> {
        Self::with_bytes(content.as_bytes())
    }

    pub fn with_bytes(content: &[u8]) -> io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(content)?;
        writeln!(file)?;

        // Seek to the start of the file after writing so it can be read straight away
        file.seek(SeekFrom::Start(0))?;
        Ok(TestFile { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Read for TestFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // Need to borrow it mutably to perform reads
        self.file.as_file_mut().read(buf)
    }
}
